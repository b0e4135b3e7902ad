//! Error types for Critique

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for Critique operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for Critique operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to read a source file
    #[error("failed to read {}: {source}", path.display())]
    ReadFile {
        /// Path that could not be read
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Feedback provider error
    #[error("provider error: {0}")]
    Provider(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}
