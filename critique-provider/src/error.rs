//! Error types for provider operations

use thiserror::Error;

/// Result type for provider operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to a feedback provider
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level HTTP error (connect failure, timeout, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider answered with a non-success status
    #[error("provider returned status {code}: {body}")]
    Status {
        /// HTTP status code
        code: u16,
        /// Response body, as far as it could be read
        body: String,
    },

    /// Endpoint URL could not be parsed
    #[error("invalid endpoint URL '{0}': {1}")]
    InvalidEndpoint(String, url::ParseError),

    /// Response body did not match the expected schema
    #[error("failed to parse provider response: {0}")]
    Parse(String),

    /// Authentication error
    #[error("provider authentication error: {0}")]
    Auth(String),

    /// Other error
    #[error("{0}")]
    Other(String),
}

impl From<Error> for critique_core::Error {
    fn from(err: Error) -> Self {
        critique_core::Error::Provider(err.to_string())
    }
}
