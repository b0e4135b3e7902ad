//! Critique Core - Core library for the Critique code review tool
//!
//! This crate provides the data model, configuration, and review loop for
//! submitting Python source files to a feedback provider and collecting the
//! returned suggestions.

pub mod config;
pub mod error;
pub mod feedback;
pub mod provider;
pub mod render;
pub mod review;
pub mod secrets;
pub mod source;

pub use config::{Config, ProviderConfig};
pub use error::{Error, Result};
pub use feedback::{Feedback, FileReport, Issue, Outcome, Severity};
pub use provider::FeedbackProvider;
pub use review::ReviewRunner;
pub use secrets::Secrets;
pub use source::SourceFile;
