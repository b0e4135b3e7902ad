//! Critique Provider - HTTP client for code feedback providers
//!
//! Implements the `FeedbackProvider` trait from `critique-core` against the
//! backend's analyze API.

pub mod error;
pub mod http;

pub use error::{Error, Result};
pub use http::HttpProvider;
