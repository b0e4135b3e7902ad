//! Provider abstraction for feedback backends

use async_trait::async_trait;

use crate::feedback::Feedback;
use crate::source::SourceFile;
use crate::Result;

/// Trait for code feedback providers
///
/// The contract is deliberately narrow: submit one file's text, receive one
/// `Feedback`. Transport, authentication, and wire format are the
/// implementation's business.
#[async_trait]
pub trait FeedbackProvider: Send + Sync {
    /// Get the name of this provider
    fn name(&self) -> &'static str;

    /// Submit a source file for review and return the provider's feedback
    async fn review(&self, source: &SourceFile) -> Result<Feedback>;
}
