//! Port for external email drafting.

use super::FollowUpContext;
use async_trait::async_trait;
use thiserror::Error;

/// Failure reported by a follow-up writer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("follow-up writer failed: {0}")]
pub struct FollowUpWriterError(pub String);

/// Drafts a follow-up email body.
#[async_trait]
pub trait FollowUpWriter: Send + Sync {
    /// Drafts an email for `context`, guided by `prompt`.
    ///
    /// # Errors
    ///
    /// Returns [`FollowUpWriterError`] when the draft cannot be produced.
    async fn write(
        &self,
        context: &FollowUpContext,
        prompt: &str,
    ) -> Result<String, FollowUpWriterError>;
}
