//! Follow-up email generation with guaranteed output.

use super::templates::{FAILURE_MESSAGE, fallback_email, writer_prompt};
use super::{FollowUpContext, FollowUpWriter};
use crate::lead::domain::Lead;
use crate::property::domain::Property;
use std::sync::Arc;

/// Produces follow-up email text for a lead.
#[derive(Clone, Default)]
pub struct FollowUpEmailService {
    writer: Option<Arc<dyn FollowUpWriter>>,
}

impl FollowUpEmailService {
    /// Creates a service that always uses the built-in template.
    #[must_use]
    pub fn template_only() -> Self {
        Self::default()
    }

    /// Creates a service delegating to `writer`.
    #[must_use]
    pub fn with_writer(writer: Arc<dyn FollowUpWriter>) -> Self {
        Self {
            writer: Some(writer),
        }
    }

    /// Returns `true` when an external writer is configured.
    #[must_use]
    pub const fn has_writer(&self) -> bool {
        self.writer.is_some()
    }

    /// Generates the email body. Never fails.
    ///
    /// Without a writer the built-in template is rendered. Writer errors,
    /// blank drafts and template errors all yield [`FAILURE_MESSAGE`].
    #[tracing::instrument(skip(self, lead, property), fields(lead_id = %lead.id()))]
    pub async fn generate(&self, lead: &Lead, property: Option<&Property>) -> String {
        let context = FollowUpContext::new(lead, property);
        let Some(writer) = &self.writer else {
            return fallback_email(&context).unwrap_or_else(|err| {
                tracing::warn!(error = %err, "fallback email failed to render");
                FAILURE_MESSAGE.to_owned()
            });
        };

        let prompt = match writer_prompt(&context) {
            Ok(prompt) => prompt,
            Err(err) => {
                tracing::warn!(error = %err, "writer prompt failed to render");
                return FAILURE_MESSAGE.to_owned();
            }
        };
        match writer.write(&context, &prompt).await {
            Ok(draft) if !draft.trim().is_empty() => draft,
            Ok(_) => {
                tracing::debug!("writer returned an empty draft");
                FAILURE_MESSAGE.to_owned()
            }
            Err(err) => {
                tracing::warn!(error = %err, "follow-up writer failed");
                FAILURE_MESSAGE.to_owned()
            }
        }
    }
}
