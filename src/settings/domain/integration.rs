//! Lead-ads integration credentials.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Connection settings for the Meta lead-ads integration.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IntegrationSettings {
    /// Facebook page identifier.
    pub page_id: String,
    /// Lead form identifier.
    pub form_id: String,
    /// Page access token.
    pub access_token: String,
    /// Whether the connection has been established.
    pub is_connected: bool,
}

impl IntegrationSettings {
    /// Creates unconnected settings from the form fields.
    #[must_use]
    pub fn new(
        page_id: impl Into<String>,
        form_id: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            page_id: page_id.into(),
            form_id: form_id.into(),
            access_token: access_token.into(),
            is_connected: false,
        }
    }

    /// Returns `true` when page, form and token are all filled in.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        [&self.page_id, &self.form_id, &self.access_token]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

impl fmt::Debug for IntegrationSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntegrationSettings")
            .field("page_id", &self.page_id)
            .field("form_id", &self.form_id)
            .field("access_token", &"<redacted>")
            .field("is_connected", &self.is_connected)
            .finish()
    }
}
