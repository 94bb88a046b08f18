//! The dashboard settings document.

use super::{IntegrationSettings, StatCardConfig, default_stat_cards};
use serde::{Deserialize, Deserializer, Serialize};

/// Colour theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light theme.
    #[default]
    Light,
    /// Dark theme.
    Dark,
}

impl Theme {
    /// Returns the other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Every user-adjustable dashboard setting.
///
/// Missing fields deserialize to their defaults, and stat card entries
/// that do not parse are skipped rather than failing the whole document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardSettings {
    /// Profile picture as a data URL or image reference.
    pub profile_picture: Option<String>,
    /// Colour theme.
    pub theme: Theme,
    /// Stat card layout.
    #[serde(deserialize_with = "lenient_stat_cards")]
    pub stat_cards: Vec<StatCardConfig>,
    /// Lead-ads integration.
    pub integration: IntegrationSettings,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            profile_picture: None,
            theme: Theme::default(),
            stat_cards: default_stat_cards(),
            integration: IntegrationSettings::default(),
        }
    }
}

fn lenient_stat_cards<'de, D>(deserializer: D) -> Result<Vec<StatCardConfig>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|value| match serde_json::from_value(value) {
            Ok(card) => Some(card),
            Err(err) => {
                tracing::debug!(error = %err, "skipping unrecognised stat card");
                None
            }
        })
        .collect())
}
