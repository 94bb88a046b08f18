//! Storage port for the settings document.

use crate::settings::domain::DashboardSettings;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for settings storage operations.
pub type SettingsStoreResult<T> = Result<T, SettingsStoreError>;

/// Settings persistence contract.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Loads the saved document, or `None` when nothing was saved yet.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsStoreError::Corrupt`] when saved data cannot be
    /// parsed, or [`SettingsStoreError::Persistence`] when it cannot be
    /// read.
    async fn load(&self) -> SettingsStoreResult<Option<DashboardSettings>>;

    /// Replaces the saved document.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsStoreError::Persistence`] when writing fails.
    async fn save(&self, settings: &DashboardSettings) -> SettingsStoreResult<()>;
}

/// Errors returned by settings stores.
#[derive(Debug, Clone, Error)]
pub enum SettingsStoreError {
    /// Saved data exists but is not a valid settings document.
    #[error("saved settings are corrupt: {0}")]
    Corrupt(Arc<serde_json::Error>),

    /// Storage-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl SettingsStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

impl From<serde_json::Error> for SettingsStoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Corrupt(Arc::new(err))
    }
}
