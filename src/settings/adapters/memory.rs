//! In-memory settings store.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::settings::{
    domain::DashboardSettings,
    ports::{SettingsStore, SettingsStoreError, SettingsStoreResult},
};

/// Settings store holding the document in process memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySettingsStore {
    saved: Arc<RwLock<Option<DashboardSettings>>>,
}

impl InMemorySettingsStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-loaded with a saved document.
    #[must_use]
    pub fn with_saved(settings: DashboardSettings) -> Self {
        Self {
            saved: Arc::new(RwLock::new(Some(settings))),
        }
    }
}

fn lock_error(err: impl std::fmt::Display) -> SettingsStoreError {
    SettingsStoreError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn load(&self) -> SettingsStoreResult<Option<DashboardSettings>> {
        Ok(self.saved.read().map_err(lock_error)?.clone())
    }

    async fn save(&self, settings: &DashboardSettings) -> SettingsStoreResult<()> {
        *self.saved.write().map_err(lock_error)? = Some(settings.clone());
        Ok(())
    }
}
