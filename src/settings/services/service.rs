//! Load, change and persist the settings document.

use crate::settings::{
    domain::{DashboardSettings, IntegrationSettings, StatCardConfig, Theme, merge_stat_cards},
    ports::{SettingsStore, SettingsStoreError},
};
use std::sync::{Arc, RwLock};
use thiserror::Error;
use tokio::sync::Mutex;

/// Service-level errors for settings changes.
#[derive(Debug, Error)]
pub enum SettingsServiceError {
    /// The store rejected the write. The current settings are unchanged.
    #[error(transparent)]
    Store(#[from] SettingsStoreError),

    /// Integration settings are missing page, form or token.
    #[error("integration requires page id, form id and access token")]
    IncompleteIntegration,

    /// The in-memory settings lock was poisoned.
    #[error("settings state is unavailable")]
    Unavailable,
}

/// Result type for settings service operations.
pub type SettingsServiceResult<T> = Result<T, SettingsServiceError>;

/// Holds the current settings and writes every change through.
///
/// A change becomes current only once the store has accepted it. Changes
/// are serialized, so concurrent setters never overwrite each other.
pub struct SettingsService<S>
where
    S: SettingsStore,
{
    store: Arc<S>,
    current: RwLock<DashboardSettings>,
    writes: Mutex<()>,
}

impl<S> SettingsService<S>
where
    S: SettingsStore,
{
    /// Loads saved settings, falling back to defaults.
    ///
    /// Missing, unreadable or corrupt data yields the defaults. The stat
    /// card layout is merged against the known card kinds.
    pub async fn load(store: Arc<S>) -> Self {
        let mut settings = match store.load().await {
            Ok(Some(saved)) => saved,
            Ok(None) => DashboardSettings::default(),
            Err(err) => {
                tracing::warn!(error = %err, "saved settings unusable, using defaults");
                DashboardSettings::default()
            }
        };
        settings.stat_cards = merge_stat_cards(std::mem::take(&mut settings.stat_cards));
        Self {
            store,
            current: RwLock::new(settings),
            writes: Mutex::new(()),
        }
    }

    /// Returns a copy of the current settings.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsServiceError::Unavailable`] when the state lock is
    /// poisoned.
    pub fn current(&self) -> SettingsServiceResult<DashboardSettings> {
        self.current
            .read()
            .map(|settings| settings.clone())
            .map_err(|_| SettingsServiceError::Unavailable)
    }

    /// Switches between light and dark and returns the new theme.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsServiceError::Store`] when persisting fails.
    #[tracing::instrument(skip(self), err)]
    pub async fn toggle_theme(&self) -> SettingsServiceResult<Theme> {
        let saved = self
            .change(|settings| settings.theme = settings.theme.toggled())
            .await?;
        Ok(saved.theme)
    }

    /// Replaces the profile picture.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsServiceError::Store`] when persisting fails.
    #[tracing::instrument(skip(self, picture), err)]
    pub async fn set_profile_picture(&self, picture: impl Into<String>) -> SettingsServiceResult<()> {
        let picture = picture.into();
        self.change(move |settings| settings.profile_picture = Some(picture))
            .await
            .map(drop)
    }

    /// Replaces the stat card layout.
    ///
    /// The layout is merged, so omitted kinds come back at the end.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsServiceError::Store`] when persisting fails.
    #[tracing::instrument(skip(self, layout), err)]
    pub async fn set_stat_cards(&self, layout: Vec<StatCardConfig>) -> SettingsServiceResult<()> {
        self.change(move |settings| settings.stat_cards = merge_stat_cards(layout))
            .await
            .map(drop)
    }

    /// Stores integration credentials and marks the integration connected.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsServiceError::IncompleteIntegration`] when a field
    /// is blank, or [`SettingsServiceError::Store`] when persisting fails.
    #[tracing::instrument(skip(self, integration), fields(page_id = %integration.page_id), err)]
    pub async fn connect_integration(
        &self,
        integration: IntegrationSettings,
    ) -> SettingsServiceResult<()> {
        if !integration.is_complete() {
            return Err(SettingsServiceError::IncompleteIntegration);
        }
        self.change(move |settings| {
            settings.integration = IntegrationSettings {
                is_connected: true,
                ..integration
            };
        })
        .await
        .map(drop)
    }

    /// Clears integration credentials.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsServiceError::Store`] when persisting fails.
    #[tracing::instrument(skip(self), err)]
    pub async fn disconnect_integration(&self) -> SettingsServiceResult<()> {
        self.change(|settings| settings.integration = IntegrationSettings::default())
            .await
            .map(drop)
    }

    async fn change(
        &self,
        apply: impl FnOnce(&mut DashboardSettings) + Send,
    ) -> SettingsServiceResult<DashboardSettings> {
        let _write = self.writes.lock().await;
        let mut next = self.current()?;
        apply(&mut next);
        self.store.save(&next).await?;
        let mut current = self
            .current
            .write()
            .map_err(|_| SettingsServiceError::Unavailable)?;
        current.clone_from(&next);
        Ok(next)
    }
}
