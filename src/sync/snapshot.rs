//! Full-reload snapshot loop.

use super::{ChangeEvent, ChangeFeed};
use crate::lead::{
    domain::Lead,
    ports::{LeadRepository, LeadRepositoryError},
};
use crate::property::{
    domain::Property,
    ports::{PropertyRepository, PropertyRepositoryError},
};
use crate::task::{
    domain::Task,
    ports::{TaskRepository, TaskRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;

/// Errors raised while reloading a snapshot.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The property catalog could not be listed.
    #[error("failed to load properties: {0}")]
    Properties(#[from] PropertyRepositoryError),
    /// The leads could not be listed.
    #[error("failed to load leads: {0}")]
    Leads(#[from] LeadRepositoryError),
    /// The tasks could not be listed.
    #[error("failed to load tasks: {0}")]
    Tasks(#[from] TaskRepositoryError),
}

/// Result type for snapshot reloads.
pub type SyncResult<T> = Result<T, SyncError>;

/// Immutable copy of every collection taken by one reload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrmSnapshot {
    properties: Vec<Property>,
    leads: Vec<Lead>,
    tasks: Vec<Task>,
}

impl CrmSnapshot {
    /// Builds a snapshot from already-loaded collections.
    #[must_use]
    pub const fn new(properties: Vec<Property>, leads: Vec<Lead>, tasks: Vec<Task>) -> Self {
        Self {
            properties,
            leads,
            tasks,
        }
    }

    /// Returns the properties, newest first.
    #[must_use]
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Returns the leads, newest first.
    #[must_use]
    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    /// Returns the tasks in calendar order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }
}

/// Keeps a [`CrmSnapshot`] current by reloading on every change.
pub struct SnapshotSync<P, L, T>
where
    P: PropertyRepository,
    L: LeadRepository,
    T: TaskRepository,
{
    properties: Arc<P>,
    leads: Arc<L>,
    tasks: Arc<T>,
    snapshot: watch::Sender<Arc<CrmSnapshot>>,
}

impl<P, L, T> SnapshotSync<P, L, T>
where
    P: PropertyRepository,
    L: LeadRepository,
    T: TaskRepository,
{
    /// Creates a sync loop starting from an empty snapshot.
    #[must_use]
    pub fn new(properties: Arc<P>, leads: Arc<L>, tasks: Arc<T>) -> Self {
        let (snapshot, _) = watch::channel(Arc::new(CrmSnapshot::default()));
        Self {
            properties,
            leads,
            tasks,
            snapshot,
        }
    }

    /// Returns a receiver that observes every published snapshot.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Arc<CrmSnapshot>> {
        self.snapshot.subscribe()
    }

    /// Returns the most recently published snapshot.
    #[must_use]
    pub fn current(&self) -> Arc<CrmSnapshot> {
        Arc::clone(&self.snapshot.borrow())
    }

    /// Loads all three collections concurrently.
    ///
    /// # Errors
    ///
    /// Returns the first [`SyncError`] raised by any collection.
    pub async fn load(&self) -> SyncResult<CrmSnapshot> {
        let (properties, leads, tasks) = tokio::try_join!(
            async { self.properties.list().await.map_err(SyncError::from) },
            async { self.leads.list().await.map_err(SyncError::from) },
            async { self.tasks.list().await.map_err(SyncError::from) },
        )?;
        Ok(CrmSnapshot::new(properties, leads, tasks))
    }

    /// Reloads everything and publishes the new snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError`] when any collection fails to load. The
    /// previously published snapshot stays in place.
    #[tracing::instrument(skip(self), err)]
    pub async fn reload(&self) -> SyncResult<Arc<CrmSnapshot>> {
        let snapshot = Arc::new(self.load().await?);
        self.snapshot.send_replace(Arc::clone(&snapshot));
        tracing::debug!(
            properties = snapshot.properties().len(),
            leads = snapshot.leads().len(),
            tasks = snapshot.tasks().len(),
            "snapshot published"
        );
        Ok(snapshot)
    }

    async fn refresh(&self) {
        if let Err(err) = self.reload().await {
            tracing::warn!(error = %err, "reload failed, keeping previous snapshot");
        }
    }

    /// Performs an initial load, then reloads on every notification until
    /// the feed closes.
    ///
    /// A lagged receiver has missed notifications, so it reloads as well.
    pub async fn run(&self, mut changes: broadcast::Receiver<ChangeEvent>) {
        self.refresh().await;
        loop {
            match changes.recv().await {
                Ok(event) => {
                    tracing::trace!(?event, "change received");
                    self.refresh().await;
                }
                Err(broadcast::error::RecvError::Lagged(missed)) => {
                    tracing::debug!(missed, "change feed lagged");
                    self.refresh().await;
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::debug!("change feed closed, stopping sync");
                    break;
                }
            }
        }
    }
}

impl<P, L, T> SnapshotSync<P, L, T>
where
    P: PropertyRepository + 'static,
    L: LeadRepository + 'static,
    T: TaskRepository + 'static,
{
    /// Subscribes to `feed` and drives [`Self::run`] on a Tokio task.
    ///
    /// The subscription is opened before spawning, so no notification sent
    /// after this call returns is missed.
    pub fn spawn(self: Arc<Self>, feed: &impl ChangeFeed) -> JoinHandle<()> {
        let changes = feed.subscribe();
        tokio::spawn(async move { self.run(changes).await })
    }
}
