//! Change notifications emitted by the record collections.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Record collection that changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    /// Property catalog.
    Properties,
    /// Lead records.
    Leads,
    /// Scheduled tasks.
    Tasks,
}

/// Kind of mutation observed in a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// A record was created.
    Insert,
    /// A record was replaced.
    Update,
    /// A record was removed.
    Delete,
}

/// A single change notification.
///
/// Notifications carry no payload: subscribers reload every collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    /// Collection that changed.
    pub collection: Collection,
    /// Mutation kind.
    pub kind: ChangeKind,
}

impl ChangeEvent {
    /// Creates a change notification.
    #[must_use]
    pub const fn new(collection: Collection, kind: ChangeKind) -> Self {
        Self { collection, kind }
    }
}

/// Subscription contract for live-update notifications.
pub trait ChangeFeed: Send + Sync {
    /// Opens a new subscription receiving every subsequent notification.
    fn subscribe(&self) -> broadcast::Receiver<ChangeEvent>;
}

/// In-process change feed backed by a Tokio broadcast channel.
#[derive(Debug, Clone)]
pub struct BroadcastChangeFeed {
    sender: broadcast::Sender<ChangeEvent>,
}

impl BroadcastChangeFeed {
    /// Number of notifications buffered per subscriber before it lags.
    pub const DEFAULT_CAPACITY: usize = 64;

    /// Creates a feed with the given per-subscriber buffer.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Announces a change to all current subscribers.
    ///
    /// Publishing with no subscribers is not an error.
    pub fn publish(&self, event: ChangeEvent) {
        if self.sender.send(event).is_err() {
            tracing::trace!(?event, "change published with no subscribers");
        }
    }
}

impl Default for BroadcastChangeFeed {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

impl ChangeFeed for BroadcastChangeFeed {
    fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.sender.subscribe()
    }
}
