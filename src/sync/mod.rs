//! Live synchronisation of the dashboard's working set.
//!
//! Stores announce mutations on a [`ChangeFeed`]; [`SnapshotSync`] answers
//! every notification with a full reload of all three collections and
//! publishes the result as an immutable [`CrmSnapshot`]. There is no merge
//! or ordering across collections: the last reload observed wins.

mod feed;
mod snapshot;

pub use feed::{BroadcastChangeFeed, ChangeEvent, ChangeFeed, ChangeKind, Collection};
pub use snapshot::{CrmSnapshot, SnapshotSync, SyncError, SyncResult};
