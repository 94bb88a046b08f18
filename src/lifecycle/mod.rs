//! Cross-entity side effects of scheduling.
//!
//! Saving a task is the one operation that touches two collections: the task
//! itself and the lead it is for. [`LifecycleCoordinator`] sequences those
//! writes and routes confirmed deletions to the owning store. Deletion never
//! cascades.

mod coordinator;
mod deletion;
mod error;
mod policy;

pub use coordinator::LifecycleCoordinator;
pub use deletion::{DeletionTarget, PendingDeletion};
pub use error::{LifecycleError, LifecycleResult};
pub use policy::VisitStatusPolicy;

#[cfg(test)]
mod tests;
