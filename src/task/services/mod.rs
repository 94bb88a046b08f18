//! Application services for task scheduling.

mod store;

pub use store::{TaskStore, TaskStoreError, TaskStoreResult};
