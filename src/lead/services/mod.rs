//! Application services for lead management.

mod store;

pub use store::{LeadStore, LeadStoreError, LeadStoreResult};
