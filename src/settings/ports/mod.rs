//! Port contracts for settings storage.

pub mod store;

pub use store::{SettingsStore, SettingsStoreError, SettingsStoreResult};
