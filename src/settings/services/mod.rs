//! Application services for dashboard settings.

mod service;

pub use service::{SettingsService, SettingsServiceError, SettingsServiceResult};
