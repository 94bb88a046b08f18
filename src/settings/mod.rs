//! User-facing dashboard settings.
//!
//! Settings are a single document: theme, profile picture, stat-card
//! layout and the lead-ads integration. [`services::SettingsService`] owns
//! the load, merge and persist cycle; every change is written immediately.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
