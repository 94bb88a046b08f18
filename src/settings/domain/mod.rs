//! Domain model for dashboard settings.

mod integration;
mod settings;
mod stat_card;

pub use integration::IntegrationSettings;
pub use settings::{DashboardSettings, Theme};
pub use stat_card::{IconId, StatCardConfig, default_stat_cards, merge_stat_cards};
