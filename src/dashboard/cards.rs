//! Stat cards joined with the user's layout.

use super::{DashboardStats, PriorPeriod, StatCardId, Trend};
use crate::settings::domain::{IconId, StatCardConfig};

/// A stat card ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct StatCardView {
    /// Card kind.
    pub id: StatCardId,
    /// Configured title.
    pub title: String,
    /// Configured icon.
    pub icon: IconId,
    /// Raw value.
    pub value: f64,
    /// Formatted value: a percentage with one decimal for the conversion
    /// rate, a whole number otherwise.
    pub display: String,
    /// Change against the prior period.
    pub trend: Trend,
}

/// Builds the visible cards in configured order.
#[must_use]
pub fn stat_cards(
    layout: &[StatCardConfig],
    stats: &DashboardStats,
    prior: &PriorPeriod,
) -> Vec<StatCardView> {
    layout
        .iter()
        .filter(|card| card.is_visible)
        .map(|card| {
            let value = stats.value(card.id);
            StatCardView {
                id: card.id,
                title: card.title.clone(),
                icon: card.icon,
                value,
                display: format_value(card.id, value),
                trend: Trend::between(value, prior.reference(card.id)),
            }
        })
        .collect()
}

fn format_value(id: StatCardId, value: f64) -> String {
    match id {
        StatCardId::ConversionRate => format!("{value:.1}%"),
        _ => format!("{value:.0}"),
    }
}
