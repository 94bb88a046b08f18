//! Period-over-period trend indicators.

use super::StatCardId;
use serde::{Deserialize, Serialize};

/// Direction of change against the reference period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// Above the reference.
    Up,
    /// Below the reference.
    Down,
    /// Equal to the reference.
    Neutral,
}

/// Change of a stat relative to its reference value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    /// Direction of change.
    pub direction: TrendDirection,
    /// Magnitude of change in percent, never negative.
    pub change: f64,
}

impl Trend {
    /// Compares `current` with `reference`.
    ///
    /// A zero reference yields `Up` by 100 when `current` is positive and
    /// `Neutral` by 0 otherwise.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "trend percentages are presentation values"
    )]
    pub fn between(current: f64, reference: f64) -> Self {
        if reference.abs() < f64::EPSILON {
            return if current > 0.0 {
                Self {
                    direction: TrendDirection::Up,
                    change: 100.0,
                }
            } else {
                Self {
                    direction: TrendDirection::Neutral,
                    change: 0.0,
                }
            };
        }
        let delta = (current - reference) / reference * 100.0;
        let direction = if delta > 0.0 {
            TrendDirection::Up
        } else if delta < 0.0 {
            TrendDirection::Down
        } else {
            TrendDirection::Neutral
        };
        Self {
            direction,
            change: delta.abs(),
        }
    }

    /// Returns the pt-BR caption shown under a stat card.
    #[must_use]
    pub fn caption(&self) -> String {
        match self.direction {
            TrendDirection::Neutral => "Sem alteração".to_owned(),
            TrendDirection::Up | TrendDirection::Down => {
                format!("{:.1}% vs. semana passada", self.change)
            }
        }
    }
}

/// Reference values of the previous period, one per stat card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriorPeriod {
    /// New leads.
    pub new_leads: f64,
    /// Visits today.
    pub visits_today: f64,
    /// Follow-ups today.
    pub follow_ups: f64,
    /// Proposals sent.
    pub proposals_sent: f64,
    /// Deals closed.
    pub deals_closed: f64,
    /// Conversion rate in percent.
    pub conversion_rate: f64,
}

impl PriorPeriod {
    /// Returns the reference value for a card.
    #[must_use]
    pub const fn reference(&self, id: StatCardId) -> f64 {
        match id {
            StatCardId::NewLeads => self.new_leads,
            StatCardId::VisitsToday => self.visits_today,
            StatCardId::FollowUps => self.follow_ups,
            StatCardId::ProposalsSent => self.proposals_sent,
            StatCardId::DealsClosed => self.deals_closed,
            StatCardId::ConversionRate => self.conversion_rate,
        }
    }
}

impl Default for PriorPeriod {
    fn default() -> Self {
        Self {
            new_leads: 5.0,
            visits_today: 1.0,
            follow_ups: 4.0,
            proposals_sent: 3.0,
            deals_closed: 1.0,
            conversion_rate: 15.0,
        }
    }
}
