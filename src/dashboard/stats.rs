//! Headline numbers shown on the stat cards.

use crate::lead::domain::{Lead, PipelineStatus};
use crate::task::domain::Task;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The six stat card kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatCardId {
    /// Leads in the `New` stage.
    NewLeads,
    /// Visits scheduled today.
    VisitsToday,
    /// Non-visit tasks scheduled today.
    FollowUps,
    /// Leads with a proposal sent.
    ProposalsSent,
    /// Closed deals.
    DealsClosed,
    /// Closed deals as a percentage of all leads.
    ConversionRate,
}

impl StatCardId {
    /// Every card kind in default layout order.
    pub const ALL: [Self; 6] = [
        Self::NewLeads,
        Self::VisitsToday,
        Self::FollowUps,
        Self::ProposalsSent,
        Self::DealsClosed,
        Self::ConversionRate,
    ];
}

/// Current value of every stat card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardStats {
    /// Leads in the `New` stage.
    pub new_leads: u32,
    /// Visits dated today.
    pub visits_today: u32,
    /// Non-visit tasks dated today.
    pub follow_ups: u32,
    /// Leads in the `Proposal` stage.
    pub proposals_sent: u32,
    /// Leads in the `Closed` stage.
    pub deals_closed: u32,
    /// `deals_closed / total * 100`, or 0 without leads.
    pub conversion_rate: f64,
}

impl DashboardStats {
    /// Computes every stat from the working set.
    #[must_use]
    pub fn compute(leads: &[Lead], tasks: &[Task], today: NaiveDate) -> Self {
        let in_stage = |status| count(leads.iter().filter(|lead| lead.status() == status));
        let today_tasks = || tasks.iter().filter(move |task| task.is_on(today));
        let deals_closed = in_stage(PipelineStatus::Closed);

        Self {
            new_leads: in_stage(PipelineStatus::New),
            visits_today: count(today_tasks().filter(|task| task.task_type().is_visit())),
            follow_ups: count(today_tasks().filter(|task| !task.task_type().is_visit())),
            proposals_sent: in_stage(PipelineStatus::Proposal),
            deals_closed,
            conversion_rate: percentage(deals_closed, count(leads.iter())),
        }
    }

    /// Returns the value shown on the given card.
    #[must_use]
    pub fn value(&self, id: StatCardId) -> f64 {
        match id {
            StatCardId::NewLeads => f64::from(self.new_leads),
            StatCardId::VisitsToday => f64::from(self.visits_today),
            StatCardId::FollowUps => f64::from(self.follow_ups),
            StatCardId::ProposalsSent => f64::from(self.proposals_sent),
            StatCardId::DealsClosed => f64::from(self.deals_closed),
            StatCardId::ConversionRate => self.conversion_rate,
        }
    }
}

pub(super) fn count<I: Iterator>(items: I) -> u32 {
    u32::try_from(items.count()).unwrap_or(u32::MAX)
}

/// Returns `part / whole * 100`, or 0 when `whole` is 0.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "percentages are presentation values"
)]
pub fn percentage(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    f64::from(part) / f64::from(whole) * 100.0
}
