//! Period reports over leads.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::stats::{count, percentage};
use crate::lead::domain::{Lead, PipelineStatus};

/// Reporting window, anchored on the current date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportWindow {
    /// The last seven days.
    Last7Days,
    /// The last thirty days.
    #[default]
    Last30Days,
    /// Since the first of the current month.
    ThisMonth,
}

impl ReportWindow {
    /// Returns the first date inside the window.
    #[must_use]
    pub fn start(self, today: NaiveDate) -> NaiveDate {
        let days_back = |days| today.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN);
        match self {
            Self::Last7Days => days_back(7),
            Self::Last30Days => days_back(30),
            Self::ThisMonth => today.with_day(1).unwrap_or(today),
        }
    }
}

/// Closed deals credited to one agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentPerformance {
    /// Agent name as recorded on the leads.
    pub agent: String,
    /// Closed leads attributed to the agent.
    pub deals_closed: u32,
}

/// Share of leads acquired through one source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceShare {
    /// Source name as recorded on the leads.
    pub source: String,
    /// Leads from the source.
    pub leads: u32,
    /// Share of all leads that have a source, in percent.
    pub percentage: f64,
}

/// Report for one window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Window the report covers.
    pub window: ReportWindow,
    /// Leads last contacted inside the window.
    pub total_leads: u32,
    /// Closed leads in the window.
    pub deals_closed: u32,
    /// Leads in the `Proposal` stage in the window.
    pub proposals_sent: u32,
    /// `deals_closed / total_leads * 100`, or 0.
    pub conversion_rate: f64,
    /// Agents ranked by closed deals, ties broken by name.
    pub agent_performance: Vec<AgentPerformance>,
    /// Sources ranked by lead count, ties broken by name.
    pub lead_sources: Vec<SourceShare>,
}

impl ReportSummary {
    /// Computes the report over leads last contacted on or after the
    /// window's start.
    #[must_use]
    pub fn compute(leads: &[Lead], window: ReportWindow, today: NaiveDate) -> Self {
        let start = window.start(today);
        let in_window: Vec<&Lead> = leads
            .iter()
            .filter(|lead| lead.last_contact() >= start)
            .collect();
        let in_stage =
            |status| count(in_window.iter().filter(|lead| lead.status() == status));

        let total_leads = count(in_window.iter());
        let deals_closed = in_stage(PipelineStatus::Closed);

        let agent_performance = ranked(
            in_window
                .iter()
                .filter(|lead| lead.status() == PipelineStatus::Closed)
                .filter_map(|lead| lead.agent()),
        )
        .into_iter()
        .map(|(agent, deals)| AgentPerformance {
            agent,
            deals_closed: deals,
        })
        .collect();

        let sources = ranked(in_window.iter().filter_map(|lead| lead.source()));
        let sourced_total = sources.iter().map(|(_, leads)| *leads).sum();
        let lead_sources = sources
            .into_iter()
            .map(|(source, leads)| SourceShare {
                source,
                leads,
                percentage: percentage(leads, sourced_total),
            })
            .collect();

        Self {
            window,
            total_leads,
            deals_closed,
            proposals_sent: in_stage(PipelineStatus::Proposal),
            conversion_rate: percentage(deals_closed, total_leads),
            agent_performance,
            lead_sources,
        }
    }
}

fn ranked<'a>(names: impl Iterator<Item = &'a str>) -> Vec<(String, u32)> {
    let mut tally: HashMap<&str, u32> = HashMap::new();
    for name in names {
        let slot = tally.entry(name).or_insert(0);
        *slot = slot.saturating_add(1);
    }
    let mut ranking: Vec<(String, u32)> = tally
        .into_iter()
        .map(|(name, hits)| (name.to_owned(), hits))
        .collect();
    ranking.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranking
}
