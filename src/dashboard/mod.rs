//! Derived dashboard aggregates.
//!
//! Everything here is a pure function of a lead and task slice plus the
//! current date. Nothing is cached; callers recompute from the latest
//! snapshot.

mod agenda;
mod attention;
mod cards;
mod names;
mod pipeline;
mod reports;
mod stats;
mod trend;

pub use agenda::{month_calendar, tasks_on, todays_agenda};
pub use attention::{Attention, lead_attention};
pub use cards::{StatCardView, stat_cards};
pub use names::{lead_display_name, property_display_name};
pub use pipeline::{PipelineColumn, pipeline_columns};
pub use reports::{AgentPerformance, ReportSummary, ReportWindow, SourceShare};
pub use stats::{DashboardStats, StatCardId, percentage};
pub use trend::{PriorPeriod, Trend, TrendDirection};

#[cfg(test)]
mod tests;
