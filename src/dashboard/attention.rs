//! Per-lead attention flags shown on lead cards.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::lead::domain::Lead;
use crate::task::domain::Task;

/// Why a lead needs the agent's attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attention {
    /// A task for the lead is dated before today.
    OverdueTask,
    /// The lead has not been contacted within the follow-up window.
    NeedsFollowUp,
}

impl Attention {
    /// Returns the pt-BR tooltip.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::OverdueTask => "Tarefa Atrasada!",
            Self::NeedsFollowUp => "Necessita Follow-up!",
        }
    }
}

/// Returns the attention flag for a lead, if any.
///
/// Overdue tasks take precedence over stale contact.
#[must_use]
pub fn lead_attention(
    lead: &Lead,
    tasks: &[Task],
    today: NaiveDate,
    follow_up_after_days: u32,
) -> Option<Attention> {
    let overdue = tasks
        .iter()
        .any(|task| task.lead_id() == lead.id() && task.date() < today);
    if overdue {
        return Some(Attention::OverdueTask);
    }
    let threshold = today
        .checked_sub_days(Days::new(u64::from(follow_up_after_days)))
        .unwrap_or(NaiveDate::MIN);
    (lead.last_contact() < threshold).then_some(Attention::NeedsFollowUp)
}
