//! Status rule applied when a visit is scheduled.

use crate::lead::domain::PipelineStatus;
use serde::{Deserialize, Serialize};

/// How scheduling a visit changes the lead's pipeline status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitStatusPolicy {
    /// Always move to [`PipelineStatus::VisitScheduled`], even backwards
    /// from a proposal or a closed deal.
    #[default]
    AlwaysSchedule,
    /// As `AlwaysSchedule`, except closed deals stay closed.
    KeepClosed,
    /// Only move forward in pipeline order.
    AdvanceOnly,
}

impl VisitStatusPolicy {
    /// Returns the status a lead in `current` takes after a visit is saved.
    #[must_use]
    pub fn apply(self, current: PipelineStatus) -> PipelineStatus {
        let scheduled = PipelineStatus::VisitScheduled;
        match self {
            Self::AlwaysSchedule => scheduled,
            Self::KeepClosed if current == PipelineStatus::Closed => current,
            Self::KeepClosed => scheduled,
            Self::AdvanceOnly => current.max(scheduled),
        }
    }
}
