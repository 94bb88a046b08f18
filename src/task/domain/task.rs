//! Scheduled task aggregate and task type.

use super::{ParseTaskTypeError, TaskId, ValidTaskDraft};
use crate::labels::task_type_label;
use crate::lead::domain::LeadId;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Kind of scheduled activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    /// Property visit with the lead.
    Visit,
    /// Phone call to the lead.
    Call,
    /// Contract signing meeting.
    ContractSigning,
    /// Payment follow-up.
    PaymentFollowUp,
}

impl TaskType {
    /// Every task type in form order.
    pub const ALL: [Self; 4] = [
        Self::Visit,
        Self::Call,
        Self::ContractSigning,
        Self::PaymentFollowUp,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Visit => "visit",
            Self::Call => "call",
            Self::ContractSigning => "contract_signing",
            Self::PaymentFollowUp => "payment_follow_up",
        }
    }

    /// Returns the title every task of this type carries.
    #[must_use]
    pub const fn title(self) -> &'static str {
        task_type_label(self)
    }

    /// Returns `true` for property visits.
    #[must_use]
    pub const fn is_visit(self) -> bool {
        matches!(self, Self::Visit)
    }
}

impl TryFrom<&str> for TaskType {
    type Error = ParseTaskTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "visit" => Ok(Self::Visit),
            "call" => Ok(Self::Call),
            "contract_signing" => Ok(Self::ContractSigning),
            "payment_follow_up" => Ok(Self::PaymentFollowUp),
            _ => Err(ParseTaskTypeError(value.to_owned())),
        }
    }
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone)]
pub struct PersistedTaskData {
    /// Task identifier.
    pub id: TaskId,
    /// Task type.
    pub task_type: TaskType,
    /// Scheduled date.
    pub date: NaiveDate,
    /// Scheduled time of day.
    pub time: NaiveTime,
    /// Referenced lead, which may no longer exist.
    pub lead_id: LeadId,
    /// Free-text notes.
    pub notes: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// A dated, timed agent activity against one lead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    task_type: TaskType,
    date: NaiveDate,
    time: NaiveTime,
    lead_id: LeadId,
    notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a task from a validated draft with a fresh identifier.
    ///
    /// Any identifier carried by the draft is ignored.
    #[must_use]
    pub fn create(draft: ValidTaskDraft, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            task_type: draft.task_type(),
            date: draft.date(),
            time: draft.time(),
            lead_id: draft.lead_id(),
            notes: draft.into_notes(),
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            task_type: data.task_type,
            date: data.date,
            time: data.time,
            lead_id: data.lead_id,
            notes: data.notes,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns a copy carrying the draft's fields, keeping identity and
    /// creation time.
    #[must_use]
    pub fn revised(&self, draft: ValidTaskDraft, clock: &impl Clock) -> Self {
        Self {
            id: self.id,
            task_type: draft.task_type(),
            date: draft.date(),
            time: draft.time(),
            lead_id: draft.lead_id(),
            notes: draft.into_notes(),
            created_at: self.created_at,
            updated_at: clock.utc(),
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task type.
    #[must_use]
    pub const fn task_type(&self) -> TaskType {
        self.task_type
    }

    /// Returns the title derived from the task type.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.task_type.title()
    }

    /// Returns the scheduled date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the scheduled time of day.
    #[must_use]
    pub const fn time(&self) -> NaiveTime {
        self.time
    }

    /// Returns the referenced lead.
    #[must_use]
    pub const fn lead_id(&self) -> LeadId {
        self.lead_id
    }

    /// Returns the notes, if any.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns `true` when the task is scheduled on `day`.
    #[must_use]
    pub fn is_on(&self, day: NaiveDate) -> bool {
        self.date == day
    }

    /// Sort key placing tasks in calendar order.
    #[must_use]
    pub const fn schedule_key(&self) -> (NaiveDate, NaiveTime) {
        (self.date, self.time)
    }
}
