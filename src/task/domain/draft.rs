//! Task drafts as captured by the scheduling form.

use super::{Task, TaskDomainError, TaskId, TaskType};
use crate::lead::domain::LeadId;
use chrono::{NaiveDate, NaiveTime};

/// Unvalidated task input. Date, time and lead may still be missing.
///
/// A draft with an `id` edits that task; without one it creates a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    /// Task being edited, if any.
    pub id: Option<TaskId>,
    /// Task type.
    pub task_type: TaskType,
    /// Scheduled date.
    pub date: Option<NaiveDate>,
    /// Scheduled time of day.
    pub time: Option<NaiveTime>,
    /// Lead the task is for.
    pub lead_id: Option<LeadId>,
    /// Free-text notes.
    pub notes: String,
}

impl TaskDraft {
    /// Creates an empty draft for a new task of the given type.
    #[must_use]
    pub const fn new(task_type: TaskType) -> Self {
        Self {
            id: None,
            task_type,
            date: None,
            time: None,
            lead_id: None,
            notes: String::new(),
        }
    }

    /// Creates a draft pre-filled from an existing task.
    #[must_use]
    pub fn editing(task: &Task) -> Self {
        Self {
            id: Some(task.id()),
            task_type: task.task_type(),
            date: Some(task.date()),
            time: Some(task.time()),
            lead_id: Some(task.lead_id()),
            notes: task.notes().unwrap_or_default().to_owned(),
        }
    }

    /// Sets the task type.
    #[must_use]
    pub const fn with_type(mut self, task_type: TaskType) -> Self {
        self.task_type = task_type;
        self
    }

    /// Sets the scheduled date.
    #[must_use]
    pub const fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Sets the scheduled time.
    #[must_use]
    pub const fn at(mut self, time: NaiveTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Links the draft to a lead.
    #[must_use]
    pub const fn for_lead(mut self, lead_id: LeadId) -> Self {
        self.lead_id = Some(lead_id);
        self
    }

    /// Sets the notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Checks that date, time and lead are present.
    ///
    /// # Errors
    ///
    /// Returns the first missing field as a [`TaskDomainError`], checked in
    /// date, time, lead order.
    pub fn validate(self) -> Result<ValidTaskDraft, TaskDomainError> {
        let date = self.date.ok_or(TaskDomainError::MissingDate)?;
        let time = self.time.ok_or(TaskDomainError::MissingTime)?;
        let lead_id = self.lead_id.ok_or(TaskDomainError::MissingLead)?;
        let trimmed = self.notes.trim();
        let notes = (!trimmed.is_empty()).then(|| trimmed.to_owned());
        Ok(ValidTaskDraft {
            id: self.id,
            task_type: self.task_type,
            date,
            time,
            lead_id,
            notes,
        })
    }
}

/// Task draft with every required field present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidTaskDraft {
    id: Option<TaskId>,
    task_type: TaskType,
    date: NaiveDate,
    time: NaiveTime,
    lead_id: LeadId,
    notes: Option<String>,
}

impl ValidTaskDraft {
    /// Returns the task being edited, if any.
    #[must_use]
    pub const fn id(&self) -> Option<TaskId> {
        self.id
    }

    /// Returns the task type.
    #[must_use]
    pub const fn task_type(&self) -> TaskType {
        self.task_type
    }

    /// Returns the scheduled date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the scheduled time.
    #[must_use]
    pub const fn time(&self) -> NaiveTime {
        self.time
    }

    /// Returns the lead the task is for.
    #[must_use]
    pub const fn lead_id(&self) -> LeadId {
        self.lead_id
    }

    /// Returns the trimmed notes, if any.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub(super) fn into_notes(self) -> Option<String> {
        self.notes
    }
}
