//! Two-step deletion: request, then confirm.

use crate::lead::domain::{Lead, LeadId};
use crate::property::domain::{Property, PropertyId};
use crate::task::domain::{Task, TaskId};

/// Record a deletion is aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeletionTarget {
    /// A lead. Its tasks are left in place.
    Lead(LeadId),
    /// A scheduled task.
    Task(TaskId),
    /// A catalog property. Leads pointing at it keep the dangling reference.
    Property(PropertyId),
}

/// A deletion awaiting user confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDeletion {
    target: DeletionTarget,
    display_name: String,
}

impl PendingDeletion {
    /// Creates a pending deletion with the name shown in the confirmation
    /// prompt.
    #[must_use]
    pub fn new(target: DeletionTarget, display_name: impl Into<String>) -> Self {
        Self {
            target,
            display_name: display_name.into(),
        }
    }

    /// Requests deletion of a lead, labelled with its name.
    #[must_use]
    pub fn lead(lead: &Lead) -> Self {
        Self::new(DeletionTarget::Lead(lead.id()), lead.name())
    }

    /// Requests deletion of a task, labelled with its title.
    #[must_use]
    pub fn task(task: &Task) -> Self {
        Self::new(DeletionTarget::Task(task.id()), task.title())
    }

    /// Requests deletion of a property, labelled with its title.
    #[must_use]
    pub fn property(property: &Property) -> Self {
        Self::new(DeletionTarget::Property(property.id()), property.title())
    }

    /// Returns the targeted record.
    #[must_use]
    pub const fn target(&self) -> DeletionTarget {
        self.target
    }

    /// Returns the name shown in the confirmation prompt.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}
