//! Kanban pipeline columns.

use crate::lead::domain::{Lead, PipelineStatus};

/// One pipeline stage and the leads currently in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineColumn<'a> {
    /// Stage shown by this column.
    pub status: PipelineStatus,
    /// Leads in the stage, in input order.
    pub leads: Vec<&'a Lead>,
}

impl PipelineColumn<'_> {
    /// Returns the column heading.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.status.label()
    }

    /// Returns the number of leads in the column.
    #[must_use]
    pub fn count(&self) -> usize {
        self.leads.len()
    }
}

/// Partitions leads into the five columns in pipeline order.
#[must_use]
pub fn pipeline_columns(leads: &[Lead]) -> Vec<PipelineColumn<'_>> {
    PipelineStatus::ALL
        .into_iter()
        .map(|status| PipelineColumn {
            status,
            leads: leads.iter().filter(|lead| lead.status() == status).collect(),
        })
        .collect()
}
