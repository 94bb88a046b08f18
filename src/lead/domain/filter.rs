//! Lead list filtering by status and last-contact date.

use super::{Lead, LeadDomainError, PipelineStatus};
use chrono::NaiveDate;

/// Filter applied to the lead list. An empty filter matches every lead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LeadFilter {
    status: Option<PipelineStatus>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl LeadFilter {
    /// Creates a filter matching every lead.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            status: None,
            start: None,
            end: None,
        }
    }

    /// Restricts matches to a single status.
    #[must_use]
    pub const fn with_status(mut self, status: PipelineStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts matches to leads contacted on or after `start`.
    #[must_use]
    pub const fn since(mut self, start: NaiveDate) -> Self {
        self.start = Some(start);
        self
    }

    /// Restricts matches to leads contacted on or before `end`.
    #[must_use]
    pub const fn until(mut self, end: NaiveDate) -> Self {
        self.end = Some(end);
        self
    }

    /// Restricts matches to an inclusive last-contact range.
    ///
    /// # Errors
    ///
    /// Returns [`LeadDomainError::InvertedDateRange`] when `end` precedes
    /// `start`.
    pub fn between(self, start: NaiveDate, end: NaiveDate) -> Result<Self, LeadDomainError> {
        if end < start {
            return Err(LeadDomainError::InvertedDateRange { start, end });
        }
        Ok(self.since(start).until(end))
    }

    /// Returns whether the lead passes every configured criterion.
    #[must_use]
    pub fn matches(&self, lead: &Lead) -> bool {
        let status_ok = self.status.is_none_or(|status| lead.status() == status);
        let start_ok = self.start.is_none_or(|start| lead.last_contact() >= start);
        let end_ok = self.end.is_none_or(|end| lead.last_contact() <= end);
        status_ok && start_ok && end_ok
    }

    /// Returns the matching leads in their original order.
    #[must_use]
    pub fn apply<'a>(&self, leads: &'a [Lead]) -> Vec<&'a Lead> {
        leads.iter().filter(|lead| self.matches(lead)).collect()
    }
}
