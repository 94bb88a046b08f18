//! Error types for lead validation and parsing.

use thiserror::Error;

/// Errors returned while constructing lead values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LeadDomainError {
    /// The lead name is empty after trimming.
    #[error("lead name must not be empty")]
    EmptyName,

    /// The lead email is empty after trimming.
    #[error("lead email must not be empty")]
    EmptyEmail,

    /// The date range filter ends before it starts.
    #[error("date range ends ({end}) before it starts ({start})")]
    InvertedDateRange {
        /// Range start.
        start: chrono::NaiveDate,
        /// Range end.
        end: chrono::NaiveDate,
    },
}

/// Error returned while parsing pipeline statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown pipeline status: {0}")]
pub struct ParsePipelineStatusError(pub String);
