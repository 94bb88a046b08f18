//! Error types for task validation and parsing.

use thiserror::Error;

/// Errors returned while validating task drafts.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The draft has no date.
    #[error("task date is required")]
    MissingDate,

    /// The draft has no time of day.
    #[error("task time is required")]
    MissingTime,

    /// The draft is not linked to a lead.
    #[error("task must reference a lead")]
    MissingLead,
}

/// Error returned while parsing task types from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task type: {0}")]
pub struct ParseTaskTypeError(pub String);
