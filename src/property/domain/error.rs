//! Error types for property validation and parsing.

use thiserror::Error;

/// Errors returned while constructing property values.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PropertyDomainError {
    /// The property title is empty after trimming.
    #[error("property title must not be empty")]
    EmptyTitle,

    /// The asking price is zero.
    #[error("property price must be positive")]
    NonPositivePrice,

    /// The coordinates are out of range or not finite.
    #[error("invalid coordinates ({latitude}, {longitude})")]
    InvalidCoordinates {
        /// Rejected latitude.
        latitude: f64,
        /// Rejected longitude.
        longitude: f64,
    },
}

/// Error returned while parsing property categories from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown property category: {0}")]
pub struct ParsePropertyCategoryError(pub String);
