//! Port contracts for the property catalog.

pub mod repository;

pub use repository::{PropertyRepository, PropertyRepositoryError, PropertyRepositoryResult};
