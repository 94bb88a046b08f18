//! Port contracts for lead management.

pub mod repository;

pub use repository::{LeadRepository, LeadRepositoryError, LeadRepositoryResult};
