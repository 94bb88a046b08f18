//! Repository port for lead persistence.

use crate::lead::domain::{Lead, LeadId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for lead repository operations.
pub type LeadRepositoryResult<T> = Result<T, LeadRepositoryError>;

/// Lead persistence contract.
#[async_trait]
pub trait LeadRepository: Send + Sync {
    /// Stores a new lead.
    ///
    /// # Errors
    ///
    /// Returns [`LeadRepositoryError::DuplicateLead`] when the identifier
    /// already exists.
    async fn store(&self, lead: &Lead) -> LeadRepositoryResult<()>;

    /// Replaces an existing lead.
    ///
    /// # Errors
    ///
    /// Returns [`LeadRepositoryError::NotFound`] when the lead does not
    /// exist.
    async fn update(&self, lead: &Lead) -> LeadRepositoryResult<()>;

    /// Removes a lead. Returns `false` when nothing was removed.
    ///
    /// Tasks referencing the lead are not touched.
    async fn delete(&self, id: LeadId) -> LeadRepositoryResult<bool>;

    /// Finds a lead by identifier.
    async fn find_by_id(&self, id: LeadId) -> LeadRepositoryResult<Option<Lead>>;

    /// Returns every lead, newest first.
    async fn list(&self) -> LeadRepositoryResult<Vec<Lead>>;
}

/// Errors returned by lead repository implementations.
#[derive(Debug, Clone, Error)]
pub enum LeadRepositoryError {
    /// A lead with the same identifier already exists.
    #[error("duplicate lead identifier: {0}")]
    DuplicateLead(LeadId),

    /// The lead was not found.
    #[error("lead not found: {0}")]
    NotFound(LeadId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl LeadRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
