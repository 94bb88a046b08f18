//! Repository port for property persistence.

use crate::property::domain::{Property, PropertyId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for property repository operations.
pub type PropertyRepositoryResult<T> = Result<T, PropertyRepositoryError>;

/// Property persistence contract.
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// Stores a new property.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyRepositoryError::DuplicateProperty`] when the
    /// identifier already exists.
    async fn store(&self, property: &Property) -> PropertyRepositoryResult<()>;

    /// Replaces an existing property.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyRepositoryError::NotFound`] when the property does
    /// not exist.
    async fn update(&self, property: &Property) -> PropertyRepositoryResult<()>;

    /// Removes a property. Returns `false` when nothing was removed.
    async fn delete(&self, id: PropertyId) -> PropertyRepositoryResult<bool>;

    /// Finds a property by identifier.
    async fn find_by_id(&self, id: PropertyId) -> PropertyRepositoryResult<Option<Property>>;

    /// Returns every property, newest first.
    async fn list(&self) -> PropertyRepositoryResult<Vec<Property>>;
}

/// Errors returned by property repository implementations.
#[derive(Debug, Clone, Error)]
pub enum PropertyRepositoryError {
    /// A property with the same identifier already exists.
    #[error("duplicate property identifier: {0}")]
    DuplicateProperty(PropertyId),

    /// The property was not found.
    #[error("property not found: {0}")]
    NotFound(PropertyId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl PropertyRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
