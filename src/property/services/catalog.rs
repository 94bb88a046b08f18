//! Service layer for the property catalog.

use crate::property::{
    domain::{MapMarker, Property, PropertyDetails, PropertyId, map_markers},
    ports::{PropertyRepository, PropertyRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for property catalog operations.
#[derive(Debug, Error)]
pub enum PropertyCatalogError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] PropertyRepositoryError),
}

/// Result type for property catalog operations.
pub type PropertyCatalogResult<T> = Result<T, PropertyCatalogError>;

/// Property catalog orchestration service.
#[derive(Clone)]
pub struct PropertyCatalog<R, C>
where
    R: PropertyRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> PropertyCatalog<R, C>
where
    R: PropertyRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new catalog service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Adds a listing to the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyCatalogError::Repository`] when persistence fails.
    #[tracing::instrument(skip(self, details), fields(title = details.title()), err)]
    pub async fn add(&self, details: PropertyDetails) -> PropertyCatalogResult<Property> {
        let property = Property::new(details, &*self.clock);
        self.repository.store(&property).await?;
        Ok(property)
    }

    /// Replaces the details of an existing listing.
    ///
    /// Returns `Ok(None)` without touching storage when the listing is
    /// unknown.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyCatalogError::Repository`] when persistence fails.
    #[tracing::instrument(skip(self, details), err)]
    pub async fn update(
        &self,
        id: PropertyId,
        details: PropertyDetails,
    ) -> PropertyCatalogResult<Option<Property>> {
        let Some(mut property) = self.repository.find_by_id(id).await? else {
            tracing::debug!("ignoring update of unknown property");
            return Ok(None);
        };
        property.revise(details, &*self.clock);
        match self.repository.update(&property).await {
            Ok(()) => Ok(Some(property)),
            Err(PropertyRepositoryError::NotFound(_)) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Removes a listing. Leads pointing at it are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyCatalogError::Repository`] when persistence fails.
    #[tracing::instrument(skip(self), err)]
    pub async fn delete(&self, id: PropertyId) -> PropertyCatalogResult<bool> {
        Ok(self.repository.delete(id).await?)
    }

    /// Finds a listing by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyCatalogError::Repository`] when lookup fails.
    pub async fn find(&self, id: PropertyId) -> PropertyCatalogResult<Option<Property>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Returns every listing, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyCatalogError::Repository`] when lookup fails.
    pub async fn list(&self) -> PropertyCatalogResult<Vec<Property>> {
        Ok(self.repository.list().await?)
    }

    /// Returns map markers for every listing with coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyCatalogError::Repository`] when lookup fails.
    pub async fn markers(&self) -> PropertyCatalogResult<Vec<MapMarker>> {
        let properties = self.repository.list().await?;
        Ok(map_markers(&properties))
    }
}
