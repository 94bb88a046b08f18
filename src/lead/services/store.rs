//! Service layer for lead creation, editing and removal.

use crate::lead::{
    domain::{Lead, LeadId, NewLead, PipelineStatus},
    ports::{LeadRepository, LeadRepositoryError},
};
use crate::property::{
    ports::{PropertyRepository, PropertyRepositoryError},
    services::{PropertyAssignment, RandomAssignment},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for lead operations.
#[derive(Debug, Error)]
pub enum LeadStoreError {
    /// Lead repository operation failed.
    #[error(transparent)]
    Repository(#[from] LeadRepositoryError),
    /// The catalog could not be read while assigning a property.
    #[error(transparent)]
    Catalog(#[from] PropertyRepositoryError),
}

/// Result type for lead store operations.
pub type LeadStoreResult<T> = Result<T, LeadStoreError>;

/// Lead store orchestration service.
#[derive(Clone)]
pub struct LeadStore<L, P, C>
where
    L: LeadRepository,
    P: PropertyRepository,
    C: Clock + Send + Sync,
{
    leads: Arc<L>,
    properties: Arc<P>,
    clock: Arc<C>,
    assignment: Arc<dyn PropertyAssignment>,
}

impl<L, P, C> LeadStore<L, P, C>
where
    L: LeadRepository,
    P: PropertyRepository,
    C: Clock + Send + Sync,
{
    /// Creates a lead store using [`RandomAssignment`] for new leads.
    #[must_use]
    pub fn new(leads: Arc<L>, properties: Arc<P>, clock: Arc<C>) -> Self {
        Self {
            leads,
            properties,
            clock,
            assignment: Arc::new(RandomAssignment),
        }
    }

    /// Replaces the default property assignment policy.
    #[must_use]
    pub fn with_assignment(mut self, assignment: Arc<dyn PropertyAssignment>) -> Self {
        self.assignment = assignment;
        self
    }

    /// Returns the clock used to stamp lead changes.
    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Adds a lead in the `New` stage, contacted today.
    ///
    /// Without an explicitly designated property the assignment policy
    /// picks one from the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`LeadStoreError`] when the catalog cannot be read or the
    /// repository rejects the lead. Nothing is stored in that case.
    #[tracing::instrument(skip(self, request), err)]
    pub async fn add(&self, request: NewLead) -> LeadStoreResult<Lead> {
        let property = match request.property_of_interest() {
            Some(designated) => Some(designated),
            None => {
                let catalog = self.properties.list().await?;
                self.assignment.assign(&catalog)
            }
        };
        let lead = Lead::create(request, property, &*self.clock);
        self.leads.store(&lead).await?;
        tracing::debug!(lead_id = %lead.id(), "lead added");
        Ok(lead)
    }

    /// Replaces the stored lead with the same identifier.
    ///
    /// Returns `Ok(None)` when the lead is unknown; nothing is written.
    ///
    /// # Errors
    ///
    /// Returns [`LeadStoreError::Repository`] when persistence fails. The
    /// caller's copy is never modified.
    #[tracing::instrument(skip(self, lead), fields(lead_id = %lead.id()), err)]
    pub async fn update(&self, lead: &Lead) -> LeadStoreResult<Option<Lead>> {
        let mut updated = lead.clone();
        updated.touch(&*self.clock);
        match self.leads.update(&updated).await {
            Ok(()) => Ok(Some(updated)),
            Err(LeadRepositoryError::NotFound(_)) => {
                tracing::debug!("ignoring update of unknown lead");
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Removes a lead. Tasks pointing at it are left in place.
    ///
    /// # Errors
    ///
    /// Returns [`LeadStoreError::Repository`] when persistence fails.
    #[tracing::instrument(skip(self), err)]
    pub async fn delete(&self, id: LeadId) -> LeadStoreResult<bool> {
        Ok(self.leads.delete(id).await?)
    }

    /// Moves a lead to `status` and records contact made today.
    ///
    /// Returns `Ok(None)` when the lead is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`LeadStoreError::Repository`] when persistence fails.
    #[tracing::instrument(skip(self), err)]
    pub async fn set_status(
        &self,
        id: LeadId,
        status: PipelineStatus,
    ) -> LeadStoreResult<Option<Lead>> {
        let Some(mut lead) = self.leads.find_by_id(id).await? else {
            tracing::debug!("ignoring status change of unknown lead");
            return Ok(None);
        };
        lead.advance_to(status, &*self.clock);
        self.update(&lead).await
    }

    /// Finds a lead by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`LeadStoreError::Repository`] when lookup fails.
    pub async fn find(&self, id: LeadId) -> LeadStoreResult<Option<Lead>> {
        Ok(self.leads.find_by_id(id).await?)
    }

    /// Returns every lead, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`LeadStoreError::Repository`] when lookup fails.
    pub async fn list(&self) -> LeadStoreResult<Vec<Lead>> {
        Ok(self.leads.list().await?)
    }
}
