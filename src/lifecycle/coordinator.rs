//! Coordinates task saves with their effect on the referenced lead.

use super::{DeletionTarget, LifecycleError, LifecycleResult, PendingDeletion, VisitStatusPolicy};
use crate::lead::{
    domain::{Lead, NewLead},
    ports::{LeadRepository, LeadRepositoryError},
    services::{LeadStore, LeadStoreError},
};
use crate::property::{ports::PropertyRepository, services::PropertyCatalog};
use crate::task::{
    domain::{Task, TaskDraft},
    ports::TaskRepository,
    services::TaskStore,
};
use mockable::Clock;

/// Applies the cross-entity rules of scheduling and deletion.
#[derive(Clone)]
pub struct LifecycleCoordinator<P, L, T, C>
where
    P: PropertyRepository,
    L: LeadRepository,
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    properties: PropertyCatalog<P, C>,
    leads: LeadStore<L, P, C>,
    tasks: TaskStore<T, C>,
    visit_policy: VisitStatusPolicy,
}

impl<P, L, T, C> LifecycleCoordinator<P, L, T, C>
where
    P: PropertyRepository,
    L: LeadRepository,
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a coordinator using the default visit status policy.
    #[must_use]
    pub fn new(
        properties: PropertyCatalog<P, C>,
        leads: LeadStore<L, P, C>,
        tasks: TaskStore<T, C>,
    ) -> Self {
        Self {
            properties,
            leads,
            tasks,
            visit_policy: VisitStatusPolicy::default(),
        }
    }

    /// Replaces the visit status policy.
    #[must_use]
    pub const fn with_visit_policy(mut self, visit_policy: VisitStatusPolicy) -> Self {
        self.visit_policy = visit_policy;
        self
    }

    /// Returns the active visit status policy.
    #[must_use]
    pub const fn visit_policy(&self) -> VisitStatusPolicy {
        self.visit_policy
    }

    /// Returns the property catalog.
    #[must_use]
    pub const fn properties(&self) -> &PropertyCatalog<P, C> {
        &self.properties
    }

    /// Returns the lead store.
    #[must_use]
    pub const fn leads(&self) -> &LeadStore<L, P, C> {
        &self.leads
    }

    /// Returns the task store.
    #[must_use]
    pub const fn tasks(&self) -> &TaskStore<T, C> {
        &self.tasks
    }

    /// Saves a task and records its effect on the lead.
    ///
    /// The lead is resolved before anything is written. After the task is
    /// persisted the lead's last contact becomes today; a visit also moves
    /// the lead's status according to the visit policy.
    ///
    /// # Errors
    ///
    /// - [`LifecycleError::Validation`] when the draft is incomplete.
    /// - [`LifecycleError::UnknownLead`] when the lead does not exist.
    /// - [`LifecycleError::Tasks`] when the task cannot be persisted.
    /// - [`LifecycleError::PartialApply`] when the task was saved but the
    ///   lead update failed. The task is not rolled back.
    #[tracing::instrument(skip(self, draft), err)]
    pub async fn save_task(&self, draft: TaskDraft) -> LifecycleResult<Task> {
        let valid = draft.validate()?;
        let lead_id = valid.lead_id();
        let mut lead = self
            .leads
            .find(lead_id)
            .await?
            .ok_or(LifecycleError::UnknownLead(lead_id))?;

        let task = self.tasks.save_valid(valid).await?;

        let clock = self.leads.clock();
        if task.task_type().is_visit() {
            let status = self.visit_policy.apply(lead.status());
            lead.advance_to(status, clock);
        } else {
            lead.record_contact(clock);
        }

        match self.leads.update(&lead).await {
            Ok(Some(_)) => Ok(task),
            Ok(None) => {
                tracing::warn!(task_id = %task.id(), %lead_id, "lead vanished before update");
                Err(LifecycleError::PartialApply {
                    task_id: task.id(),
                    source: LeadStoreError::Repository(LeadRepositoryError::NotFound(lead_id)),
                })
            }
            Err(source) => {
                tracing::warn!(
                    task_id = %task.id(),
                    %lead_id,
                    error = %source,
                    "lead update failed after task save"
                );
                Err(LifecycleError::PartialApply {
                    task_id: task.id(),
                    source,
                })
            }
        }
    }

    /// Adds the sample lead delivered when the ad integration is connected.
    ///
    /// The lead starts in the `New` stage, attributed to the integration
    /// and not yet assigned to an agent. Its property of interest comes
    /// from the lead store's assignment policy.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::Leads`] when the catalog cannot be read or
    /// the lead cannot be stored.
    #[tracing::instrument(skip(self), err)]
    pub async fn import_integration_lead(&self) -> LifecycleResult<Lead> {
        let received_at = self.leads.clock().utc();
        let lead = self
            .leads
            .add(NewLead::integration_sample(received_at))
            .await?;
        tracing::info!(lead_id = %lead.id(), "integration lead imported");
        Ok(lead)
    }

    /// Carries out a confirmed deletion.
    ///
    /// Returns `false` when the record was already gone. Related records
    /// are never removed.
    ///
    /// # Errors
    ///
    /// Returns the owning store's error when persistence fails.
    #[tracing::instrument(skip(self, pending), fields(target = ?pending.target()), err)]
    pub async fn confirm_deletion(&self, pending: PendingDeletion) -> LifecycleResult<bool> {
        let removed = match pending.target() {
            DeletionTarget::Lead(id) => self.leads.delete(id).await?,
            DeletionTarget::Task(id) => self.tasks.delete(id).await?,
            DeletionTarget::Property(id) => self.properties.delete(id).await?,
        };
        tracing::debug!(removed, name = pending.display_name(), "deletion confirmed");
        Ok(removed)
    }
}
