//! Service layer for creating, editing and removing tasks.

use crate::task::{
    domain::{Task, TaskDomainError, TaskDraft, TaskId, ValidTaskDraft},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskStoreError {
    /// Draft validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Task store orchestration service.
#[derive(Clone)]
pub struct TaskStore<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskStore<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task store.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Validates and saves a draft.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Domain`] when date, time or lead is
    /// missing; the repository is not touched in that case. Otherwise see
    /// [`Self::save_valid`].
    pub async fn save(&self, draft: TaskDraft) -> TaskStoreResult<Task> {
        self.save_valid(draft.validate()?).await
    }

    /// Saves an already validated draft.
    ///
    /// Without an identifier a new task is created. With one, the stored
    /// task is replaced in place, keeping its identifier and creation time
    /// and recomputing the title from the type.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] (wrapped) when editing a
    /// task that no longer exists, or any other repository failure.
    #[tracing::instrument(skip(self, draft), fields(task_id = ?draft.id()), err)]
    pub async fn save_valid(&self, draft: ValidTaskDraft) -> TaskStoreResult<Task> {
        let Some(id) = draft.id() else {
            let task = Task::create(draft, &*self.clock);
            self.repository.store(&task).await?;
            tracing::debug!(task_id = %task.id(), "task created");
            return Ok(task);
        };

        let existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskRepositoryError::NotFound(id))?;
        let task = existing.revised(draft, &*self.clock);
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Removes a task. The referenced lead is never touched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Repository`] when persistence fails.
    #[tracing::instrument(skip(self), err)]
    pub async fn delete(&self, id: TaskId) -> TaskStoreResult<bool> {
        Ok(self.repository.delete(id).await?)
    }

    /// Finds a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Repository`] when lookup fails.
    pub async fn find(&self, id: TaskId) -> TaskStoreResult<Option<Task>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Returns every task in calendar order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Repository`] when lookup fails.
    pub async fn list(&self) -> TaskStoreResult<Vec<Task>> {
        Ok(self.repository.list().await?)
    }
}
