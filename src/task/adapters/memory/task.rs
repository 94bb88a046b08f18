//! In-memory repository for tasks.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::sync::{BroadcastChangeFeed, ChangeEvent, ChangeKind, Collection};
use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    tasks: Arc<RwLock<HashMap<TaskId, Task>>>,
    feed: Option<BroadcastChangeFeed>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes every successful mutation to the given feed.
    #[must_use]
    pub fn with_change_feed(mut self, feed: BroadcastChangeFeed) -> Self {
        self.feed = Some(feed);
        self
    }

    fn notify(&self, kind: ChangeKind) {
        if let Some(feed) = &self.feed {
            feed.publish(ChangeEvent::new(Collection::Tasks, kind));
        }
    }
}

fn lock_error(err: impl std::fmt::Display) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        {
            let mut tasks = self.tasks.write().map_err(lock_error)?;
            if tasks.contains_key(&task.id()) {
                return Err(TaskRepositoryError::DuplicateTask(task.id()));
            }
            tasks.insert(task.id(), task.clone());
        }
        self.notify(ChangeKind::Insert);
        Ok(())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        {
            let mut tasks = self.tasks.write().map_err(lock_error)?;
            let slot = tasks
                .get_mut(&task.id())
                .ok_or(TaskRepositoryError::NotFound(task.id()))?;
            *slot = task.clone();
        }
        self.notify(ChangeKind::Update);
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        let removed = self
            .tasks
            .write()
            .map_err(lock_error)?
            .remove(&id)
            .is_some();
        if removed {
            self.notify(ChangeKind::Delete);
        }
        Ok(removed)
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let tasks = self.tasks.read().map_err(lock_error)?;
        Ok(tasks.get(&id).cloned())
    }

    async fn list(&self) -> TaskRepositoryResult<Vec<Task>> {
        let tasks = self.tasks.read().map_err(lock_error)?;
        let mut listed: Vec<Task> = tasks.values().cloned().collect();
        listed.sort_by(|a, b| {
            a.schedule_key()
                .cmp(&b.schedule_key())
                .then_with(|| a.id().cmp(&b.id()))
        });
        Ok(listed)
    }
}
