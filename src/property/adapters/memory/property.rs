//! In-memory repository for the property catalog.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::property::{
    domain::{Property, PropertyId},
    ports::{PropertyRepository, PropertyRepositoryError, PropertyRepositoryResult},
};
use crate::sync::{BroadcastChangeFeed, ChangeEvent, ChangeKind, Collection};

/// Thread-safe in-memory property repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPropertyRepository {
    properties: Arc<RwLock<HashMap<PropertyId, Property>>>,
    feed: Option<BroadcastChangeFeed>,
}

impl InMemoryPropertyRepository {
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
            feed.publish(ChangeEvent::new(Collection::Properties, kind));
        }
    }
}

fn lock_error(err: impl std::fmt::Display) -> PropertyRepositoryError {
    PropertyRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl PropertyRepository for InMemoryPropertyRepository {
    async fn store(&self, property: &Property) -> PropertyRepositoryResult<()> {
        {
            let mut properties = self.properties.write().map_err(lock_error)?;
            if properties.contains_key(&property.id()) {
                return Err(PropertyRepositoryError::DuplicateProperty(property.id()));
            }
            properties.insert(property.id(), property.clone());
        }
        self.notify(ChangeKind::Insert);
        Ok(())
    }

    async fn update(&self, property: &Property) -> PropertyRepositoryResult<()> {
        {
            let mut properties = self.properties.write().map_err(lock_error)?;
            let slot = properties
                .get_mut(&property.id())
                .ok_or(PropertyRepositoryError::NotFound(property.id()))?;
            *slot = property.clone();
        }
        self.notify(ChangeKind::Update);
        Ok(())
    }

    async fn delete(&self, id: PropertyId) -> PropertyRepositoryResult<bool> {
        let removed = self
            .properties
            .write()
            .map_err(lock_error)?
            .remove(&id)
            .is_some();
        if removed {
            self.notify(ChangeKind::Delete);
        }
        Ok(removed)
    }

    async fn find_by_id(&self, id: PropertyId) -> PropertyRepositoryResult<Option<Property>> {
        let properties = self.properties.read().map_err(lock_error)?;
        Ok(properties.get(&id).cloned())
    }

    async fn list(&self) -> PropertyRepositoryResult<Vec<Property>> {
        let properties = self.properties.read().map_err(lock_error)?;
        let mut listed: Vec<Property> = properties.values().cloned().collect();
        listed.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| a.id().cmp(&b.id()))
        });
        Ok(listed)
    }
}
