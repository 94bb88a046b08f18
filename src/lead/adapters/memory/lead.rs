//! In-memory repository for leads.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::lead::{
    domain::{Lead, LeadId},
    ports::{LeadRepository, LeadRepositoryError, LeadRepositoryResult},
};
use crate::sync::{BroadcastChangeFeed, ChangeEvent, ChangeKind, Collection};

/// Thread-safe in-memory lead repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLeadRepository {
    leads: Arc<RwLock<HashMap<LeadId, Lead>>>,
    feed: Option<BroadcastChangeFeed>,
}

impl InMemoryLeadRepository {
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
            feed.publish(ChangeEvent::new(Collection::Leads, kind));
        }
    }
}

fn lock_error(err: impl std::fmt::Display) -> LeadRepositoryError {
    LeadRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl LeadRepository for InMemoryLeadRepository {
    async fn store(&self, lead: &Lead) -> LeadRepositoryResult<()> {
        {
            let mut leads = self.leads.write().map_err(lock_error)?;
            if leads.contains_key(&lead.id()) {
                return Err(LeadRepositoryError::DuplicateLead(lead.id()));
            }
            leads.insert(lead.id(), lead.clone());
        }
        self.notify(ChangeKind::Insert);
        Ok(())
    }

    async fn update(&self, lead: &Lead) -> LeadRepositoryResult<()> {
        {
            let mut leads = self.leads.write().map_err(lock_error)?;
            let slot = leads
                .get_mut(&lead.id())
                .ok_or(LeadRepositoryError::NotFound(lead.id()))?;
            *slot = lead.clone();
        }
        self.notify(ChangeKind::Update);
        Ok(())
    }

    async fn delete(&self, id: LeadId) -> LeadRepositoryResult<bool> {
        let removed = self
            .leads
            .write()
            .map_err(lock_error)?
            .remove(&id)
            .is_some();
        if removed {
            self.notify(ChangeKind::Delete);
        }
        Ok(removed)
    }

    async fn find_by_id(&self, id: LeadId) -> LeadRepositoryResult<Option<Lead>> {
        let leads = self.leads.read().map_err(lock_error)?;
        Ok(leads.get(&id).cloned())
    }

    async fn list(&self) -> LeadRepositoryResult<Vec<Lead>> {
        let leads = self.leads.read().map_err(lock_error)?;
        let mut listed: Vec<Lead> = leads.values().cloned().collect();
        listed.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| a.id().cmp(&b.id()))
        });
        Ok(listed)
    }
}
