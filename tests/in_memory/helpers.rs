//! Shared wiring for in-memory integration tests.

use std::sync::Arc;

use crate::test_helpers::{FixedClock, date};
use realtyflow::lead::{
    adapters::memory::InMemoryLeadRepository,
    domain::{Lead, NewLead},
    services::LeadStore,
};
use realtyflow::lifecycle::{LifecycleCoordinator, VisitStatusPolicy};
use realtyflow::property::{
    adapters::memory::InMemoryPropertyRepository,
    domain::{Price, Property, PropertyCategory, PropertyDetails},
    services::PropertyCatalog,
};
use realtyflow::sync::{BroadcastChangeFeed, SnapshotSync};
use realtyflow::task::{adapters::memory::InMemoryTaskRepository, services::TaskStore};
use rstest::fixture;

/// Coordinator wired to in-memory repositories.
pub type MemoryCoordinator = LifecycleCoordinator<
    InMemoryPropertyRepository,
    InMemoryLeadRepository,
    InMemoryTaskRepository,
    FixedClock,
>;

/// Snapshot sync over in-memory repositories.
pub type MemorySync =
    SnapshotSync<InMemoryPropertyRepository, InMemoryLeadRepository, InMemoryTaskRepository>;

/// A complete in-memory CRM sharing one change feed.
pub struct Crm {
    pub feed: BroadcastChangeFeed,
    pub properties: Arc<InMemoryPropertyRepository>,
    pub leads: Arc<InMemoryLeadRepository>,
    pub tasks: Arc<InMemoryTaskRepository>,
    pub clock: Arc<FixedClock>,
    pub coordinator: MemoryCoordinator,
}

impl Crm {
    /// Builds an empty CRM whose clock reads `today`.
    pub fn on(today: chrono::NaiveDate, policy: VisitStatusPolicy) -> Self {
        let feed = BroadcastChangeFeed::default();
        let properties =
            Arc::new(InMemoryPropertyRepository::new().with_change_feed(feed.clone()));
        let leads = Arc::new(InMemoryLeadRepository::new().with_change_feed(feed.clone()));
        let tasks = Arc::new(InMemoryTaskRepository::new().with_change_feed(feed.clone()));
        let clock = Arc::new(FixedClock::on(today));
        let coordinator = LifecycleCoordinator::new(
            PropertyCatalog::new(Arc::clone(&properties), Arc::clone(&clock)),
            LeadStore::new(
                Arc::clone(&leads),
                Arc::clone(&properties),
                Arc::clone(&clock),
            ),
            TaskStore::new(Arc::clone(&tasks), Arc::clone(&clock)),
        )
        .with_visit_policy(policy);
        Self {
            feed,
            properties,
            leads,
            tasks,
            clock,
            coordinator,
        }
    }

    /// Returns a snapshot sync reading the same repositories.
    pub fn sync(&self) -> Arc<MemorySync> {
        Arc::new(SnapshotSync::new(
            Arc::clone(&self.properties),
            Arc::clone(&self.leads),
            Arc::clone(&self.tasks),
        ))
    }

    /// Lists a property through the catalog.
    pub async fn list_property(&self, title: &str, price: u64) -> Property {
        let details = PropertyDetails::new(
            title,
            Price::new(price).expect("valid price"),
            PropertyCategory::House,
        )
        .expect("valid details")
        .with_rooms(3, 2)
        .with_area(180);
        self.coordinator
            .properties()
            .add(details)
            .await
            .expect("list property")
    }

    /// Adds a lead through the lead store.
    pub async fn add_lead(&self, name: &str) -> Lead {
        self.coordinator
            .leads()
            .add(NewLead::new(name, format!("{}@example.com", name.to_lowercase())).expect("valid lead"))
            .await
            .expect("add lead")
    }
}

/// Provides a CRM dated 2026-04-15 with the default visit policy.
#[fixture]
pub fn crm() -> Crm {
    Crm::on(date(2026, 4, 15), VisitStatusPolicy::default())
}
