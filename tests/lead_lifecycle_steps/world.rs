//! Shared world state for lead lifecycle BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use crate::test_helpers::{FixedClock, date};
use realtyflow::lead::{
    adapters::memory::InMemoryLeadRepository, domain::Lead, services::LeadStore,
};
use realtyflow::lifecycle::{LifecycleCoordinator, LifecycleError};
use realtyflow::property::{
    adapters::memory::InMemoryPropertyRepository, domain::Property, services::PropertyCatalog,
};
use realtyflow::task::{
    adapters::memory::InMemoryTaskRepository, domain::Task, services::TaskStore,
};
use rstest::fixture;

/// Coordinator type used by the BDD world.
pub type TestCoordinator = LifecycleCoordinator<
    InMemoryPropertyRepository,
    InMemoryLeadRepository,
    InMemoryTaskRepository,
    FixedClock,
>;

/// Scenario world for lead lifecycle behaviour tests.
pub struct LeadLifecycleWorld {
    pub coordinator: TestCoordinator,
    pub clock: Arc<FixedClock>,
    pub leads: HashMap<String, Lead>,
    pub properties: HashMap<String, Property>,
    pub last_save: Option<Result<Task, LifecycleError>>,
    pub pipeline: Vec<(String, usize)>,
}

impl LeadLifecycleWorld {
    /// Creates a world whose clock reads 2026-04-15.
    #[must_use]
    pub fn new() -> Self {
        let properties = Arc::new(InMemoryPropertyRepository::new());
        let clock = Arc::new(FixedClock::on(date(2026, 4, 15)));
        let coordinator = LifecycleCoordinator::new(
            PropertyCatalog::new(Arc::clone(&properties), Arc::clone(&clock)),
            LeadStore::new(
                Arc::new(InMemoryLeadRepository::new()),
                properties,
                Arc::clone(&clock),
            ),
            TaskStore::new(Arc::new(InMemoryTaskRepository::new()), Arc::clone(&clock)),
        );

        Self {
            coordinator,
            clock,
            leads: HashMap::new(),
            properties: HashMap::new(),
            last_save: None,
            pipeline: Vec::new(),
        }
    }

    /// Returns the lead registered under `name` in this scenario.
    pub fn lead(&self, name: &str) -> Result<&Lead, eyre::Report> {
        self.leads
            .get(name)
            .ok_or_else(|| eyre::eyre!("no lead named {name} in scenario world"))
    }
}

impl Default for LeadLifecycleWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> LeadLifecycleWorld {
    LeadLifecycleWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
