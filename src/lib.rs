//! RealtyFlow: lead and task lifecycle core for a real-estate CRM.
//!
//! This crate holds the state layer behind the RealtyFlow dashboard: the
//! property catalog, leads moving through the sales pipeline, the tasks
//! agents schedule against them, and everything derived from those three
//! collections.
//!
//! # Architecture
//!
//! Each bounded context follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (memory, `PostgreSQL`,
//!   files)
//!
//! # Modules
//!
//! - [`property`]: Property catalog and map markers
//! - [`lead`]: Lead store, pipeline status and filters
//! - [`task`]: Scheduled agent activities
//! - [`lifecycle`]: Cross-entity effects of scheduling and deletion
//! - [`dashboard`]: Stat cards, trends, pipeline, reports and agenda
//! - [`sync`]: Change feed and snapshot reload loop
//! - [`assist`]: Follow-up email drafting with fallbacks
//! - [`settings`]: Dashboard settings document and storage
//! - [`config`]: Runtime configuration

pub mod assist;
pub mod config;
pub mod dashboard;
pub mod labels;
pub mod lead;
pub mod lifecycle;
pub mod pg;
pub mod property;
pub mod settings;
pub mod sync;
pub mod task;

#[cfg(test)]
mod test_support;
