//! Scheduled agent activities.
//!
//! A task is a dated, timed activity (visit, call, contract signing or
//! payment follow-up) against one lead. Its title is derived from its type
//! and never set independently. The task store knows nothing about leads;
//! cross-entity effects belong to [`crate::lifecycle`].
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
