//! Lead management for the CRM.
//!
//! Leads carry the pipeline status and last-contact date that the lifecycle
//! coordinator keeps in step with scheduling activity. Each lead points at
//! one catalog property by identifier; neither side owns the other.
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
