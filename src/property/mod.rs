//! Property catalog for the CRM.
//!
//! The catalog is the leaf of the data model: leads reference listings by
//! identifier, and deleting a listing never cascades into leads. The module
//! follows hexagonal architecture:
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
