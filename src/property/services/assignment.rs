//! Default property assignment policies for newly added leads.
//!
//! A lead added without an explicit property of interest is pointed at a
//! catalog entry chosen by one of these policies. The choice carries no
//! relevance guarantee.

use crate::property::domain::{Property, PropertyId};
use rand::seq::SliceRandom;

/// Picks the property of interest for a lead created without one.
pub trait PropertyAssignment: Send + Sync {
    /// Returns the chosen property, or `None` when the catalog is empty.
    fn assign(&self, catalog: &[Property]) -> Option<PropertyId>;
}

/// Picks a uniformly random catalog entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomAssignment;

impl PropertyAssignment for RandomAssignment {
    fn assign(&self, catalog: &[Property]) -> Option<PropertyId> {
        catalog
            .choose(&mut rand::thread_rng())
            .map(Property::id)
    }
}

/// Picks the first catalog entry, which is the newest listing.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstListedAssignment;

impl PropertyAssignment for FirstListedAssignment {
    fn assign(&self, catalog: &[Property]) -> Option<PropertyId> {
        catalog.first().map(Property::id)
    }
}
