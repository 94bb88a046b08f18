//! Domain model for the property catalog.
//!
//! Properties are passive records: leads point at them, but nothing in the
//! catalog ever mutates a lead.

mod error;
mod ids;
mod map;
mod property;

pub use error::{ParsePropertyCategoryError, PropertyDomainError};
pub use ids::{GeoPoint, Price, PropertyId};
pub use map::{MapMarker, map_markers};
pub use property::{Address, PersistedPropertyData, Property, PropertyCategory, PropertyDetails};
