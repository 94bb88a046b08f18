//! Application services for the property catalog.

mod assignment;
mod catalog;

pub use assignment::{FirstListedAssignment, PropertyAssignment, RandomAssignment};
pub use catalog::{PropertyCatalog, PropertyCatalogError, PropertyCatalogResult};
