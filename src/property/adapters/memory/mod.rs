//! In-memory adapters for the property catalog.

mod property;

pub use property::InMemoryPropertyRepository;
