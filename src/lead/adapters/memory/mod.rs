//! In-memory adapters for lead management.

mod lead;

pub use lead::InMemoryLeadRepository;
