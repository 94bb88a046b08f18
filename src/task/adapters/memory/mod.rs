//! In-memory adapters for task scheduling.

mod task;

pub use task::InMemoryTaskRepository;
