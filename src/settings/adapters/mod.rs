//! Adapter implementations for settings storage.

pub mod file;
pub mod memory;
