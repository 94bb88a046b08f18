//! Adapter implementations for property catalog ports.

pub mod memory;
pub mod postgres;
