//! Step definitions for lead lifecycle scenarios.

pub mod world;

mod given;
mod then;
