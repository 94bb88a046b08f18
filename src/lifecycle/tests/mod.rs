//! Unit tests for lifecycle coordination.
