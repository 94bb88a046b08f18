//! Unit tests for the property catalog.
