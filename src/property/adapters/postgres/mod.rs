//! `PostgreSQL` adapters for the property catalog.

mod models;
mod repository;
mod schema;

pub use repository::PostgresPropertyRepository;
