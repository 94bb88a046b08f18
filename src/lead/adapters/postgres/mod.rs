//! `PostgreSQL` adapters for lead management.

mod models;
mod repository;
mod schema;

pub use repository::PostgresLeadRepository;
