//! `PostgreSQL` adapters for task scheduling.

mod models;
mod repository;
mod schema;

pub use repository::PostgresTaskRepository;
