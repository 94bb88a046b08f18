//! Shared wiring for `PostgreSQL` integration tests.

pub use super::cluster::{BoxError, PostgresCluster, TemporaryDatabase, postgres_cluster};
use crate::test_helpers::FixedClock;
use chrono::NaiveDate;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use realtyflow::lead::domain::{Lead, NewLead};
use realtyflow::pg::{CrmPgPool, connect_pool};
use realtyflow::property::domain::{Price, Property, PropertyCategory, PropertyDetails};
use rstest::fixture;

/// SQL creating the properties, leads and tasks tables.
pub const CREATE_CRM_TABLES_SQL: &str =
    include_str!("../../migrations/2026-04-01-000000_create_crm_tables/up.sql");

/// Template database holding the migrated schema.
pub const TEMPLATE_DB: &str = "realtyflow_test_template";

/// Ensures the template database exists with the schema applied.
///
/// # Errors
///
/// Returns an error if template creation or migration fails.
pub async fn ensure_template(cluster: PostgresCluster) -> Result<(), BoxError> {
    cluster
        .ensure_template_exists(TEMPLATE_DB, apply_migrations)
        .await
}

fn apply_migrations(url: &str) -> Result<(), BoxError> {
    let mut conn = PgConnection::establish(url).map_err(|err| Box::new(err) as BoxError)?;
    conn.batch_execute(CREATE_CRM_TABLES_SQL)
        .map_err(|err| Box::new(err) as BoxError)
}

/// A migrated database of its own plus a pool connected to it.
///
/// The pool is declared first so it closes before the database is dropped.
pub struct CrmDatabase {
    pub pool: CrmPgPool,
    pub database: TemporaryDatabase,
}

/// Provides a fresh migrated database, or `None` when no cluster is
/// available.
///
/// # Errors
///
/// Returns an error if template setup, database creation or pool
/// construction fails.
#[fixture]
pub async fn crm_database(
    postgres_cluster: Result<Option<PostgresCluster>, BoxError>,
) -> Result<Option<CrmDatabase>, BoxError> {
    let Some(cluster) = postgres_cluster? else {
        return Ok(None);
    };
    ensure_template(cluster).await?;
    let database = cluster.temporary_database_from_template(TEMPLATE_DB).await?;
    let url = database.url().to_owned();
    let pool = tokio::task::spawn_blocking(move || connect_pool(&url, 2))
        .await
        .map_err(|err| Box::new(err) as BoxError)?
        .map_err(|err| Box::new(err) as BoxError)?;
    Ok(Some(CrmDatabase { pool, database }))
}

/// Builds a house listing created on `day`.
///
/// # Errors
///
/// Returns an error if the listing details are invalid.
pub fn listing(title: &str, price: u64, day: NaiveDate) -> Result<Property, BoxError> {
    let details = PropertyDetails::new(title, Price::new(price)?, PropertyCategory::House)?
        .with_rooms(3, 2)
        .with_area(180);
    Ok(Property::new(details, &FixedClock::on(day)))
}

/// Builds a new lead created on `day`.
///
/// # Errors
///
/// Returns an error if the name or email is blank.
pub fn new_lead(name: &str, day: NaiveDate) -> Result<Lead, BoxError> {
    let request = NewLead::new(name, format!("{}@example.com", name.to_lowercase()))?;
    Ok(Lead::create(request, None, &FixedClock::on(day)))
}
