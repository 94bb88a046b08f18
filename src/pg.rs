//! Shared `PostgreSQL` plumbing for the catalog, lead and task adapters.
//!
//! Diesel is synchronous, so every query runs on Tokio's blocking pool to
//! keep async executor threads free.

use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError, PooledConnection};

/// `PostgreSQL` connection pool shared by all CRM repositories.
pub type CrmPgPool = Pool<ConnectionManager<PgConnection>>;

/// Pooled connection type for adapter internals.
pub(crate) type PooledConn = PooledConnection<ConnectionManager<PgConnection>>;

/// Builds a connection pool for the given database URL.
///
/// # Errors
///
/// Returns [`PoolError`] when the initial connections cannot be opened.
pub fn connect_pool(database_url: &str, max_size: u32) -> Result<CrmPgPool, PoolError> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Pool::builder().max_size(max_size.max(1)).build(manager)
}

/// Runs a blocking task and maps join errors into the caller's error type.
pub(crate) async fn run_blocking_with<F, T, E, M>(f: F, map_err: M) -> Result<T, E>
where
    F: FnOnce() -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
    M: FnOnce(tokio::task::JoinError) -> E,
{
    tokio::task::spawn_blocking(f).await.map_err(map_err)?
}

/// Obtains a connection from the pool with a caller-provided error mapper.
pub(crate) fn get_conn_with<E, M>(pool: &CrmPgPool, map_err: M) -> Result<PooledConn, E>
where
    M: FnOnce(PoolError) -> E,
{
    pool.get().map_err(map_err)
}
