//! Shared `PostgreSQL` plumbing for the Diesel adapters.
//!
//! Diesel connections are synchronous, so every adapter hands its work to
//! [`tokio::task::spawn_blocking`] together with a pooled connection.

use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};

/// `PostgreSQL` connection pool shared by task and user adapters.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Runs `f` with a pooled connection on the blocking thread pool.
///
/// Pool checkout failures are mapped with `pool_err`; a panicking closure
/// surfaces through `join_err`.
pub(crate) async fn run_with_connection<F, T, E, P, J>(
    pool: &PgPool,
    f: F,
    pool_err: P,
    join_err: J,
) -> Result<T, E>
where
    F: FnOnce(&mut PgConnection) -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
    P: FnOnce(PoolError) -> E + Send + 'static,
    J: FnOnce(tokio::task::JoinError) -> E,
{
    let pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut connection = pool.get().map_err(pool_err)?;
        f(&mut connection)
    })
    .await
    .map_err(join_err)?
}
