//! Database connection pool.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Build a connection pool for `database_url`.
///
/// Connections are opened on first use, so this only fails on a malformed
/// URL. Reachability is checked with [`Store::ping`](super::Store::ping).
pub fn connect(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_lazy(database_url)
}
