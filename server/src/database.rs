use anyhow::Context as _;
use api::db::{PgStore, Store};
use sqlx::PgPool;

use crate::settings::Database;

/// Open the connection pool and make sure the database answers.
pub async fn connection_pool(settings: &Database) -> anyhow::Result<PgPool> {
    let pool = api::db::connect(&settings.url(), settings.connections)
        .context("Invalid database URL")?;
    PgStore::new(pool.clone())
        .ping()
        .await
        .with_context(|| {
            format!(
                "Database unreachable at {}:{}/{}",
                settings.host, settings.port, settings.database
            )
        })?;
    Ok(pool)
}
