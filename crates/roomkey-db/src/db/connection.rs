//! Postgres connection pool sized and timed from `[database]` settings.

use std::time::Duration;

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};
use roomkey_core::config::DatabaseConfig;
use tracing::Instrument;

use crate::db::DbProvider;
use crate::error::DbResult;

pub type DbPool = Pool<AsyncPgConnection>;
pub type DbConnection<'pool> = PooledConnection<'pool, AsyncPgConnection>;

/// ## Summary
/// Creates the Postgres connection pool described by `config`.
///
/// Connections are opened on first checkout rather than at startup, checked
/// for liveness before each use, and closed after `idle_timeout_secs` without
/// traffic. Badge reads arrive in bursts around class changes, so the pool
/// shrinks back between them.
///
/// ## Errors
/// Returns an error if no URL is configured or the pool cannot be built.
#[tracing::instrument(skip(config), fields(max_connections = config.max_connections))]
pub async fn create_pool(config: &DatabaseConfig) -> anyhow::Result<DbPool> {
    let url = config.require_url()?;
    let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(url);

    let pool = Pool::builder()
        .max_size(u32::from(config.max_connections))
        .min_idle(None)
        .test_on_check_out(true)
        .connection_timeout(Duration::from_secs(config.connect_timeout_secs))
        .idle_timeout(Some(Duration::from_secs(config.idle_timeout_secs)))
        .build(manager)
        .await?;

    tracing::info!(
        connect_timeout_secs = config.connect_timeout_secs,
        idle_timeout_secs = config.idle_timeout_secs,
        "Database connection pool created"
    );

    Ok(pool)
}

impl DbProvider for DbPool {
    fn get_connection<'a>(
        &'a self,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = DbResult<DbConnection<'a>>> + Send + 'a>>
    {
        Box::pin(
            async move { Ok(self.get().await?) }
                .instrument(tracing::trace_span!("get_connection")),
        )
    }
}

#[cfg(test)]
mod tests {
    use roomkey_core::config::StoreBackend;

    use super::*;

    fn database(url: Option<&str>) -> DatabaseConfig {
        DatabaseConfig {
            backend: StoreBackend::Postgres,
            url: url.map(str::to_string),
            max_connections: 4,
            connect_timeout_secs: 1,
            idle_timeout_secs: 600,
        }
    }

    #[test_log::test(tokio::test)]
    async fn pool_connects_lazily() {
        // Nothing listens on port 1; building the pool must not dial it.
        let pool = create_pool(&database(Some("postgres://roomkey@127.0.0.1:1/roomkey")))
            .await
            .unwrap();

        assert_eq!(pool.state().connections, 0);
        assert!(pool.get_connection().await.is_err());
    }

    #[test_log::test(tokio::test)]
    async fn pool_requires_url() {
        assert!(create_pool(&database(None)).await.is_err());
    }
}
