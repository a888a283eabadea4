use std::sync::Arc;

use salvo::conn::TcpListener;
use salvo::logging::Logger;
use salvo::{Listener, Router};
use roomkey_app::app::api::routes;
use roomkey_app::config::{ConfigHandler, Settings, StoreBackend};
use roomkey_app::store_handler::StoreHandler;
use roomkey_core::clock::SystemClock;
use roomkey_core::config::load_config;
use roomkey_db::db::connection::create_pool;
use roomkey_db::db::migrations::run_migrations;
use roomkey_db::store::EntityStore;
use roomkey_db::store::memory::MemoryStore;
use roomkey_db::store::postgres::PgStore;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting roomkey record service");

    let config = load_config()?;

    tracing::info!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    let store = open_store(&config).await?;

    tracing::info!(backend = store.backend_name(), "Entity store ready");

    let bind_addr = config.server.bind_addr();
    let acceptor = TcpListener::new(bind_addr.clone()).bind().await;

    let router = Router::new()
        .hoop(Logger::new())
        .hoop(StoreHandler {
            store,
            clock: Arc::new(SystemClock),
        })
        .hoop(ConfigHandler::new(config.clone()))
        .push(routes());

    tracing::info!("Server listening on {bind_addr}");

    salvo::Server::new(acceptor).serve(router).await;

    Ok(())
}

/// Opens the configured backend. Postgres is migrated before use.
async fn open_store(config: &Settings) -> anyhow::Result<Arc<dyn EntityStore>> {
    match config.database.backend {
        StoreBackend::Postgres => {
            run_migrations(config.database.require_url()?).await?;
            let pool = create_pool(&config.database).await?;
            Ok(Arc::new(PgStore::new(pool)))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using the in-memory store; data is lost on restart");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
