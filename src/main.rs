//! webhook-recorder server entry point.
//!
//! Connects the record store and starts the Axum HTTP server.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use webhook_recorder::api;
use webhook_recorder::app_state::AppState;
use webhook_recorder::config::AppConfig;
use webhook_recorder::persistence::{MemoryRecordStore, PostgresRecordStore, RecordStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = AppConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting webhook-recorder");

    let store = build_store(&config).await?;
    let app_state = AppState::new(store);
    let app = api::build_app(app_state, config.request_timeout(), config.max_body_bytes);

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// `RUST_LOG` controls the filter (default `info`); `LOG_FORMAT=json`
/// switches to structured JSON output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    if json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn build_store(config: &AppConfig) -> anyhow::Result<Arc<dyn RecordStore>> {
    if !config.persistence_enabled {
        tracing::warn!("persistence disabled; records are kept in memory only");
        return Ok(Arc::new(MemoryRecordStore::new()));
    }

    let store = PostgresRecordStore::connect(config)
        .await
        .context("failed to connect to the record database")?;
    if config.run_migrations {
        store.migrate().await.context("failed to migrate the record database")?;
    }
    Ok(Arc::new(store))
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
