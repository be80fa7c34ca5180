//! HTTP server initialization and runtime setup.
//!
//! Handles store setup and the Axum server lifecycle.

use crate::config::{Config, StoreBackend, mask_connection_string};
use crate::domain::repositories::KeyValueStore;
use crate::infrastructure::store::{InMemoryStore, RedisStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the store handle selected by the configuration.
///
/// Startup is best-effort: an unreachable Redis is logged as a warning and
/// the handle is returned anyway. Requests fail with `StoreUnavailable` until
/// Redis answers, and `/health` reports the store as degraded.
///
/// # Errors
///
/// Returns an error only if the Redis URL cannot be parsed.
pub async fn build_store(config: &Config) -> Result<Arc<dyn KeyValueStore>> {
    match config.store_backend {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; mappings are lost on shutdown");
            Ok(Arc::new(InMemoryStore::new()))
        }
        StoreBackend::Redis => {
            let masked = mask_connection_string(&config.redis_url);
            let store = RedisStore::open(&config.redis_url)
                .with_context(|| format!("Invalid Redis configuration: {}", masked))?;

            match store.ping().await {
                Ok(()) => tracing::info!("Store ready (Redis at {})", masked),
                Err(e) => tracing::warn!(
                    "Failed to connect to Redis at {}: {}. Starting anyway.",
                    masked,
                    e
                ),
            }

            Ok(Arc::new(store))
        }
    }
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The store configuration is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = build_store(&config).await?;
    let state = AppState::new(store);

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address: {}", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
