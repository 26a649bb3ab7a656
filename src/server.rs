//! HTTP server initialization and runtime setup.
//!
//! Handles store connections, state assembly, and the Axum server lifecycle.

use crate::config::{Config, StorageBackend};
use crate::domain::repositories::{CanonicalRepository, RedirectionRepository};
use crate::infrastructure::persistence::{MemoryStore, RedisStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Repository handles for both namespaces.
///
/// Backend connections close once the last clone of these handles is dropped.
pub struct StoreHandles {
    pub canonical: Arc<dyn CanonicalRepository>,
    pub redirection: Arc<dyn RedirectionRepository>,
}

/// Connects to the configured storage backend.
///
/// # Errors
///
/// Returns an error if Redis is selected and either database is unreachable.
pub async fn connect_store(config: &Config) -> Result<StoreHandles> {
    match config.storage_backend {
        StorageBackend::Redis => {
            let store = RedisStore::connect(
                &config.redis_url_for_db(config.redis_canonical_db),
                &config.redis_url_for_db(config.redis_redirection_db),
            )
            .await
            .context("Failed to connect to Redis")?;
            tracing::info!("Connected to Redis");

            let shared = Arc::new(store);
            Ok(StoreHandles {
                canonical: shared.clone(),
                redirection: shared,
            })
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; links are lost on restart");
            let store = Arc::new(MemoryStore::with_capacity(config.memory_max_capacity));
            Ok(StoreHandles {
                canonical: store.clone(),
                redirection: store,
            })
        }
    }
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Storage backend (Redis or in-memory)
/// - Link and redirect services
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - Store connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = connect_store(&config).await?;

    let state = AppState::new(
        store.canonical.clone(),
        store.redirection.clone(),
        config.link_settings(),
    )
    .context("Invalid DOMAIN for self-link matching")?;

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    // The router and its state are gone; these are the last handles.
    drop(store);
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::error!("Failed to listen for shutdown signal: {}", e),
    }
}
