// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use anyhow::Context;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::application::key_value_store::KeyValueStore;
use crate::application::layout_service::LayoutService;
use crate::infrastructure::config::{StorageBackend, load_sections_config, load_server_config};
use crate::infrastructure::file_store::FileStore;
use crate::infrastructure::memory_store::MemoryStore;
use crate::presentation::app_state::AppState;
use crate::presentation::routes::router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing, RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let server_config = load_server_config()?;
    let registry = Arc::new(load_sections_config()?.into_registry()?);

    // Create store (infrastructure layer)
    let store: Arc<dyn KeyValueStore> = match server_config.storage.backend {
        StorageBackend::File => {
            tracing::info!(directory = %server_config.storage.directory.display(), "using file storage");
            Arc::new(FileStore::new(server_config.storage.directory.clone()))
        }
        StorageBackend::Memory => {
            tracing::warn!("using in-memory storage, layout changes will not survive a restart");
            Arc::new(MemoryStore::new())
        }
    };

    // Create service (application layer)
    let layout_service = Arc::new(LayoutService::init(store, registry).await?);
    let state = Arc::new(AppState::new(layout_service.clone()));

    // Build router (presentation layer)
    let app = router(state)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = server_config
        .server
        .bind_address
        .parse()
        .with_context(|| format!("Invalid bind address {}", server_config.server.bind_address))?;
    tracing::info!(%addr, "starting dashboard-layout service");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(layout_service.clone()))
        .await?;

    Ok(())
}

/// Waits for Ctrl-C, then disposes the layout service so open event streams end
/// and the server can drain.
async fn shutdown_signal(layout_service: Arc<LayoutService>) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
    layout_service.dispose();
}
