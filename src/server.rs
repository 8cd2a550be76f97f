/// Server setup and initialization
///
/// Wires together storage and HTTP routes. Provides the application factory used by
/// `main` and a router builder that tests can mount over any storage.

use crate::{
    api::workers::{create_worker_routes, AppState},
    config::Config,
    registry::{storage::IN_MEMORY, WorkerStorage},
};
use anyhow::Result;
use axum::{routing::get, Router};
use std::path::Path;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

/// Build the HTTP router over an initialized storage
///
/// CORS is permissive: the browser UI is served from a different origin.
pub fn build_router(storage: WorkerStorage) -> Router {
    let app_state = AppState { storage };

    Router::new()
        // Health check endpoint
        .route("/healthz", get(health_check))
        // Worker management API routes
        .merge(create_worker_routes().with_state(app_state))
        .layer(CorsLayer::permissive())
}

/// Create the main Axum application with all routes and middleware
///
/// Opens the worker database (creating its directory and table if needed) and
/// mounts the API on top of it.
pub async fn create_app(config: Config) -> Result<Router> {
    if config.database.path != IN_MEMORY {
        if let Some(dir) = Path::new(&config.database.path).parent() {
            if !dir.as_os_str().is_empty() {
                tracing::info!("📁 Ensuring data directory exists: {}", dir.display());
                std::fs::create_dir_all(dir)
                    .map_err(|e| anyhow::anyhow!("Failed to create data directory: {}", e))?;
            }
        }
    }

    tracing::info!("🗄️ Initializing worker storage");
    let storage = WorkerStorage::connect(&config.database)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to open worker database: {}", e))?;
    storage
        .init_schema()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to initialize worker schema: {}", e))?;

    let count = storage.count_workers().await?;
    tracing::info!("📋 Worker registry holds {} records", count);

    tracing::info!("📡 Creating HTTP router with all endpoints");
    let app = build_router(storage);

    tracing::info!("✅ Application initialized successfully");

    Ok(app)
}

/// Start the HTTP server with the given configuration
///
/// Creates the application and serves it on the configured address until Ctrl-C.
pub async fn start_server(config: Config) -> Result<()> {
    // Initialize tracing subscriber for logging (RUST_LOG overrides the default level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_thread_ids(true)
        .with_level(true)
        .init();

    tracing::info!("Starting worker registry server...");

    let app = create_app(config.clone()).await?;

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    tracing::info!("Server listening on http://{}", bind_addr);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves when the process receives Ctrl-C
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("❌ Failed to listen for shutdown signal: {}", e);
    }
}

/// Health check endpoint handler
async fn health_check() -> &'static str {
    "ok"
}
