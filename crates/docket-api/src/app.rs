//! Application builder: wires router + middleware + state into an Axum app.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use docket_auth::StaticCredentialStore;
use docket_core::config::AppConfig;
use docket_core::error::AppError;
use docket_worker::{CronScheduler, TrashReapJob};

use crate::middleware::compression::build_compression_layer;
use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let server = state.config.server.clone();

    build_router(state)
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_seconds,
        )))
        .layer(build_compression_layer())
        .layer(build_cors_layer(&server.cors))
        .layer(TraceLayer::new_for_http())
}

/// Runs the Docket server with the given configuration.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Docket server...");

    // ── Step 1: Auth ─────────────────────────────────────────────
    let credentials = Arc::new(StaticCredentialStore::from_config(&config.auth));
    tracing::info!(users = credentials.len(), "Loaded credential table");

    // ── Step 2: Storage and services ─────────────────────────────
    let state = AppState::new(config.clone(), credentials).await?;
    tracing::info!(
        data_root = %config.storage.data_root,
        retention_days = config.trash.retention_days,
        "Document folders ready"
    );

    // ── Step 3: Trash reaper schedule ────────────────────────────
    let mut scheduler = if config.trash.reaper_enabled {
        let scheduler = CronScheduler::new().await?;
        scheduler
            .register_trash_reaper(
                TrashReapJob::new(Arc::clone(&state.reaper)),
                &config.trash.reaper_schedule,
            )
            .await?;
        scheduler.start().await?;
        Some(scheduler)
    } else {
        tracing::info!("Trash reaper schedule disabled");
        None
    };

    // ── Step 4: HTTP server ──────────────────────────────────────
    let app = build_app(state);
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Docket server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    if let Some(scheduler) = scheduler.as_mut() {
        scheduler.shutdown().await?;
    }

    tracing::info!("Docket server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
