//! Route definitions for the Docket HTTP surface.
//!
//! HTML pages, JSON document mutations, downloads, the health check, and
//! static assets. Every request first passes the session middleware so
//! extractors can see who is logged in.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and the session layer.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_bytes;
    let static_dir = ServeDir::new(&state.config.server.static_dir);

    Router::new()
        .merge(page_routes())
        .merge(auth_routes())
        .merge(document_routes())
        .merge(download_routes())
        .merge(health_routes())
        .nest_service("/static", static_dir)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::session::resolve_session,
        ))
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Landing, dashboard, trash, editor
fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::pages::welcome))
        .route("/dashboard", get(handlers::pages::dashboard))
        .route("/trash", get(handlers::pages::trash))
        .route("/editor", get(handlers::pages::editor))
}

/// Login and logout
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/login",
            get(handlers::auth::login_form).post(handlers::auth::login),
        )
        .route("/logout", get(handlers::auth::logout))
}

/// Save, delete, restore, empty trash
fn document_routes() -> Router<AppState> {
    Router::new()
        .route("/save-document", post(handlers::document::save))
        .route(
            "/delete-document/{filename}",
            post(handlers::document::delete),
        )
        .route(
            "/restore-document/{filename}",
            post(handlers::document::restore),
        )
        .route("/empty-trash", post(handlers::trash::empty))
}

/// Document and export downloads
fn download_routes() -> Router<AppState> {
    Router::new().route(
        "/download/{format}/{filename}",
        get(handlers::download::download),
    )
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/api/health", get(handlers::health::health))
}
