//! # docket-api
//!
//! HTTP layer for Docket built on Axum.
//!
//! Provides the HTML pages, the JSON document endpoints, downloads,
//! cookie session middleware, extractors, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
pub mod views;

pub use app::{build_app, run_server};
pub use state::AppState;
