//! Maps domain `AppError` to HTTP responses.
//!
//! JSON endpoints return [`ApiErrorResponse`] bodies. Pages and downloads
//! wrap the error in [`PageError`], which answers with plain text or a
//! redirect to the login page.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use serde::{Deserialize, Serialize};

use docket_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

fn status_and_code(err: &AppError) -> (StatusCode, &'static str) {
    match &err.kind {
        ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        ErrorKind::Unauthorized => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
        ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        ErrorKind::Export => (StatusCode::INTERNAL_SERVER_ERROR, "EXPORT_ERROR"),
        ErrorKind::Storage => {
            tracing::error!(error = %err.message, "Storage error");
            (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR")
        }
        ErrorKind::Configuration | ErrorKind::Internal => {
            tracing::error!(error = %err.message, kind = %err.kind, "Internal server error");
            (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
        }
    }
}

/// JSON error response.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = status_and_code(&self.0);

        let body = ApiErrorResponse {
            error: error_code.to_string(),
            message: self.0.message,
        };

        (status, Json(body)).into_response()
    }
}

/// Plain-text error response for HTML pages and downloads.
#[derive(Debug)]
pub struct PageError(pub AppError);

impl From<AppError> for PageError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        if self.0.kind == ErrorKind::Unauthorized {
            return Redirect::to("/login").into_response();
        }

        let (status, _) = status_and_code(&self.0);
        let body = if status.is_server_error() {
            "Internal Server Error".to_string()
        } else {
            self.0.message
        };

        (status, body).into_response()
    }
}
