//! Download handler.

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::Response;

use docket_core::error::AppError;

use crate::error::PageError;
use crate::extractors::MaybeUser;
use crate::state::AppState;

/// GET /download/{format}/{filename}
///
/// Open to anonymous callers; the session only feeds the log line.
pub async fn download(
    State(state): State<AppState>,
    MaybeUser(identity): MaybeUser,
    Path((format, filename)): Path<(String, String)>,
) -> Result<Response, PageError> {
    let result = state.downloads.download(&format, &filename).await?;

    let user = identity.as_ref().map_or("anonymous", |id| id.username.as_str());
    tracing::debug!(user = %user, file = %result.filename, "Serving download");

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, result.content_type)
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", result.filename),
        )
        .header(header::CONTENT_LENGTH, result.data.len())
        .body(Body::from(result.data))
        .map_err(|e| AppError::internal(format!("Failed to build response: {e}")))?;

    Ok(response)
}
