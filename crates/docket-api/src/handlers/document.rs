//! Document mutation handlers (JSON).

use axum::extract::{Path, State};
use axum::{Form, Json};

use docket_entity::document::{DocumentName, Location};
use docket_service::SaveRequest;

use crate::dto::request::SaveDocumentRequest;
use crate::dto::response::{ActionResponse, SaveResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /save-document
pub async fn save(
    State(state): State<AppState>,
    auth: AuthUser,
    Form(req): Form<SaveDocumentRequest>,
) -> Result<Json<SaveResponse>, ApiError> {
    let request = SaveRequest {
        title: req.title,
        content: req.content,
        filename: req.doc_file,
        location: Location::from_form_value(req.folder.as_deref()),
    };

    let outcome = state.writer.save(&auth, request).await?;
    Ok(Json(outcome.into()))
}

/// POST /delete-document/{filename}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(filename): Path<String>,
) -> Result<Json<ActionResponse>, ApiError> {
    let name = DocumentName::parse(&filename)?;
    let outcome = state.lifecycle.move_to_trash(&auth, &name).await?;
    Ok(Json(outcome.into()))
}

/// POST /restore-document/{filename}
pub async fn restore(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(filename): Path<String>,
) -> Result<Json<ActionResponse>, ApiError> {
    let name = DocumentName::parse(&filename)?;
    let outcome = state.lifecycle.restore(&auth, &name).await?;
    Ok(Json(outcome.into()))
}
