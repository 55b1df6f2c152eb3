//! Trash handlers (JSON).

use axum::Json;
use axum::extract::State;

use crate::dto::response::ActionResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /empty-trash
pub async fn empty(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ActionResponse>, ApiError> {
    let outcome = state.lifecycle.empty_trash(&auth).await?;
    Ok(Json(outcome.into()))
}
