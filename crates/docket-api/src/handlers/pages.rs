//! HTML page handlers.

use axum::extract::{Query, State};
use axum::response::Html;

use crate::dto::request::EditorQuery;
use crate::error::PageError;
use crate::extractors::{MaybeUser, PageUser};
use crate::state::AppState;
use crate::views::{DashboardTemplate, EditorTemplate, TrashTemplate, WelcomeTemplate, render};

/// GET /
pub async fn welcome(MaybeUser(identity): MaybeUser) -> Result<Html<String>, PageError> {
    Ok(render(&WelcomeTemplate {
        user: identity.as_ref().map(|id| id.username.as_str()),
    })?)
}

/// GET /dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    user: PageUser,
) -> Result<Html<String>, PageError> {
    let documents = state.documents.list_active().await?;
    let trash_count = state.documents.count_trash().await?;
    let flash = state.sessions.take_flash(&user.token);

    Ok(render(&DashboardTemplate {
        user: &user.username,
        flash: flash.as_deref(),
        documents: &documents,
        trash_count,
        page: "dashboard",
    })?)
}

/// GET /trash
pub async fn trash(
    State(state): State<AppState>,
    user: PageUser,
) -> Result<Html<String>, PageError> {
    let documents = state.documents.list_trash().await?;

    Ok(render(&TrashTemplate {
        user: &user.username,
        trash_count: documents.len(),
        documents: &documents,
        retention_days: state.reaper.retention_days(),
        page: "trash",
    })?)
}

/// GET /editor?doc=<filename>
pub async fn editor(
    State(state): State<AppState>,
    user: PageUser,
    Query(query): Query<EditorQuery>,
) -> Result<Html<String>, PageError> {
    let doc = state
        .documents
        .open_for_editing(query.doc.as_deref())
        .await?;

    Ok(render(&EditorTemplate {
        user: &user.username,
        title: &doc.title,
        content: &doc.content,
        doc_file: doc.filename.as_deref().unwrap_or_default(),
        folder: doc.location.form_value(),
    })?)
}
