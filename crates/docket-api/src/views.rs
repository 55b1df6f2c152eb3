//! Askama page templates.

use askama::Template;
use axum::response::Html;

use docket_core::error::AppError;
use docket_core::result::AppResult;
use docket_entity::document::DocumentSummary;

/// Landing page.
#[derive(Template)]
#[template(path = "welcome.html")]
pub struct WelcomeTemplate<'a> {
    pub user: Option<&'a str>,
}

/// Login form with an optional flash line.
#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate<'a> {
    pub flash: Option<&'a str>,
    pub error: Option<&'a str>,
    pub login: &'a str,
}

/// Active document list.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate<'a> {
    pub user: &'a str,
    pub flash: Option<&'a str>,
    pub documents: &'a [DocumentSummary],
    pub trash_count: usize,
    pub page: &'a str,
}

/// Trash list.
#[derive(Template)]
#[template(path = "trash.html")]
pub struct TrashTemplate<'a> {
    pub user: &'a str,
    pub documents: &'a [DocumentSummary],
    pub trash_count: usize,
    pub retention_days: i64,
    pub page: &'a str,
}

/// Document editor.
#[derive(Template)]
#[template(path = "editor.html")]
pub struct EditorTemplate<'a> {
    pub user: &'a str,
    pub title: &'a str,
    pub content: &'a str,
    pub doc_file: &'a str,
    pub folder: &'a str,
}

/// Render a template into an HTML response.
pub fn render<T: Template>(template: &T) -> AppResult<Html<String>> {
    template
        .render()
        .map(Html)
        .map_err(|e| AppError::internal(format!("Template rendering failed: {e}")))
}
