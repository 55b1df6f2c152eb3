//! Request DTOs (form bodies and query strings).

use serde::Deserialize;

/// Login form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    /// Username.
    #[serde(default)]
    pub login: String,
    /// Password.
    #[serde(default)]
    pub password: String,
}

/// Save form posted by the editor.
///
/// Absent fields stay `None` so the writer can tell them from empty ones.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SaveDocumentRequest {
    /// Document title.
    pub title: Option<String>,
    /// Document body.
    pub content: Option<String>,
    /// Existing filename; blank for a new document.
    pub doc_file: Option<String>,
    /// `documents` or `trash`.
    pub folder: Option<String>,
}

/// Editor query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EditorQuery {
    /// Filename to open.
    pub doc: Option<String>,
}
