//! Listing view of a document.

use serde::{Deserialize, Serialize};

use super::header::ParsedDocument;

/// One row of a folder listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSummary {
    /// The canonical `.txt` filename.
    pub filename: String,
    /// Title from the header.
    pub title: String,
    /// Creation date string from the header.
    pub date: String,
    /// Truncated body.
    pub preview: String,
}

impl DocumentSummary {
    /// Build a summary row from a parsed file.
    pub fn from_parsed(filename: impl Into<String>, parsed: &ParsedDocument) -> Self {
        Self {
            filename: filename.into(),
            title: parsed.title.clone(),
            date: parsed.date.clone(),
            preview: parsed.preview(),
        }
    }
}
