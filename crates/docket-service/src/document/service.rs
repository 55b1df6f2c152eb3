//! Listing and editor lookups.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use docket_core::error::AppError;
use docket_core::result::AppResult;
use docket_entity::document::header::DEFAULT_TITLE;
use docket_entity::document::{DocumentName, DocumentSummary, Location};
use docket_storage::DocumentRepository;

use crate::trash::TrashReaper;

/// What the editor page shows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorDocument {
    /// Canonical filename being edited; `None` for a new document.
    pub filename: Option<String>,
    /// Title field.
    pub title: String,
    /// Body field.
    pub content: String,
    /// Folder the document was loaded from; saves go back there.
    pub location: Location,
}

impl EditorDocument {
    /// A blank editor for a new document.
    pub fn blank() -> Self {
        Self {
            filename: None,
            title: DEFAULT_TITLE.to_string(),
            content: String::new(),
            location: Location::Active,
        }
    }
}

/// Read-side document queries.
///
/// Trash queries run the reaper first so expired documents never show up.
#[derive(Debug, Clone)]
pub struct DocumentService {
    /// Document repository.
    repo: Arc<DocumentRepository>,
    /// Trash reaper.
    reaper: Arc<TrashReaper>,
}

impl DocumentService {
    /// Creates a new document service.
    pub fn new(repo: Arc<DocumentRepository>, reaper: Arc<TrashReaper>) -> Self {
        Self { repo, reaper }
    }

    /// Active documents, newest filename first.
    pub async fn list_active(&self) -> AppResult<Vec<DocumentSummary>> {
        self.repo.list(Location::Active).await
    }

    /// Trash documents after expiring old ones.
    ///
    /// Expired documents are left out even when their deletion failed.
    pub async fn list_trash(&self) -> AppResult<Vec<DocumentSummary>> {
        let expired = self.reap().await;
        let documents = self.repo.list(Location::Trash).await?;
        Ok(documents
            .into_iter()
            .filter(|doc| !expired.contains(&doc.filename))
            .collect())
    }

    /// Number of trash documents after expiring old ones.
    pub async fn count_trash(&self) -> AppResult<usize> {
        let expired = self.reap().await;
        let entries = self.repo.text_entries(Location::Trash).await?;
        Ok(entries
            .iter()
            .filter(|entry| !expired.contains(&entry.name))
            .count())
    }

    /// Run the reaper and return the expired names.
    ///
    /// A reaper failure must not hide the listing.
    async fn reap(&self) -> Vec<String> {
        match self.reaper.reap_expired().await {
            Ok(report) => report.expired,
            Err(e) => {
                warn!(error = %e, "Trash reaper failed");
                Vec::new()
            }
        }
    }

    /// Load the editor for `doc`.
    ///
    /// Values not ending in `.txt` give a blank editor. A `.txt` name is
    /// looked up in active, then trash.
    pub async fn open_for_editing(&self, doc: Option<&str>) -> AppResult<EditorDocument> {
        let Some(doc) = doc.filter(|d| d.ends_with(".txt")) else {
            return Ok(EditorDocument::blank());
        };

        let name =
            DocumentName::parse(doc).map_err(|_| AppError::not_found("Document not found"))?;
        let location = self
            .repo
            .locate(&name)
            .await?
            .ok_or_else(|| AppError::not_found("Document not found"))?;
        let parsed = self.repo.load(location, &name).await?;

        Ok(EditorDocument {
            filename: Some(name.as_str().to_string()),
            content: parsed.content().to_string(),
            title: parsed.title,
            location,
        })
    }
}
