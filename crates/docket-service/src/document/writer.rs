//! Saving documents and their sibling exports.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{info, warn};

use docket_core::error::AppError;
use docket_core::result::AppResult;
use docket_entity::document::header::{self, DEFAULT_TITLE};
use docket_entity::document::{DocumentName, Location};
use docket_storage::DocumentRepository;

use crate::context::RequestContext;
use crate::export::{ExportDocument, Exporter};

use super::outcome::SaveOutcome;

/// Fields posted by the editor.
#[derive(Debug, Clone)]
pub struct SaveRequest {
    /// Title; missing becomes "Untitled". Must be a single line.
    pub title: Option<String>,
    /// Body text; missing is empty.
    pub content: Option<String>,
    /// Existing filename to overwrite; blank or missing generates a new one.
    pub filename: Option<String>,
    /// Folder to write into.
    pub location: Location,
}

/// Writes the canonical text file, then each enabled export.
///
/// Export failures never fail the save; they come back as warnings.
#[derive(Debug, Clone)]
pub struct DocumentWriter {
    /// Document repository.
    repo: Arc<DocumentRepository>,
    /// Enabled exporters.
    exporters: Arc<Vec<Box<dyn Exporter>>>,
}

impl DocumentWriter {
    /// Creates a new writer.
    pub fn new(repo: Arc<DocumentRepository>, exporters: Vec<Box<dyn Exporter>>) -> Self {
        Self {
            repo,
            exporters: Arc::new(exporters),
        }
    }

    /// Save a document, overwriting any file with the same name.
    pub async fn save(&self, ctx: &RequestContext, req: SaveRequest) -> AppResult<SaveOutcome> {
        let title = req.title.unwrap_or_else(|| DEFAULT_TITLE.to_string());
        if !header::is_single_line(&title) {
            return Err(AppError::validation("Title must be a single line"));
        }
        let content = req.content.unwrap_or_default();

        let name = match req.filename.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => DocumentName::parse(raw)?,
            _ => DocumentName::generate(),
        };

        let date = header::today();
        let text = header::serialize(&title, &date, &content);
        self.repo
            .write_file(req.location, name.as_str(), Bytes::from(text))
            .await?;

        let doc = ExportDocument {
            title: &title,
            date: &date,
            body: &content,
        };

        let mut warnings = Vec::new();
        for exporter in self.exporters.iter() {
            let format = exporter.format();
            let file = name.with_format(format);
            let result = match exporter.render(&doc) {
                Ok(bytes) => {
                    self.repo
                        .write_file(req.location, &file, Bytes::from(bytes))
                        .await
                }
                Err(e) => Err(e),
            };
            if let Err(e) = result {
                warn!(file = %file, format = %format, error = %e, "Export failed");
                warnings.push(format!("{} export failed: {}", format, e.message));
            }
        }

        info!(
            user = %ctx.username,
            file = %name,
            location = %req.location,
            warnings = warnings.len(),
            "Document saved"
        );

        Ok(SaveOutcome {
            filename: name.as_str().to_string(),
            message: format!("Document '{title}' saved!"),
            title,
            warnings,
        })
    }
}
