//! Serving documents and their exports as downloads.

use std::sync::Arc;

use bytes::Bytes;
use tracing::debug;

use docket_core::error::AppError;
use docket_core::result::AppResult;
use docket_entity::document::{DocumentFormat, DocumentName};
use docket_storage::DocumentRepository;

/// File content and headers for a download response.
#[derive(Debug)]
pub struct DownloadResult {
    /// Filename for Content-Disposition.
    pub filename: String,
    /// File content bytes.
    pub data: Bytes,
    /// MIME type for Content-Type header.
    pub content_type: &'static str,
}

/// Looks up `<base>.<format>` in active, then trash.
#[derive(Debug, Clone)]
pub struct DownloadService {
    /// Document repository.
    repo: Arc<DocumentRepository>,
}

impl DownloadService {
    /// Creates a new download service.
    pub fn new(repo: Arc<DocumentRepository>) -> Self {
        Self { repo }
    }

    /// Fetch a document in the requested format.
    ///
    /// An unknown format is rejected before touching storage.
    pub async fn download(&self, format: &str, filename: &str) -> AppResult<DownloadResult> {
        let format: DocumentFormat = format
            .parse()
            .map_err(|_| AppError::validation("Invalid format"))?;
        let name =
            DocumentName::parse(filename).map_err(|_| AppError::not_found("File not found"))?;
        let file = name.with_format(format);

        let Some(location) = self.repo.locate_file(&file).await? else {
            debug!(file = %file, "Download target missing");
            return Err(AppError::not_found("File not found"));
        };

        let data = self.repo.read_file(location, &file).await?;
        debug!(file = %file, location = %location, bytes = data.len(), "Serving download");

        Ok(DownloadResult {
            filename: file,
            data,
            content_type: format.mime_type(),
        })
    }
}
