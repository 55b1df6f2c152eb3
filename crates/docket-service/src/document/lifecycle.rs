//! Moving documents between folders and emptying the trash.

use std::sync::Arc;

use tracing::{debug, info, warn};

use docket_core::result::AppResult;
use docket_entity::document::{DocumentFormat, DocumentName, Location};
use docket_storage::DocumentRepository;

use crate::context::RequestContext;

use super::outcome::OperationOutcome;

/// Handles delete (to trash), restore, and empty-trash.
///
/// Every operation works file by file over the `.txt`, `.docx` and `.pdf`
/// siblings; a failure on one file is recorded as a warning and the rest
/// still run.
#[derive(Debug, Clone)]
pub struct LifecycleService {
    /// Document repository.
    repo: Arc<DocumentRepository>,
}

impl LifecycleService {
    /// Creates a new lifecycle service.
    pub fn new(repo: Arc<DocumentRepository>) -> Self {
        Self { repo }
    }

    /// Move a document and its exports from active into trash.
    pub async fn move_to_trash(
        &self,
        ctx: &RequestContext,
        name: &DocumentName,
    ) -> AppResult<OperationOutcome> {
        let outcome = self
            .transfer(name, Location::Active, Location::Trash, "Document moved to trash")
            .await;
        info!(user = %ctx.username, file = %name, moved = outcome.affected.len(), "Document moved to trash");
        Ok(outcome)
    }

    /// Move a document and its exports from trash back into active.
    pub async fn restore(
        &self,
        ctx: &RequestContext,
        name: &DocumentName,
    ) -> AppResult<OperationOutcome> {
        let outcome = self
            .transfer(name, Location::Trash, Location::Active, "Document restored")
            .await;
        info!(user = %ctx.username, file = %name, moved = outcome.affected.len(), "Document restored");
        Ok(outcome)
    }

    /// Permanently delete every recognized file in the trash.
    pub async fn empty_trash(&self, ctx: &RequestContext) -> AppResult<OperationOutcome> {
        let mut outcome = OperationOutcome::new("Trash emptied");

        for entry in self.repo.entries(Location::Trash).await? {
            if DocumentFormat::from_filename(&entry.name).is_none() {
                continue;
            }
            match self.repo.remove_file(Location::Trash, &entry.name).await {
                Ok(()) => outcome.affected.push(entry.name),
                Err(e) => {
                    warn!(file = %entry.name, error = %e, "Failed to remove trashed file");
                    outcome
                        .warnings
                        .push(format!("Failed to remove {}: {}", entry.name, e.message));
                }
            }
        }

        info!(user = %ctx.username, removed = outcome.affected.len(), "Trash emptied");
        Ok(outcome)
    }

    async fn transfer(
        &self,
        name: &DocumentName,
        from: Location,
        to: Location,
        message: &str,
    ) -> OperationOutcome {
        let mut outcome = OperationOutcome::new(message);

        for format in DocumentFormat::ALL {
            let file = name.with_format(format);
            let result = match self.repo.exists(from, &file).await {
                Ok(true) => self.repo.move_file(from, to, &file).await.map(|()| true),
                Ok(false) => Ok(false),
                Err(e) => Err(e),
            };
            match result {
                Ok(true) => outcome.affected.push(file),
                Ok(false) => debug!(file = %file, from = %from, "No file to move"),
                Err(e) => {
                    warn!(file = %file, from = %from, to = %to, error = %e, "Failed to move file");
                    outcome
                        .warnings
                        .push(format!("Failed to move {file}: {}", e.message));
                }
            }
        }

        outcome
    }
}
