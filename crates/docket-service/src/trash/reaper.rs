//! Permanent deletion of trashed documents past the retention window.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use docket_core::config::TrashConfig;
use docket_core::result::AppResult;
use docket_entity::document::{DocumentFormat, Location};
use docket_storage::DocumentRepository;

/// What a reaper pass removed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReapReport {
    /// Every expired `.txt` name, whether or not its deletion succeeded.
    pub expired: Vec<String>,
    /// Expired documents whose files are all gone.
    pub removed: Vec<String>,
    /// Per-file deletion failures.
    pub warnings: Vec<String>,
}

/// Deletes trash documents whose age in whole days exceeds the retention window.
///
/// Age is measured from the `.txt` file's modification time. The sibling
/// exports go with it.
#[derive(Debug, Clone)]
pub struct TrashReaper {
    /// Document repository.
    repo: Arc<DocumentRepository>,
    /// Retention window in days.
    retention_days: i64,
}

impl TrashReaper {
    /// Creates a new reaper.
    pub fn new(repo: Arc<DocumentRepository>, retention_days: i64) -> Self {
        Self {
            repo,
            retention_days,
        }
    }

    /// Creates a reaper from the `trash` configuration section.
    pub fn from_config(repo: Arc<DocumentRepository>, config: &TrashConfig) -> Self {
        Self::new(repo, config.retention_days)
    }

    /// Retention window in days.
    pub fn retention_days(&self) -> i64 {
        self.retention_days
    }

    /// Whether a file last modified at `modified` has expired at `now`.
    pub fn is_expired(&self, modified: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        (now - modified).num_days() > self.retention_days
    }

    /// Remove expired documents as of now.
    pub async fn reap_expired(&self) -> AppResult<ReapReport> {
        self.reap_at(Utc::now()).await
    }

    /// Remove documents expired as of `now`.
    ///
    /// Every trash `.txt` file counts, whatever its name looks like; the
    /// base name comes straight from the directory entry.
    pub async fn reap_at(&self, now: DateTime<Utc>) -> AppResult<ReapReport> {
        let mut report = ReapReport::default();

        for entry in self.repo.text_entries(Location::Trash).await? {
            let Some(modified) = entry.last_modified else {
                continue;
            };
            if !self.is_expired(modified, now) {
                continue;
            }
            let Some(base) = entry.name.strip_suffix(".txt") else {
                continue;
            };

            let mut failed = false;
            for format in DocumentFormat::ALL {
                let file = format!("{base}.{}", format.as_str());
                if let Err(e) = self.repo.remove_file(Location::Trash, &file).await {
                    warn!(file = %file, error = %e, "Failed to remove expired file");
                    report
                        .warnings
                        .push(format!("Failed to remove {file}: {}", e.message));
                    failed = true;
                }
            }
            if !failed {
                report.removed.push(entry.name.clone());
            }
            report.expired.push(entry.name);
        }

        if !report.removed.is_empty() {
            info!(
                removed = report.removed.len(),
                retention_days = self.retention_days,
                "Expired trash documents removed"
            );
        }

        Ok(report)
    }
}
