//! Trash expiry job.

use std::sync::Arc;

use tracing;

use docket_core::result::AppResult;
use docket_service::trash::{ReapReport, TrashReaper};

/// Runs a reaper pass and logs the result.
#[derive(Debug, Clone)]
pub struct TrashReapJob {
    /// The reaper shared with the HTTP layer.
    reaper: Arc<TrashReaper>,
}

impl TrashReapJob {
    /// Create a new trash reap job
    pub fn new(reaper: Arc<TrashReaper>) -> Self {
        Self { reaper }
    }

    /// Execute one pass
    pub async fn run(&self) -> AppResult<ReapReport> {
        tracing::debug!("Running trash reaper");

        let report = self.reaper.reap_expired().await?;

        for warning in &report.warnings {
            tracing::warn!(warning = %warning, "Trash reaper warning");
        }
        tracing::debug!(
            removed = report.removed.len(),
            warnings = report.warnings.len(),
            "Trash reaper finished"
        );

        Ok(report)
    }
}
