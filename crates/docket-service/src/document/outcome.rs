//! Results of mutating document operations.

use serde::{Deserialize, Serialize};

/// Result of a save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveOutcome {
    /// The canonical filename written.
    pub filename: String,
    /// The title that was written into the header.
    pub title: String,
    /// User-facing confirmation.
    pub message: String,
    /// Export failures that did not affect the save.
    pub warnings: Vec<String>,
}

/// Result of a delete, restore, or empty-trash operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationOutcome {
    /// User-facing confirmation.
    pub message: String,
    /// Files that were moved or removed.
    pub affected: Vec<String>,
    /// Per-file failures that did not abort the operation.
    pub warnings: Vec<String>,
}

impl OperationOutcome {
    /// An outcome with the given message and nothing recorded yet.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            affected: Vec::new(),
            warnings: Vec::new(),
        }
    }
}
