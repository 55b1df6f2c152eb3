//! Secondary-format export configuration.

use serde::{Deserialize, Serialize};

/// Toggles for the sibling export files written on save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Write a `.docx` copy on save.
    #[serde(default = "default_true")]
    pub docx_enabled: bool,
    /// Write a `.pdf` copy on save.
    #[serde(default = "default_true")]
    pub pdf_enabled: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            docx_enabled: true,
            pdf_enabled: true,
        }
    }
}

fn default_true() -> bool {
    true
}
