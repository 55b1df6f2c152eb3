//! Canonical document filenames.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use docket_core::{AppError, AppResult};

use super::format::DocumentFormat;

/// Extension of the canonical text file, including the dot.
const TXT_SUFFIX: &str = ".txt";

/// The canonical `.txt` filename identifying a document.
///
/// Sibling export files are derived from [`DocumentName::base`]. A name is
/// always a single path component so it can never escape its folder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentName(String);

impl DocumentName {
    /// Validate a user-supplied filename.
    ///
    /// A name without the `.txt` extension is treated as a base name and
    /// gets `.txt` appended.
    pub fn parse(raw: &str) -> AppResult<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(AppError::validation("Document name must not be empty"));
        }
        if raw.contains(['/', '\\', '\0']) || raw.contains("..") {
            return Err(AppError::validation(format!(
                "Invalid document name: '{raw}'"
            )));
        }

        let name = if raw.ends_with(TXT_SUFFIX) {
            raw.to_string()
        } else {
            format!("{raw}{TXT_SUFFIX}")
        };

        if name.len() == TXT_SUFFIX.len() {
            return Err(AppError::validation("Document name must not be empty"));
        }

        Ok(Self(name))
    }

    /// Generate a timestamped name from the current local time.
    pub fn generate() -> Self {
        Self::generate_at(Local::now().naive_local())
    }

    /// Generate `document_YYYYMMDD_HHMMSS.txt` for the given instant.
    pub fn generate_at(at: NaiveDateTime) -> Self {
        Self(at.format("document_%Y%m%d_%H%M%S.txt").to_string())
    }

    /// The full `.txt` filename.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The filename without its `.txt` extension.
    pub fn base(&self) -> &str {
        self.0.strip_suffix(TXT_SUFFIX).unwrap_or(&self.0)
    }

    /// The sibling filename for the given format.
    pub fn with_format(&self, format: DocumentFormat) -> String {
        format!("{}.{}", self.base(), format.as_str())
    }
}

impl fmt::Display for DocumentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for DocumentName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
