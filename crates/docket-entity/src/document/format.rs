//! Document file format enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three file formats a document can be stored or exported as.
///
/// `Txt` is the canonical form; `Docx` and `Pdf` are sibling exports
/// sharing the same base name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    /// Canonical plain-text file with a tagged header.
    Txt,
    /// Word document export.
    Docx,
    /// PDF export.
    Pdf,
}

impl DocumentFormat {
    /// Every recognized format, canonical first.
    pub const ALL: [DocumentFormat; 3] = [Self::Txt, Self::Docx, Self::Pdf];

    /// Return the file extension without the leading dot.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Txt => "txt",
            Self::Docx => "docx",
            Self::Pdf => "pdf",
        }
    }

    /// MIME type used when serving the file as a download.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Txt => "text/plain; charset=utf-8",
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            Self::Pdf => "application/pdf",
        }
    }

    /// Detect the format from a filename's extension.
    pub fn from_filename(name: &str) -> Option<Self> {
        let (_, ext) = name.rsplit_once('.')?;
        ext.parse().ok()
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DocumentFormat {
    type Err = docket_core::AppError;

    /// Extensions are matched exactly; `PDF` is not a recognized format.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "txt" => Ok(Self::Txt),
            "docx" => Ok(Self::Docx),
            "pdf" => Ok(Self::Pdf),
            _ => Err(docket_core::AppError::validation(format!(
                "Invalid format: '{s}'. Expected one of: txt, docx, pdf"
            ))),
        }
    }
}
