//! Document location enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which folder a document currently lives in.
///
/// A document is in exactly one location; moving between them is a rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    /// The active documents folder.
    Active,
    /// The trash folder, pending restore or expiry.
    Trash,
}

impl Location {
    /// Return the location as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Trash => "trash",
        }
    }

    /// Interpret the editor's `folder` form field.
    ///
    /// `trash` selects the trash folder; anything else is active.
    pub fn from_form_value(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("trash") => Self::Trash,
            _ => Self::Active,
        }
    }

    /// The value the editor posts back for this location.
    pub fn form_value(&self) -> &'static str {
        match self {
            Self::Active => "documents",
            Self::Trash => "trash",
        }
    }

    /// Return `true` for the trash folder.
    pub fn is_trash(&self) -> bool {
        matches!(self, Self::Trash)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
