//! Document folder layout configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where documents live on disk.
///
/// Both folders are resolved relative to `data_root`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory for all runtime data.
    #[serde(default = "default_data_root")]
    pub data_root: String,
    /// Folder holding active documents.
    #[serde(default = "default_documents_dir")]
    pub documents_dir: String,
    /// Folder holding trashed documents.
    #[serde(default = "default_trash_dir")]
    pub trash_dir: String,
}

impl StorageConfig {
    /// Absolute-or-relative path of the data root.
    pub fn root_path(&self) -> PathBuf {
        PathBuf::from(&self.data_root)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_root: default_data_root(),
            documents_dir: default_documents_dir(),
            trash_dir: default_trash_dir(),
        }
    }
}

fn default_data_root() -> String {
    "./data".to_string()
}

fn default_documents_dir() -> String {
    "documents".to_string()
}

fn default_trash_dir() -> String {
    "trash".to_string()
}
