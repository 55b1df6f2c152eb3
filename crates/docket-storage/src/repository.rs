//! Document repository over a storage provider.
//!
//! Maps the two document folders onto provider paths and turns raw files
//! into [`ParsedDocument`]s and listing rows. Listing and counting are
//! pure queries; expiry is handled by the trash reaper in the service layer.

use std::sync::Arc;

use bytes::Bytes;
use tracing::warn;

use docket_core::config::StorageConfig;
use docket_core::result::AppResult;
use docket_core::traits::storage::{StorageObjectMeta, StorageProvider};
use docket_entity::document::{
    DocumentFormat, DocumentName, DocumentSummary, Location, ParsedDocument,
};

use crate::providers::LocalStorageProvider;

/// Access to the active and trash document folders.
#[derive(Debug, Clone)]
pub struct DocumentRepository {
    /// Backing storage.
    provider: Arc<dyn StorageProvider>,
    /// Folder name for active documents.
    documents_dir: String,
    /// Folder name for trashed documents.
    trash_dir: String,
}

impl DocumentRepository {
    /// Open the local repository described by the storage config,
    /// creating both folders if they are missing.
    pub async fn open(config: &StorageConfig) -> AppResult<Self> {
        let provider = LocalStorageProvider::new(config.root_path()).await?;
        let repo = Self::with_provider(
            Arc::new(provider),
            config.documents_dir.clone(),
            config.trash_dir.clone(),
        );
        repo.ensure_folders().await?;
        Ok(repo)
    }

    /// Build a repository over an existing provider.
    pub fn with_provider(
        provider: Arc<dyn StorageProvider>,
        documents_dir: String,
        trash_dir: String,
    ) -> Self {
        Self {
            provider,
            documents_dir,
            trash_dir,
        }
    }

    /// Create both folders.
    pub async fn ensure_folders(&self) -> AppResult<()> {
        self.provider.create_dir(&self.documents_dir).await?;
        self.provider.create_dir(&self.trash_dir).await
    }

    /// Whether the provider is reachable and both folders are present.
    pub async fn health_check(&self) -> AppResult<bool> {
        if !self.provider.health_check().await? {
            return Ok(false);
        }
        Ok(self.provider.exists(&self.documents_dir).await?
            && self.provider.exists(&self.trash_dir).await?)
    }

    /// Folder name backing a location.
    pub fn folder(&self, location: Location) -> &str {
        match location {
            Location::Active => &self.documents_dir,
            Location::Trash => &self.trash_dir,
        }
    }

    fn path(&self, location: Location, file: &str) -> String {
        format!("{}/{}", self.folder(location), file)
    }

    /// Every regular file in a folder, sorted by name.
    pub async fn entries(&self, location: Location) -> AppResult<Vec<StorageObjectMeta>> {
        let entries = self.provider.list(self.folder(location)).await?;
        Ok(entries.into_iter().filter(|e| !e.is_directory).collect())
    }

    /// Canonical `.txt` entries in a folder.
    pub async fn text_entries(&self, location: Location) -> AppResult<Vec<StorageObjectMeta>> {
        let entries = self.entries(location).await?;
        Ok(entries
            .into_iter()
            .filter(|e| DocumentFormat::from_filename(&e.name) == Some(DocumentFormat::Txt))
            .collect())
    }

    /// Listing rows for every document in a folder, newest filename first.
    ///
    /// Files that vanish or fail to read between listing and reading are
    /// skipped with a warning.
    pub async fn list(&self, location: Location) -> AppResult<Vec<DocumentSummary>> {
        let mut summaries = Vec::new();

        for entry in self.text_entries(location).await? {
            match self.provider.read_bytes(&entry.path).await {
                Ok(data) => {
                    let parsed = ParsedDocument::parse(&String::from_utf8_lossy(&data));
                    summaries.push(DocumentSummary::from_parsed(entry.name, &parsed));
                }
                Err(e) => {
                    warn!(path = %entry.path, error = %e, "Skipping unreadable document");
                }
            }
        }

        summaries.sort_by(|a, b| b.filename.cmp(&a.filename));
        Ok(summaries)
    }

    /// Number of documents in a folder.
    pub async fn count(&self, location: Location) -> AppResult<usize> {
        Ok(self.text_entries(location).await?.len())
    }

    /// Load and parse a document from a specific folder.
    pub async fn load(
        &self,
        location: Location,
        name: &DocumentName,
    ) -> AppResult<ParsedDocument> {
        let data = self.read_file(location, name.as_str()).await?;
        Ok(ParsedDocument::parse(&String::from_utf8_lossy(&data)))
    }

    /// Find which folder holds a document, checking active first.
    pub async fn locate(&self, name: &DocumentName) -> AppResult<Option<Location>> {
        self.locate_file(name.as_str()).await
    }

    /// Find which folder holds an arbitrary file, checking active first.
    pub async fn locate_file(&self, file: &str) -> AppResult<Option<Location>> {
        for location in [Location::Active, Location::Trash] {
            if self.exists(location, file).await? {
                return Ok(Some(location));
            }
        }
        Ok(None)
    }

    /// Read a file's raw bytes.
    pub async fn read_file(&self, location: Location, file: &str) -> AppResult<Bytes> {
        self.provider.read_bytes(&self.path(location, file)).await
    }

    /// Write a file, replacing any existing one.
    pub async fn write_file(&self, location: Location, file: &str, data: Bytes) -> AppResult<()> {
        self.provider.write(&self.path(location, file), data).await
    }

    /// Check whether a file exists in a folder.
    pub async fn exists(&self, location: Location, file: &str) -> AppResult<bool> {
        self.provider.exists(&self.path(location, file)).await
    }

    /// Move a file between folders, keeping its name.
    pub async fn move_file(&self, from: Location, to: Location, file: &str) -> AppResult<()> {
        self.provider
            .rename(&self.path(from, file), &self.path(to, file))
            .await
    }

    /// Delete a file. Missing files are not an error.
    pub async fn remove_file(&self, location: Location, file: &str) -> AppResult<()> {
        self.provider.delete(&self.path(location, file)).await
    }
}
