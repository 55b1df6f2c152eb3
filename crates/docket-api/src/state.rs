//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use docket_auth::SessionStore;
use docket_core::config::AppConfig;
use docket_core::result::AppResult;
use docket_core::traits::CredentialVerifier;
use docket_service::export::enabled_exporters;
use docket_service::{
    DocumentService, DocumentWriter, DownloadService, LifecycleService, TrashReaper,
};
use docket_storage::DocumentRepository;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Auth ─────────────────────────────────────────────────
    /// Credential table checked at login
    pub credentials: Arc<dyn CredentialVerifier>,
    /// Cookie session store
    pub sessions: SessionStore,

    // ── Storage ──────────────────────────────────────────────
    /// Document repository
    pub repo: Arc<DocumentRepository>,

    // ── Services ─────────────────────────────────────────────
    /// Listing and editor lookups
    pub documents: Arc<DocumentService>,
    /// Save with exports
    pub writer: Arc<DocumentWriter>,
    /// Trash moves and emptying
    pub lifecycle: Arc<LifecycleService>,
    /// Downloads
    pub downloads: Arc<DownloadService>,
    /// Trash expiry
    pub reaper: Arc<TrashReaper>,
}

impl AppState {
    /// Open storage and wire every service from configuration.
    pub async fn new(
        config: AppConfig,
        credentials: Arc<dyn CredentialVerifier>,
    ) -> AppResult<Self> {
        let repo = Arc::new(DocumentRepository::open(&config.storage).await?);
        let reaper = Arc::new(TrashReaper::from_config(Arc::clone(&repo), &config.trash));

        let documents = Arc::new(DocumentService::new(Arc::clone(&repo), Arc::clone(&reaper)));
        let writer = Arc::new(DocumentWriter::new(
            Arc::clone(&repo),
            enabled_exporters(&config.export),
        ));
        let lifecycle = Arc::new(LifecycleService::new(Arc::clone(&repo)));
        let downloads = Arc::new(DownloadService::new(Arc::clone(&repo)));

        Ok(Self {
            config: Arc::new(config),
            credentials,
            sessions: SessionStore::new(),
            repo,
            documents,
            writer,
            lifecycle,
            downloads,
            reaper,
        })
    }
}
