//! # docket-service
//!
//! Business logic service layer for Docket. Each service orchestrates the
//! [`DocumentRepository`](docket_storage::DocumentRepository) to implement an
//! application-level use case.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references. Sub-operation failures that
//! must not abort a use case are collected as warnings on the outcome.

pub mod context;
pub mod document;
pub mod export;
pub mod trash;

pub use context::RequestContext;
pub use document::{
    DocumentService, DocumentWriter, DownloadService, LifecycleService, SaveRequest,
};
pub use export::{DocxExporter, Exporter, PdfExporter};
pub use trash::{ReapReport, TrashReaper};
