//! Document use cases: listing, editing, saving, moving, and downloading.

pub mod download;
pub mod lifecycle;
pub mod outcome;
pub mod service;
pub mod writer;

pub use download::{DownloadResult, DownloadService};
pub use lifecycle::LifecycleService;
pub use outcome::{OperationOutcome, SaveOutcome};
pub use service::{DocumentService, EditorDocument};
pub use writer::{DocumentWriter, SaveRequest};
