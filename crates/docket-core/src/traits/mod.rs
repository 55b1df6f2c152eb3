//! Core traits defined in `docket-core` and implemented by other crates.

pub mod credentials;
pub mod storage;

pub use credentials::CredentialVerifier;
pub use storage::{StorageObjectMeta, StorageProvider};
