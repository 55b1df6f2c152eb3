//! # docket-storage
//!
//! Storage for Docket. A [`StorageProvider`](docket_core::traits::StorageProvider)
//! backed by the local filesystem, and the [`DocumentRepository`] that maps
//! documents and their folders onto it.

pub mod providers;
pub mod repository;

pub use repository::DocumentRepository;
