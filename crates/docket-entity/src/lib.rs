//! # docket-entity
//!
//! Domain models for Docket. Documents are flat text files; this crate
//! owns their naming rules, the tagged header format, and the value
//! objects passed between the storage, service and HTTP layers.

pub mod document;
