//! # docket-core
//!
//! Core crate for Docket. Contains the storage and credential traits,
//! configuration schemas, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Docket crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
