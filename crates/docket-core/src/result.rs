//! Convenience result type alias for Docket.

use crate::error::AppError;

/// A specialized `Result` type for Docket operations.
pub type AppResult<T> = Result<T, AppError>;
