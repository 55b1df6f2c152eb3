//! Response DTOs.

use serde::{Deserialize, Serialize};

use docket_service::document::{OperationOutcome, SaveOutcome};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Save response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveResponse {
    /// Always `true`; failures use the error body.
    pub success: bool,
    /// Filename written.
    pub filename: String,
    /// Confirmation message.
    pub message: String,
    /// Export failures.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl From<SaveOutcome> for SaveResponse {
    fn from(outcome: SaveOutcome) -> Self {
        Self {
            success: true,
            filename: outcome.filename,
            message: outcome.message,
            warnings: outcome.warnings,
        }
    }
}

/// Delete, restore, and empty-trash response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResponse {
    /// Always `true`; failures use the error body.
    pub success: bool,
    /// Confirmation message.
    pub message: String,
    /// Per-file failures.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl From<OperationOutcome> for ActionResponse {
    fn from(outcome: OperationOutcome) -> Self {
        Self {
            success: true,
            message: outcome.message,
            warnings: outcome.warnings,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}
