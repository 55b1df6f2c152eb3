//! Request context carrying the authenticated user.

use serde::{Deserialize, Serialize};

/// Context for the current authenticated request.
///
/// Built by the HTTP layer from the session and passed into mutating
/// service methods so every operation knows *who* is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated username.
    pub username: String,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}
