//! Session record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A logged-in browser session.
///
/// Created on login and removed on logout. Sessions do not expire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Opaque random token stored in the session cookie.
    pub token: String,
    /// The authenticated username.
    pub username: String,
    /// When the session was created (login time).
    pub created_at: DateTime<Utc>,
    /// Message shown once on the next rendered page.
    pub flash: Option<String>,
}
