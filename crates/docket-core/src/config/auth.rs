//! Authentication configuration.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Credential table checked at login.
///
/// Passwords are stored and compared in plain text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Username → password.
    #[serde(default = "default_users")]
    pub users: HashMap<String, String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            users: default_users(),
        }
    }
}

fn default_users() -> HashMap<String, String> {
    let mut map = HashMap::new();
    map.insert("admin".to_string(), "admin123".to_string());
    map.insert("user".to_string(), "user321".to_string());
    map
}
