//! Static credential table.

use std::collections::HashMap;

use docket_core::config::AuthConfig;
use docket_core::traits::CredentialVerifier;

/// Username/password pairs held in memory and compared in plain text.
#[derive(Debug, Clone)]
pub struct StaticCredentialStore {
    /// Username → password.
    users: HashMap<String, String>,
}

impl StaticCredentialStore {
    /// Build a store from an explicit table.
    pub fn new(users: HashMap<String, String>) -> Self {
        Self { users }
    }

    /// Build a store from the `auth` configuration section.
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.users.clone())
    }

    /// Number of registered users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for StaticCredentialStore {
    fn default() -> Self {
        Self::from_config(&AuthConfig::default())
    }
}

impl CredentialVerifier for StaticCredentialStore {
    fn verify(&self, username: &str, password: &str) -> bool {
        if username.is_empty() {
            return false;
        }
        self.users
            .get(username)
            .is_some_and(|expected| expected == password)
    }
}
