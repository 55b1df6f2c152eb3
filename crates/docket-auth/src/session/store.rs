//! In-memory session store.

use std::sync::Arc;

use chrono::Utc;
use dashmap::DashMap;
use tracing::debug;
use uuid::Uuid;

use super::model::Session;

/// Concurrent map of session token → [`Session`].
///
/// Cloning is cheap; clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    /// Active sessions keyed by token.
    sessions: Arc<DashMap<String, Session>>,
}

impl SessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a session for a user and return it.
    pub fn create(&self, username: &str) -> Session {
        let session = Session {
            token: Uuid::new_v4().simple().to_string(),
            username: username.to_string(),
            created_at: Utc::now(),
            flash: None,
        };
        self.sessions.insert(session.token.clone(), session.clone());
        debug!(username, "Session created");
        session
    }

    /// Open a fresh session, dropping the caller's previous one.
    pub fn renew(&self, previous: Option<&str>, username: &str) -> Session {
        if let Some(token) = previous {
            self.remove(token);
        }
        self.create(username)
    }

    /// Look up a session by token.
    pub fn get(&self, token: &str) -> Option<Session> {
        self.sessions.get(token).map(|entry| entry.value().clone())
    }

    /// Username behind a token, if the session exists.
    pub fn username(&self, token: &str) -> Option<String> {
        self.sessions
            .get(token)
            .map(|entry| entry.value().username.clone())
    }

    /// Remove a session. Returns the removed record, if any.
    pub fn remove(&self, token: &str) -> Option<Session> {
        let removed = self.sessions.remove(token).map(|(_, session)| session);
        if let Some(session) = &removed {
            debug!(username = %session.username, "Session removed");
        }
        removed
    }

    /// Queue a flash message for the session's next page.
    pub fn set_flash(&self, token: &str, message: impl Into<String>) {
        if let Some(mut entry) = self.sessions.get_mut(token) {
            entry.flash = Some(message.into());
        }
    }

    /// Take the pending flash message, clearing it.
    pub fn take_flash(&self, token: &str) -> Option<String> {
        self.sessions
            .get_mut(token)
            .and_then(|mut entry| entry.flash.take())
    }

    /// Number of open sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no sessions are open.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
