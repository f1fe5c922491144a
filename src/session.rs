use std::collections::HashMap;
use std::sync::RwLock;

use uuid::Uuid;

/// Name of the cookie carrying the opaque session token.
pub const SESSION_COOKIE: &str = "session_token";

/// In-process session registry mapping an opaque token to the
/// authenticated username. A session begins at successful login and ends
/// at logout or process exit; there is no expiration policy.
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, String>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session for `username` and returns its token.
    pub fn create(&self, username: &str) -> String {
        let token = Uuid::new_v4().to_string();
        if let Ok(mut sessions) = self.sessions.write() {
            sessions.insert(token.clone(), username.to_string());
        }
        token
    }

    pub fn username_for(&self, token: &str) -> Option<String> {
        self.sessions.read().ok()?.get(token).cloned()
    }

    /// Clears a session. Clearing an absent token is not an error.
    pub fn clear(&self, token: &str) {
        if let Ok(mut sessions) = self.sessions.write() {
            sessions.remove(token);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_then_lookup_returns_username() {
        let store = SessionStore::new();
        let token = store.create("alice");
        assert_eq!(store.username_for(&token), Some("alice".to_string()));
    }

    #[test]
    fn unknown_token_resolves_to_none() {
        let store = SessionStore::new();
        assert_eq!(store.username_for("nope"), None);
    }

    #[test]
    fn clear_is_idempotent() {
        let store = SessionStore::new();
        let token = store.create("alice");
        store.clear(&token);
        store.clear(&token);
        assert_eq!(store.username_for(&token), None);
    }
}
