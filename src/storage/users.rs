use std::fs;
use std::path::{Path, PathBuf};

use crate::models::UserRegistry;
use crate::utils::AppError;

pub const USERS_FILE: &str = "users.json";

/// Flat-file user registry. The whole document is read and rewritten on
/// every operation; there is no locking, so concurrent writers can lose
/// updates (last writer wins).
#[derive(Clone)]
pub struct UserStore {
    path: PathBuf,
}

impl UserStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(USERS_FILE),
        }
    }

    /// Returns the full user list. A missing file is initialized to an
    /// empty registry; an existing but malformed file is a distinct
    /// "store unreadable" failure, never an opaque crash.
    pub fn load(&self) -> Result<UserRegistry, AppError> {
        if !self.path.exists() {
            let empty = UserRegistry::default();
            self.save(&empty)?;
            return Ok(empty);
        }

        let raw = fs::read_to_string(&self.path).map_err(|e| {
            AppError::Storage(format!("failed to read {}: {}", self.path.display(), e))
        })?;

        serde_json::from_str(&raw).map_err(|e| {
            AppError::Storage(format!("user store unreadable ({}): {}", self.path.display(), e))
        })
    }

    /// Overwrites the whole document. Atomic in intent only.
    pub fn save(&self, registry: &UserRegistry) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::Storage(format!("failed to create {}: {}", parent.display(), e))
            })?;
        }

        let raw = serde_json::to_string(registry)
            .map_err(|e| AppError::Storage(format!("failed to encode user registry: {}", e)))?;

        fs::write(&self.path, raw).map_err(|e| {
            AppError::Storage(format!("failed to write {}: {}", self.path.display(), e))
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;

    fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("insight-users-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    #[test]
    fn missing_file_initializes_empty_registry() {
        let store = UserStore::new(&temp_dir());
        let registry = store.load().expect("load");
        assert!(registry.users.is_empty());
        assert!(store.path().exists());
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = UserStore::new(&temp_dir());
        let mut registry = store.load().expect("load");
        registry.users.push(User {
            username: "alice".to_string(),
            password_hash: "$2b$12$abcdefghijklmnopqrstuv".to_string(),
        });
        store.save(&registry).expect("save");

        let reloaded = store.load().expect("reload");
        assert_eq!(reloaded.users.len(), 1);
        assert_eq!(reloaded.users[0].username, "alice");
    }

    #[test]
    fn hash_is_persisted_under_legacy_password_field() {
        let store = UserStore::new(&temp_dir());
        let mut registry = store.load().expect("load");
        registry.users.push(User {
            username: "alice".to_string(),
            password_hash: "hashvalue".to_string(),
        });
        store.save(&registry).expect("save");

        let raw = fs::read_to_string(store.path()).expect("read raw");
        assert!(raw.contains("\"password\""));
        assert!(!raw.contains("password_hash"));
    }

    #[test]
    fn malformed_file_surfaces_storage_error() {
        let dir = temp_dir();
        let store = UserStore::new(&dir);
        fs::write(dir.join(USERS_FILE), "not json at all").expect("write garbage");

        match store.load() {
            Err(AppError::Storage(msg)) => assert!(msg.contains("unreadable")),
            other => panic!("expected storage error, got {:?}", other.map(|r| r.users.len())),
        }
    }
}
