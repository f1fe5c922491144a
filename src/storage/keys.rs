use std::fs;
use std::path::{Path, PathBuf};

use crate::models::ApiKeyConfig;
use crate::utils::AppError;

pub const API_KEYS_FILE: &str = "api_keys.json";

/// Flat-file store for the single global provider-key record. Same
/// whole-document read/write pattern as [`super::UserStore`], but always
/// one record rather than a collection.
#[derive(Clone)]
pub struct ApiKeyStore {
    path: PathBuf,
}

impl ApiKeyStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(API_KEYS_FILE),
        }
    }

    /// Returns the key record, initializing empty defaults on first access.
    pub fn load(&self) -> Result<ApiKeyConfig, AppError> {
        if !self.path.exists() {
            let defaults = ApiKeyConfig::default();
            self.write(&defaults)?;
            return Ok(defaults);
        }

        let raw = fs::read_to_string(&self.path).map_err(|e| {
            AppError::Storage(format!("failed to read {}: {}", self.path.display(), e))
        })?;

        serde_json::from_str(&raw).map_err(|e| {
            AppError::Storage(format!(
                "api key store unreadable ({}): {}",
                self.path.display(),
                e
            ))
        })
    }

    /// Overwrites both keys wholesale.
    pub fn save(&self, news_api_key: &str, market_data_api_key: &str) -> Result<(), AppError> {
        self.write(&ApiKeyConfig {
            news_api_key: news_api_key.to_string(),
            market_data_api_key: market_data_api_key.to_string(),
        })
    }

    fn write(&self, config: &ApiKeyConfig) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::Storage(format!("failed to create {}: {}", parent.display(), e))
            })?;
        }

        let raw = serde_json::to_string(config)
            .map_err(|e| AppError::Storage(format!("failed to encode api keys: {}", e)))?;

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

    fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("insight-keys-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    #[test]
    fn missing_file_initializes_empty_keys() {
        let store = ApiKeyStore::new(&temp_dir());
        let config = store.load().expect("load");
        assert_eq!(config, ApiKeyConfig::default());
        assert!(store.path().exists());
    }

    #[test]
    fn save_then_load_returns_exactly_what_was_saved() {
        let store = ApiKeyStore::new(&temp_dir());
        store.save("news-key-a", "market-key-b").expect("save");

        let config = store.load().expect("load");
        assert_eq!(config.news_api_key, "news-key-a");
        assert_eq!(config.market_data_api_key, "market-key-b");
    }

    #[test]
    fn on_disk_document_uses_legacy_field_names() {
        let store = ApiKeyStore::new(&temp_dir());
        store.save("a", "b").expect("save");

        let raw = fs::read_to_string(store.path()).expect("read raw");
        assert!(raw.contains("\"newsapi_key\""));
        assert!(raw.contains("\"coinmarketcap_key\""));
    }

    #[test]
    fn malformed_file_surfaces_storage_error() {
        let dir = temp_dir();
        let store = ApiKeyStore::new(&dir);
        fs::write(dir.join(API_KEYS_FILE), "{\"newsapi_key\": 42}").expect("write garbage");

        assert!(matches!(store.load(), Err(AppError::Storage(_))));
    }
}
