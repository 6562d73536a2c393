//! store
//!
//! Persistence for the Jira connection record.
//!
//! # Architecture
//!
//! Raw text is kept behind the [`KvStore`] trait:
//!
//! - [`FileKvStore`]: `~/.jira-pilot/store.toml` (default)
//! - [`MemoryKvStore`]: process-local, used by tests
//!
//! [`ConfigStore`] sits on top and maps a named record to a typed value
//! encoded as JSON. Loading fails soft: a missing key, an unreadable store or
//! a malformed record all yield the caller's default.
//!
//! # Example
//!
//! ```no_run
//! use jira_pilot::core::types::JiraConfig;
//! use jira_pilot::store::{ConfigStore, CONFIG_KEY};
//!
//! let store = ConfigStore::open(None).unwrap();
//! let config: JiraConfig = store.load(CONFIG_KEY, JiraConfig::default());
//! store.save(CONFIG_KEY, &config).unwrap();
//! ```

mod file_store;
mod memory;
mod traits;

pub use file_store::FileKvStore;
pub use memory::MemoryKvStore;
pub use traits::{KvStore, StoreError};

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

/// Name of the record holding the Jira connection settings.
pub const CONFIG_KEY: &str = "jiraPilotConfig";

/// Typed access to named records in a [`KvStore`].
pub struct ConfigStore {
    backend: Box<dyn KvStore>,
}

impl ConfigStore {
    /// Wrap an existing backend.
    pub fn new(backend: impl KvStore + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// Open the file-backed store, at `path` or the default location.
    pub fn open(path: Option<PathBuf>) -> Result<Self, StoreError> {
        let backend = match path {
            Some(path) => FileKvStore::with_path(path),
            None => FileKvStore::new()?,
        };
        Ok(Self::new(backend))
    }

    /// Load the record under `key`, or `default` when it is absent or unusable.
    ///
    /// Never fails: read and parse errors are logged and swallowed.
    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let raw = match self.backend.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key, "no stored record, using default");
                return default;
            }
            Err(e) => {
                warn!(key, error = %e, "store unreadable, using default");
                return default;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "stored record is malformed, using default");
                default
            }
        }
    }

    /// Overwrite the record under `key` with `value`.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value).map_err(|e| StoreError::EncodeError {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        self.backend.set(key, &raw)?;
        debug!(key, "record saved");
        Ok(())
    }
}

impl std::fmt::Debug for ConfigStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigStore").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::JiraConfig;

    fn sample() -> JiraConfig {
        JiraConfig {
            url: "https://acme.atlassian.net".into(),
            email: "qa@acme.test".into(),
            api_token: "tok-123".into(),
            project_key: "PROJ".into(),
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = ConfigStore::new(MemoryKvStore::new());

        store.save(CONFIG_KEY, &sample()).unwrap();

        assert_eq!(store.load(CONFIG_KEY, JiraConfig::default()), sample());
    }

    #[test]
    fn missing_key_returns_default() {
        let store = ConfigStore::new(MemoryKvStore::new());
        let default = JiraConfig {
            project_key: "DFLT".into(),
            ..JiraConfig::default()
        };

        assert_eq!(store.load("never-saved", default.clone()), default);
    }

    #[test]
    fn malformed_record_returns_default() {
        let backend = MemoryKvStore::new();
        backend.set(CONFIG_KEY, "{not json").unwrap();
        let store = ConfigStore::new(backend);

        assert_eq!(
            store.load(CONFIG_KEY, JiraConfig::default()),
            JiraConfig::default()
        );
    }

    #[test]
    fn wrong_shape_returns_default() {
        let backend = MemoryKvStore::new();
        backend.set(CONFIG_KEY, "[1, 2, 3]").unwrap();
        let store = ConfigStore::new(backend);

        assert_eq!(store.load(CONFIG_KEY, sample()), sample());
    }

    #[test]
    fn record_uses_camel_case_fields() {
        let backend = MemoryKvStore::new();
        let store = ConfigStore::new(backend.clone());

        store.save(CONFIG_KEY, &sample()).unwrap();

        let raw = backend.get(CONFIG_KEY).unwrap().unwrap();
        assert!(raw.contains("\"apiToken\""));
        assert!(raw.contains("\"projectKey\""));
    }

    #[test]
    fn unreadable_file_store_returns_default() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("store.toml");
        std::fs::write(&path, "not = [valid").unwrap();
        let store = ConfigStore::open(Some(path)).unwrap();

        assert_eq!(store.load(CONFIG_KEY, sample()), sample());
    }
}
