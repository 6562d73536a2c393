//! core::config
//!
//! Application configuration loading.
//!
//! # Precedence
//!
//! Values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Config file
//! 3. CLI flags (not handled here)
//!
//! # Config Locations
//!
//! Searched in order:
//! 1. `--config <path>` (must exist)
//! 2. `$JIRA_PILOT_CONFIG` if set
//! 3. `$XDG_CONFIG_HOME/jira-pilot/config.toml`
//! 4. `~/.jira-pilot/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use jira_pilot::core::config::Config;
//!
//! let config = Config::load(None).unwrap();
//! println!("model: {}", config.model());
//! println!("issue type: {}", config.issue_type());
//! ```

pub mod schema;

pub use schema::{AiSettings, AppConfig, JiraSettings, StoreSettings};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "JIRA_PILOT_CONFIG";

/// Default language model.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Default Gemini REST base URL.
pub const DEFAULT_AI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default environment variable holding the model API key.
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Default Jira issue type.
pub const DEFAULT_ISSUE_TYPE: &str = "Bug";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Loaded application configuration with defaults applied by accessors.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed file contents
    pub file: AppConfig,
    /// Path the file was loaded from, if any
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Otherwise the standard locations are
    /// searched and defaults are used when none exists.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read, parsed,
    /// or validated.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_from(path);
        }

        let candidates = candidate_paths(
            std::env::var_os(CONFIG_ENV).map(PathBuf::from),
            std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
            dirs::home_dir(),
        );

        match candidates.into_iter().find(|p| p.exists()) {
            Some(path) => Self::load_from(&path),
            None => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load and validate a specific config file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let file: AppConfig = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        file.validate()?;

        debug!(path = %path.display(), "config loaded");
        Ok(Self {
            file,
            path: Some(path.to_path_buf()),
        })
    }

    /// Path the configuration was loaded from.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Check if interactive mode is enabled by default.
    ///
    /// Defaults to `true` if not configured.
    pub fn interactive(&self) -> bool {
        self.file.interactive.unwrap_or(true)
    }

    /// Language model name.
    pub fn model(&self) -> &str {
        self.ai().and_then(|a| a.model.as_deref()).unwrap_or(DEFAULT_MODEL)
    }

    /// Language model API base URL.
    pub fn ai_base_url(&self) -> &str {
        self.ai()
            .and_then(|a| a.base_url.as_deref())
            .unwrap_or(DEFAULT_AI_BASE_URL)
    }

    /// Name of the environment variable holding the model API key.
    pub fn api_key_env(&self) -> &str {
        self.ai()
            .and_then(|a| a.api_key_env.as_deref())
            .unwrap_or(DEFAULT_API_KEY_ENV)
    }

    /// Default Jira issue type.
    pub fn issue_type(&self) -> &str {
        self.file
            .jira
            .as_ref()
            .and_then(|j| j.issue_type.as_deref())
            .unwrap_or(DEFAULT_ISSUE_TYPE)
    }

    /// Configured store path, if overridden.
    pub fn store_path(&self) -> Option<PathBuf> {
        self.file.store.as_ref().and_then(|s| s.path.clone())
    }

    fn ai(&self) -> Option<&AiSettings> {
        self.file.ai.as_ref()
    }
}

/// Standard config locations in search order.
fn candidate_paths(
    env_path: Option<PathBuf>,
    xdg_home: Option<PathBuf>,
    home: Option<PathBuf>,
) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(path) = env_path {
        paths.push(path);
    }
    if let Some(xdg) = xdg_home {
        paths.push(xdg.join("jira-pilot/config.toml"));
    }
    if let Some(home) = home {
        paths.push(home.join(".jira-pilot/config.toml"));
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_when_empty() {
        let config = Config::default();
        assert_eq!(config.model(), DEFAULT_MODEL);
        assert_eq!(config.ai_base_url(), DEFAULT_AI_BASE_URL);
        assert_eq!(config.api_key_env(), "GEMINI_API_KEY");
        assert_eq!(config.issue_type(), "Bug");
        assert!(config.interactive());
        assert!(config.store_path().is_none());
        assert!(config.loaded_from().is_none());
    }

    #[test]
    fn load_explicit_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[jira]\nissue_type = \"Task\"\n[ai]\nmodel = \"m\"\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();

        assert_eq!(config.issue_type(), "Task");
        assert_eq!(config.model(), "m");
        assert_eq!(config.loaded_from(), Some(path.as_path()));
    }

    #[test]
    fn explicit_missing_path_is_error() {
        let temp = TempDir::new().unwrap();
        let result = Config::load(Some(&temp.path().join("nope.toml")));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn parse_error_names_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[ai\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn invalid_value_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[ai]\nbase_url = \"localhost\"\n").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::InvalidValue(_))
        ));
    }

    #[test]
    fn candidate_order() {
        let paths = candidate_paths(
            Some(PathBuf::from("/env/config.toml")),
            Some(PathBuf::from("/xdg")),
            Some(PathBuf::from("/home/me")),
        );
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/env/config.toml"),
                PathBuf::from("/xdg/jira-pilot/config.toml"),
                PathBuf::from("/home/me/.jira-pilot/config.toml"),
            ]
        );
    }

    #[test]
    fn candidate_paths_skip_unset() {
        let paths = candidate_paths(None, None, Some(PathBuf::from("/home/me")));
        assert_eq!(paths, vec![PathBuf::from("/home/me/.jira-pilot/config.toml")]);
    }
}
