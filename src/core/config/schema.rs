//! core::config::schema
//!
//! Application configuration schema.
//!
//! # Validation
//!
//! Values are validated after parsing (e.g., base URLs must be http(s),
//! names must not be blank).

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Application configuration (user scope).
///
/// This is tool configuration, not the Jira connection record; the latter
/// lives in the [`crate::store`] and is edited with `jpilot config set`.
///
/// # Example
///
/// ```toml
/// interactive = true
///
/// [ai]
/// model = "gemini-2.0-flash"
/// api_key_env = "GEMINI_API_KEY"
///
/// [jira]
/// issue_type = "Bug"
///
/// [store]
/// path = "/home/me/.jira-pilot/store.toml"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Default interactive mode
    pub interactive: Option<bool>,

    /// Language-model settings
    pub ai: Option<AiSettings>,

    /// Jira submission defaults
    pub jira: Option<JiraSettings>,

    /// Persistence settings
    pub store: Option<StoreSettings>,
}

impl AppConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ai) = &self.ai {
            ai.validate()?;
        }
        if let Some(jira) = &self.jira {
            if let Some(issue_type) = &jira.issue_type {
                if issue_type.trim().is_empty() {
                    return Err(ConfigError::InvalidValue(
                        "jira.issue_type must not be empty".into(),
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Language-model settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AiSettings {
    /// Model name, e.g. "gemini-2.0-flash"
    pub model: Option<String>,

    /// API base URL (override for proxies and tests)
    pub base_url: Option<String>,

    /// Environment variable holding the API key
    pub api_key_env: Option<String>,
}

impl AiSettings {
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(model) = &self.model {
            if model.trim().is_empty() {
                return Err(ConfigError::InvalidValue("ai.model must not be empty".into()));
            }
        }
        if let Some(base_url) = &self.base_url {
            if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
                return Err(ConfigError::InvalidValue(format!(
                    "ai.base_url must be an http(s) URL, got '{}'",
                    base_url
                )));
            }
        }
        if let Some(env) = &self.api_key_env {
            if env.trim().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "ai.api_key_env must not be empty".into(),
                ));
            }
        }
        Ok(())
    }
}

/// Jira submission defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct JiraSettings {
    /// Issue type name used when none is given on the command line
    pub issue_type: Option<String>,
}

/// Persistence settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct StoreSettings {
    /// Path of the key-value store file
    pub path: Option<std::path::PathBuf>,
}
