//! cli::context
//!
//! Per-invocation context shared by command handlers.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context as _, Result};
use thiserror::Error;

use crate::ai::{GeminiClient, ModelClient};
use crate::core::config::Config;
use crate::core::types::JiraConfig;
use crate::store::{ConfigStore, CONFIG_KEY};
use crate::ui::notify::{ConsoleNotifier, Notifier};
use crate::ui::output::Verbosity;

/// A failure that was already shown to the user as a notice.
///
/// `main` exits non-zero without printing it again.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct Reported(pub String);

/// Execution context derived from global flags.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Explicit application config file.
    pub config_path: Option<PathBuf>,
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (minimal output).
    pub quiet: bool,
    /// Interactive mode allowed by flags and terminal.
    pub interactive: bool,
}

impl Context {
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }

    /// Load the application config.
    pub fn load_config(&self) -> Result<Config> {
        Config::load(self.config_path.as_deref()).context("Failed to load configuration")
    }

    /// Whether prompts and the editor may be used.
    pub fn interactive(&self, config: &Config) -> bool {
        self.interactive && config.interactive()
    }

    /// Open the store holding the Jira connection record.
    pub fn open_store(&self, config: &Config) -> Result<ConfigStore> {
        ConfigStore::open(config.store_path()).context("Failed to open settings store")
    }

    /// The stored Jira settings, or empty settings when none are stored.
    pub fn jira_config(&self, store: &ConfigStore) -> JiraConfig {
        store.load(CONFIG_KEY, JiraConfig::default())
    }

    pub fn notifier(&self) -> Arc<dyn Notifier> {
        Arc::new(ConsoleNotifier::new(self.verbosity()))
    }

    /// Build the language model client from config and environment.
    pub fn model_client(&self, config: &Config) -> Result<Arc<dyn ModelClient>> {
        let key_env = config.api_key_env();
        let api_key = match std::env::var(key_env) {
            Ok(key) if !key.trim().is_empty() => key,
            _ => bail!(
                "No language model API key found. Set the {} environment variable.",
                key_env
            ),
        };

        Ok(Arc::new(GeminiClient::new(
            config.ai_base_url(),
            config.model(),
            api_key,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::AiSettings;

    #[test]
    fn missing_api_key_names_the_variable() {
        let mut config = Config::default();
        config.file.ai = Some(AiSettings {
            api_key_env: Some("JPILOT_TEST_UNSET_KEY".to_string()),
            ..Default::default()
        });

        let err = Context::default()
            .model_client(&config)
            .err()
            .expect("expected an error");
        assert!(err.to_string().contains("JPILOT_TEST_UNSET_KEY"));
    }

    #[test]
    fn config_can_disable_interactive() {
        let ctx = Context {
            interactive: true,
            ..Default::default()
        };
        let mut config = Config::default();
        assert!(ctx.interactive(&config));

        config.file.interactive = Some(false);
        assert!(!ctx.interactive(&config));
    }
}
