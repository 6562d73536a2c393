//! config command - Show or update the stored Jira connection settings

use anyhow::{Context as _, Result};

use crate::cli::context::Context;
use crate::core::types::JiraConfig;
use crate::pipeline::{Event, Session};
use crate::store::CONFIG_KEY;
use crate::ui::notify::Notice;
use crate::ui::{output, prompts};

/// Fields given on the command line for `config set`.
#[derive(Debug, Clone, Default)]
pub struct ConfigUpdate {
    pub url: Option<String>,
    pub email: Option<String>,
    pub token: Option<String>,
    pub project: Option<String>,
}

/// Print the stored settings with the token masked.
pub fn show(ctx: &Context) -> Result<()> {
    let config = ctx.load_config()?;
    let store = ctx.open_store(&config)?;
    let jira = ctx.jira_config(&store);

    for line in describe(&jira) {
        output::result(line);
    }

    let missing = jira.missing_fields();
    if !missing.is_empty() {
        output::warn(
            format!("Jira settings are incomplete (missing: {})", missing.join(", ")),
            ctx.verbosity(),
        );
    }

    Ok(())
}

/// Merge the given fields into the stored settings and save them.
pub fn set(ctx: &Context, update: ConfigUpdate) -> Result<()> {
    let config = ctx.load_config()?;
    let store = ctx.open_store(&config)?;
    let stored = ctx.jira_config(&store);

    let mut update = update;
    if update.token.is_none() && stored.api_token.is_empty() && ctx.interactive(&config) {
        let token = prompts::password("Jira API token", true).context("Failed to read API token")?;
        update.token = Some(token);
    }

    let merged = apply_update(stored.clone(), update);
    let session = Session::new(stored).apply(Event::ConfigSaved(merged))?;
    store
        .save(CONFIG_KEY, &session.config)
        .context("Failed to save Jira settings")?;

    ctx.notifier().notify(Notice::info(
        "Jira Configuration Saved",
        "Your Jira connection settings have been updated.",
    ));

    let missing = session.config.missing_fields();
    if !missing.is_empty() {
        output::warn(
            format!("Jira settings are incomplete (missing: {})", missing.join(", ")),
            ctx.verbosity(),
        );
    }

    Ok(())
}

/// Overwrite the fields present in `update`.
fn apply_update(mut config: JiraConfig, update: ConfigUpdate) -> JiraConfig {
    if let Some(url) = update.url {
        config.url = url;
    }
    if let Some(email) = update.email {
        config.email = email;
    }
    if let Some(token) = update.token {
        config.api_token = token.trim().to_string();
    }
    if let Some(project) = update.project {
        config.project_key = project;
    }
    config
}

fn describe(config: &JiraConfig) -> Vec<String> {
    let or_unset = |value: &str| {
        if value.is_empty() {
            "(not set)".to_string()
        } else {
            value.to_string()
        }
    };

    vec![
        format!("url = {}", or_unset(&config.url)),
        format!("email = {}", or_unset(&config.email)),
        format!("apiToken = {}", or_unset(&config.masked_token())),
        format!("projectKey = {}", or_unset(&config.project_key)),
    ]
}
