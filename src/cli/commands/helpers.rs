//! helpers - Shared helpers for the report commands
//!
//! # Key Functions
//!
//! - `read_input` - Reads test output from a file or stdin
//! - `report_text` - Normalizes report text read from a file or the editor
//! - `review` - Opens the session's report in the editor
//! - `submit_session` - Runs the submission pipeline against Jira

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use tokio::runtime::Runtime;
use tracing::debug;

use crate::cli::args::IssueArgs;
use crate::cli::context::{Context, Reported};
use crate::core::config::Config;
use crate::jira::JiraClient;
use crate::pipeline::{Event, Session, SubmissionPipeline};
use crate::ui::{output, prompts};

/// Read text from `source`, where `-` means stdin.
pub fn read_input(source: &str) -> Result<String> {
    if source == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read test output from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(Path::new(source))
            .with_context(|| format!("Failed to read '{}'", source))
    }
}

/// Report text as it should be submitted.
///
/// Trailing whitespace (the newline `generate --output` and editors append)
/// is not part of the report.
pub fn report_text(raw: &str) -> String {
    raw.trim_end().to_string()
}

/// Let the user edit the report before submission.
pub fn review(session: Session) -> Result<Session> {
    let edited = prompts::edit(&session.report, true).context("Failed to edit report")?;
    let edited = report_text(&edited);
    debug!(chars = edited.chars().count(), "report edited");
    Ok(session.apply(Event::ReportEdited(edited))?)
}

/// Submit the session's report and print the created issue.
pub fn submit_session(
    ctx: &Context,
    config: &Config,
    rt: &Runtime,
    mut session: Session,
    target: &IssueArgs,
) -> Result<()> {
    let model = ctx.model_client(config)?;
    let issue_type = target
        .issue_type
        .clone()
        .unwrap_or_else(|| config.issue_type().to_string());

    let pipeline = SubmissionPipeline::new(model, Arc::new(JiraClient::new()), ctx.notifier())
        .with_issue_type(issue_type);

    let submitted = rt
        .block_on(pipeline.submit(&mut session))
        .map_err(|e| Reported(e.to_string()))?;

    output::result(format!("{} {}", submitted.issue.key, submitted.link));

    if target.open {
        if let Err(e) = open::that(&submitted.link) {
            output::warn(
                format!("Could not open browser: {}", e),
                ctx.verbosity(),
            );
        }
    }

    Ok(())
}
