//! cli::commands::submit
//!
//! Submit a report file to Jira.
//!
//! # Algorithm
//!
//! 1. Load the stored Jira settings
//! 2. Read the report, optionally edit it in `$EDITOR`
//! 3. Summarize, truncate and create the issue
//! 4. Print `<KEY> <link>`, optionally open the link
//!
//! # Example
//!
//! ```bash
//! jpilot submit --report report.md --edit --open
//! ```

use std::path::Path;

use anyhow::{bail, Context as _, Result};

use super::helpers::{report_text, review, submit_session};
use crate::cli::args::IssueArgs;
use crate::cli::context::Context;
use crate::pipeline::Session;

/// Submit the report at `report_path`.
pub fn submit(ctx: &Context, report_path: &Path, target: &IssueArgs, edit: bool) -> Result<()> {
    let config = ctx.load_config()?;
    let store = ctx.open_store(&config)?;

    let raw = std::fs::read_to_string(report_path)
        .with_context(|| format!("Failed to read report '{}'", report_path.display()))?;
    let mut session = Session::new(ctx.jira_config(&store)).with_report(report_text(&raw));

    if edit {
        if !ctx.interactive(&config) {
            bail!("--edit requires an interactive terminal");
        }
        session = review(session)?;
    }

    let rt = tokio::runtime::Runtime::new()?;
    submit_session(ctx, &config, &rt, session, target)
}
