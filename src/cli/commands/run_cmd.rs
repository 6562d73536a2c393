//! run command - Generate, review and submit in one go

use anyhow::Result;

use super::helpers::{read_input, review, submit_session};
use crate::cli::args::IssueArgs;
use crate::cli::context::{Context, Reported};
use crate::pipeline::{require_input, GenerationFlow, Session};
use crate::ui::{output, prompts};

/// Generate a report from `input`, let the user review it, then submit.
///
/// Without an interactive terminal the generated report is submitted as is.
pub fn run(ctx: &Context, input: &str, target: &IssueArgs) -> Result<()> {
    let config = ctx.load_config()?;
    let store = ctx.open_store(&config)?;
    let text = read_input(input)?;
    let notifier = ctx.notifier();
    require_input(&text, notifier.as_ref()).map_err(|e| Reported(e.to_string()))?;

    let rt = tokio::runtime::Runtime::new()?;
    let flow = GenerationFlow::new(ctx.model_client(&config)?, notifier);
    let mut session = Session::new(ctx.jira_config(&store));
    rt.block_on(flow.run(&mut session, &text))
        .map_err(|e| Reported(e.to_string()))?;

    if ctx.interactive(&config) {
        session = review(session)?;
        if !prompts::confirm("Submit this report to Jira?", true, true)? {
            output::print("Submission cancelled.", ctx.verbosity());
            return Ok(());
        }
    }

    submit_session(ctx, &config, &rt, session, target)
}
