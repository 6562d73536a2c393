//! generate command - Turn test output into a report

use std::path::Path;

use anyhow::{Context as _, Result};

use super::helpers::read_input;
use crate::cli::context::{Context, Reported};
use crate::pipeline::{require_input, GenerationFlow, Session};
use crate::ui::output;

/// Generate a report from `input` and print it or write it to `output_path`.
pub fn generate(ctx: &Context, input: &str, output_path: Option<&Path>) -> Result<()> {
    let config = ctx.load_config()?;
    let text = read_input(input)?;
    let notifier = ctx.notifier();
    require_input(&text, notifier.as_ref()).map_err(|e| Reported(e.to_string()))?;
    let flow = GenerationFlow::new(ctx.model_client(&config)?, notifier);

    let rt = tokio::runtime::Runtime::new()?;
    let mut session = Session::default();
    let report = rt
        .block_on(flow.run(&mut session, &text))
        .map_err(|e| Reported(e.to_string()))?;

    match output_path {
        Some(path) => {
            std::fs::write(path, format!("{}\n", report))
                .with_context(|| format!("Failed to write report to '{}'", path.display()))?;
            output::print(format!("Report written to {}", path.display()), ctx.verbosity());
        }
        None => output::result(report),
    }

    Ok(())
}
