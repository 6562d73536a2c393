//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Loads the application config and the stored Jira settings
//! 2. Runs a pipeline flow
//! 3. Formats and displays output
//!
//! # Async Commands
//!
//! Commands that call the language model or Jira are async underneath.
//! Each handler creates a tokio runtime and blocks on the flow.

mod completion;
mod config_cmd;
mod generate;
mod helpers;
mod run_cmd;
mod submit;

// Re-export command functions for testing and direct invocation
pub use completion::completion;
pub use config_cmd::{set as config_set, show as config_show, ConfigUpdate};
pub use generate::generate;
pub use run_cmd::run;
pub use submit::submit;

use crate::cli::args::{Command, ConfigAction};
use crate::cli::context::Context;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Config { action } => match action {
            ConfigAction::Show => config_cmd::show(ctx),
            ConfigAction::Set {
                url,
                email,
                token,
                project,
            } => config_cmd::set(
                ctx,
                ConfigUpdate {
                    url,
                    email,
                    token,
                    project,
                },
            ),
        },
        Command::Generate { input, output } => generate::generate(ctx, &input, output.as_deref()),
        Command::Submit {
            report,
            target,
            edit,
        } => submit::submit(ctx, &report, &target, edit),
        Command::Run { input, target } => run_cmd::run(ctx, &input, &target),
        Command::Completion { shell } => completion::completion(shell),
    }
}
