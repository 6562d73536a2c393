use std::process::ExitCode;

use jira_pilot::cli::{self, Reported};
use jira_pilot::ui::output;

fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // already shown as a notice
            if e.downcast_ref::<Reported>().is_none() {
                output::error(format!("{:#}", e));
            }
            ExitCode::FAILURE
        }
    }
}
