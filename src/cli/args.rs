//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--config <path>`: Use this application config file
//! - `--debug`: Enable debug logging
//! - `--no-interactive`: Never prompt or open an editor
//! - `--quiet` / `-q`: Minimal output

use clap::{Args, Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;

/// jpilot - Turn Selenium QA output into AI reports and Jira issues
#[derive(Parser, Debug)]
#[command(name = "jpilot")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Application config file (overrides JIRA_PILOT_CONFIG)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output; implies --no-interactive
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable interactive prompts and the editor
    #[arg(long, global = true)]
    pub no_interactive: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Determine if interactive mode is allowed by the flags.
    ///
    /// Returns false if `--no-interactive` or `--quiet` was set, or stdin
    /// is not a terminal.
    pub fn interactive(&self) -> bool {
        !(self.no_interactive || self.quiet) && std::io::stdin().is_terminal()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show or change the stored Jira connection settings
    #[command(
        name = "config",
        after_help = "\
WORKFLOW EXAMPLES:
    # First-time setup (prompts for the API token)
    jpilot config set --url https://acme.atlassian.net --email qa@acme.com --project QA

    # Check what is stored (token is masked)
    jpilot config show"
    )]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate a report from Selenium test output
    #[command(
        name = "generate",
        long_about = "Generate a prose QA report from raw Selenium test output.\n\n\
            The output is read from a file or stdin and sent to the language model. \
            The report is printed to stdout or written to --output.",
        after_help = "\
WORKFLOW EXAMPLES:
    # From a file
    jpilot generate --input results.txt --output report.md

    # From a pipe
    pytest 2>&1 | jpilot generate"
    )]
    Generate {
        /// Test output file, or '-' for stdin
        #[arg(long, short, value_name = "FILE", default_value = "-")]
        input: String,

        /// Write the report here instead of stdout
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Submit a report to Jira as a new issue
    #[command(
        name = "submit",
        long_about = "Summarize a report and file it as a Jira issue.\n\n\
            The summary becomes the issue title. Reports longer than 254 characters \
            are cut to fit the issue description.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Review in $EDITOR, submit, open the new issue
    jpilot submit --report report.md --edit --open"
    )]
    Submit {
        /// Report file to submit
        #[arg(long, short, value_name = "FILE")]
        report: PathBuf,

        #[command(flatten)]
        target: IssueArgs,

        /// Edit the report in $EDITOR before submitting
        #[arg(long)]
        edit: bool,
    },

    /// Generate, review and submit in one go
    #[command(
        name = "run",
        long_about = "Generate a report from test output, open it in $EDITOR for review, \
            then submit it to Jira.\n\n\
            Without a terminal (or with --no-interactive) the review step is skipped."
    )]
    Run {
        /// Test output file, or '-' for stdin
        #[arg(long, short, value_name = "FILE", default_value = "-")]
        input: String,

        #[command(flatten)]
        target: IssueArgs,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        after_help = "\
WORKFLOW EXAMPLES:
    # Bash (add to ~/.bashrc)
    jpilot completion bash >> ~/.bashrc

    # Zsh
    jpilot completion zsh > ~/.zfunc/_jpilot"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Where a submitted issue goes.
#[derive(Args, Debug, Clone)]
pub struct IssueArgs {
    /// Issue type name (default from config, else "Bug")
    #[arg(long, value_name = "NAME")]
    pub issue_type: Option<String>,

    /// Open the created issue in the browser
    #[arg(long)]
    pub open: bool,
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show the stored connection settings
    Show,
    /// Update the stored connection settings
    Set {
        /// Jira site URL
        #[arg(long)]
        url: Option<String>,
        /// Account email
        #[arg(long)]
        email: Option<String>,
        /// API token (prompted when omitted and none is stored)
        #[arg(long)]
        token: Option<String>,
        /// Project key (upper-cased)
        #[arg(long)]
        project: Option<String>,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
