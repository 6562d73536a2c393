//! ui::prompts
//!
//! Interactive prompts and the report editor.
//!
//! # Design
//!
//! Prompts are only shown in interactive mode. In non-interactive mode,
//! operations requiring user input must either have defaults or fail
//! with a clear error message.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::Command;

use thiserror::Error;

/// Errors from prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("prompt cancelled by user")]
    Cancelled,

    #[error("not in interactive mode")]
    NotInteractive,

    #[error("editor '{editor}' exited with {status}")]
    EditorFailed { editor: String, status: String },

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<io::Error> for PromptError {
    fn from(e: io::Error) -> Self {
        PromptError::IoError(e.to_string())
    }
}

/// Prompt for confirmation (yes/no).
///
/// An empty answer takes `default`.
pub fn confirm(message: &str, default: bool, interactive: bool) -> Result<bool, PromptError> {
    if !interactive {
        return Err(PromptError::NotInteractive);
    }

    let hint = if default { "[Y/n]" } else { "[y/N]" };
    let answer = read_line(&format!("{} {} ", message, hint))?;
    Ok(parse_confirmation(&answer, default))
}

/// Prompt for masked input (e.g., API tokens).
///
/// The input is not echoed to the terminal.
pub fn password(message: &str, interactive: bool) -> Result<String, PromptError> {
    if !interactive {
        return Err(PromptError::NotInteractive);
    }

    eprint!("{}: ", message);
    io::stderr().flush()?;
    Ok(rpassword::read_password()?)
}

/// Open `text` in the user's editor and return the edited contents.
///
/// Uses `$VISUAL`, then `$EDITOR`, then `vi`.
pub fn edit(text: &str, interactive: bool) -> Result<String, PromptError> {
    if !interactive {
        return Err(PromptError::NotInteractive);
    }

    let path = std::env::temp_dir().join(format!("jpilot-report-{}.md", std::process::id()));
    std::fs::write(&path, text)?;

    let result = run_editor(&editor_command(), &path)
        .and_then(|()| std::fs::read_to_string(&path).map_err(PromptError::from));
    let _ = std::fs::remove_file(&path);
    result
}

fn editor_command() -> String {
    std::env::var("VISUAL")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(|| std::env::var("EDITOR").ok().filter(|v| !v.trim().is_empty()))
        .unwrap_or_else(|| "vi".to_string())
}

fn run_editor(editor: &str, path: &Path) -> Result<(), PromptError> {
    let mut parts = editor.split_whitespace();
    let program = parts.next().ok_or(PromptError::Cancelled)?;

    let status = Command::new(program).args(parts).arg(path).status()?;
    if status.success() {
        Ok(())
    } else {
        Err(PromptError::EditorFailed {
            editor: editor.to_string(),
            status: status.to_string(),
        })
    }
}

fn read_line(prompt: &str) -> Result<String, PromptError> {
    eprint!("{}", prompt);
    io::stderr().flush()?;

    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        return Err(PromptError::Cancelled);
    }
    Ok(line.trim().to_string())
}

fn parse_confirmation(answer: &str, default: bool) -> bool {
    match answer.trim().to_lowercase().as_str() {
        "" => default,
        "y" | "yes" => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_interactive_prompts_fail() {
        assert!(matches!(confirm("ok?", true, false), Err(PromptError::NotInteractive)));
        assert!(matches!(password("token", false), Err(PromptError::NotInteractive)));
        assert!(matches!(edit("text", false), Err(PromptError::NotInteractive)));
    }

    #[test]
    fn confirmation_parsing() {
        assert!(parse_confirmation("", true));
        assert!(!parse_confirmation("", false));
        assert!(parse_confirmation("Y", false));
        assert!(parse_confirmation("yes", false));
        assert!(!parse_confirmation("n", true));
        assert!(!parse_confirmation("whatever", true));
    }

    #[cfg(unix)]
    #[test]
    fn editor_exit_status_is_checked() {
        let path = std::env::temp_dir().join("jpilot-editor-test.md");
        assert!(run_editor("true", &path).is_ok());
        assert!(matches!(
            run_editor("false", &path),
            Err(PromptError::EditorFailed { .. })
        ));
    }
}
