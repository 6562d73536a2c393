//! logging
//!
//! Diagnostic logging through `tracing`.
//!
//! Diagnostics go to stderr in compact form and are separate from the
//! user-facing notices in [`crate::ui`]. Secrets are never logged.

use std::sync::Once;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_LOG_LEVEL: &str = "warn";
const DEBUG_LOG_LEVEL: &str = "debug";

/// Environment variable holding a log filter directive.
pub const LOG_ENV: &str = "JIRA_PILOT_LOG";

static INIT: Once = Once::new();

/// Initialize the global tracing subscriber.
///
/// The filter is resolved with precedence: `JIRA_PILOT_LOG` env var >
/// `debug` flag > default (`warn`). Calling this more than once is a no-op.
pub fn init(debug: bool) -> anyhow::Result<()> {
    let mut init_err: Option<anyhow::Error> = None;

    INIT.call_once(|| {
        if let Err(e) = try_init(debug) {
            init_err = Some(e);
        }
    });

    match init_err {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn try_init(debug: bool) -> anyhow::Result<()> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .compact();

    tracing_subscriber::registry()
        .with(stderr_layer.with_filter(build_filter(debug)))
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))
}

fn build_filter(debug: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(directive(debug)))
}

fn directive(debug: bool) -> &'static str {
    if debug {
        DEBUG_LOG_LEVEL
    } else {
        DEFAULT_LOG_LEVEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_follows_debug_flag() {
        assert_eq!(directive(false), "warn");
        assert_eq!(directive(true), "debug");
    }

    #[test]
    fn explicit_directive_is_accepted() {
        let filter = EnvFilter::new("jira_pilot=trace,warn");
        let display = format!("{filter}");
        assert!(
            display.contains("jira_pilot=trace"),
            "expected 'jira_pilot=trace', got: {display}"
        );
    }

    #[test]
    fn init_twice_is_harmless() {
        assert!(init(false).is_ok());
        assert!(init(true).is_ok());
    }
}
