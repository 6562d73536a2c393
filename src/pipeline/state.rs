//! pipeline::state
//!
//! Session state and its reducer.
//!
//! A [`Session`] is the single state container of one command: the Jira
//! configuration, the current report, the two in-flight flags and the
//! submission phase. [`Session::apply`] is a pure transition; it never
//! mutates the receiver and performs no I/O.
//!
//! # Submission phases
//!
//! ```text
//! Idle -> Summarizing -> [Truncating] -> Submitting -> Succeeded | Failed
//! ```
//!
//! `Succeeded` and `Failed` are terminal for one attempt and behave like
//! `Idle` for the next request. The report is never cleared by a
//! transition.

use thiserror::Error;

use super::truncate::{truncate_description, MAX_DESCRIPTION_CHARS};
use crate::core::types::{CreatedIssue, JiraConfig};

/// Precondition failures, detected before any network call.
///
/// `Display` is the notice description; [`ValidationError::title`] is the
/// notice title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please paste your Selenium QA test output.")]
    EmptyInput,

    #[error("Cannot submit an empty report to Jira.")]
    EmptyReport,

    #[error("Please configure your Jira settings before submitting.")]
    IncompleteConfig,
}

impl ValidationError {
    pub fn title(&self) -> &'static str {
        match self {
            ValidationError::EmptyInput => "Input Required",
            ValidationError::EmptyReport => "Report Empty",
            ValidationError::IncompleteConfig => "Jira Configuration Missing",
        }
    }
}

/// Refused transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// A submit request failed its guard.
    #[error(transparent)]
    Rejected(#[from] ValidationError),

    /// The same operation is already in flight.
    #[error("{0} already in progress")]
    Busy(&'static str),

    /// The event does not apply to the current phase.
    #[error("cannot apply {event} while {phase}")]
    Invalid {
        event: &'static str,
        phase: &'static str,
    },
}

/// Where the current submission attempt stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Summarizing,
    /// Summary is known; the report is over the description limit.
    Truncating { summary: String },
    Submitting {
        summary: String,
        description: String,
        truncated: bool,
    },
    Succeeded { key: String, link: String },
    Failed { message: String },
}

impl SubmissionPhase {
    pub fn name(&self) -> &'static str {
        match self {
            SubmissionPhase::Idle => "idle",
            SubmissionPhase::Summarizing => "summarizing",
            SubmissionPhase::Truncating { .. } => "truncating",
            SubmissionPhase::Submitting { .. } => "submitting",
            SubmissionPhase::Succeeded { .. } => "succeeded",
            SubmissionPhase::Failed { .. } => "failed",
        }
    }

    /// Whether a new submit request may start from here.
    pub fn is_ready(&self) -> bool {
        matches!(
            self,
            SubmissionPhase::Idle | SubmissionPhase::Succeeded { .. } | SubmissionPhase::Failed { .. }
        )
    }
}

/// Inputs to the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    ConfigSaved(JiraConfig),
    GenerationStarted,
    ReportGenerated(String),
    GenerationFinished,
    ReportEdited(String),
    SubmitRequested,
    Summarized(String),
    Truncated,
    SubmitSucceeded(CreatedIssue),
    SubmitFailed(String),
    Reset,
}

impl Event {
    fn name(&self) -> &'static str {
        match self {
            Event::ConfigSaved(_) => "ConfigSaved",
            Event::GenerationStarted => "GenerationStarted",
            Event::ReportGenerated(_) => "ReportGenerated",
            Event::GenerationFinished => "GenerationFinished",
            Event::ReportEdited(_) => "ReportEdited",
            Event::SubmitRequested => "SubmitRequested",
            Event::Summarized(_) => "Summarized",
            Event::Truncated => "Truncated",
            Event::SubmitSucceeded(_) => "SubmitSucceeded",
            Event::SubmitFailed(_) => "SubmitFailed",
            Event::Reset => "Reset",
        }
    }
}

/// State of one command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub config: JiraConfig,
    pub report: String,
    pub generating: bool,
    pub submitting: bool,
    pub phase: SubmissionPhase,
}

impl Session {
    pub fn new(config: JiraConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Seed the session with an existing report.
    pub fn with_report(mut self, report: impl Into<String>) -> Self {
        self.report = report.into();
        self
    }

    /// Check the submit guard without changing state.
    pub fn validate_submit(&self) -> Result<(), ValidationError> {
        if self.report.trim().is_empty() {
            return Err(ValidationError::EmptyReport);
        }
        if !self.config.is_complete() {
            return Err(ValidationError::IncompleteConfig);
        }
        Ok(())
    }

    /// Compute the state after `event`.
    ///
    /// # Errors
    ///
    /// - `Rejected` if `SubmitRequested` fails its guard
    /// - `Busy` if generation or submission is already in flight
    /// - `Invalid` if the event does not fit the current phase
    pub fn apply(&self, event: Event) -> Result<Session, TransitionError> {
        let mut next = self.clone();
        let invalid = TransitionError::Invalid {
            event: event.name(),
            phase: self.phase.name(),
        };

        match event {
            Event::ConfigSaved(config) => {
                if self.submitting {
                    return Err(TransitionError::Busy("submission"));
                }
                next.config = config.normalized();
            }
            Event::GenerationStarted => {
                if self.generating {
                    return Err(TransitionError::Busy("generation"));
                }
                next.generating = true;
            }
            Event::ReportGenerated(report) => {
                if !self.generating {
                    return Err(invalid);
                }
                next.report = report;
                next.generating = false;
            }
            Event::GenerationFinished => {
                next.generating = false;
            }
            Event::ReportEdited(report) => {
                if self.submitting {
                    return Err(TransitionError::Busy("submission"));
                }
                next.report = report;
            }
            Event::SubmitRequested => {
                if self.submitting {
                    return Err(TransitionError::Busy("submission"));
                }
                if !self.phase.is_ready() {
                    return Err(invalid);
                }
                self.validate_submit()?;
                next.submitting = true;
                next.phase = SubmissionPhase::Summarizing;
            }
            Event::Summarized(summary) => {
                if self.phase != SubmissionPhase::Summarizing {
                    return Err(invalid);
                }
                next.phase = if self.report.chars().count() > MAX_DESCRIPTION_CHARS {
                    SubmissionPhase::Truncating { summary }
                } else {
                    SubmissionPhase::Submitting {
                        summary,
                        description: self.report.clone(),
                        truncated: false,
                    }
                };
            }
            Event::Truncated => {
                let SubmissionPhase::Truncating { summary } = &self.phase else {
                    return Err(invalid);
                };
                next.phase = SubmissionPhase::Submitting {
                    summary: summary.clone(),
                    description: truncate_description(&self.report).text,
                    truncated: true,
                };
            }
            Event::SubmitSucceeded(issue) => {
                if !matches!(self.phase, SubmissionPhase::Submitting { .. }) {
                    return Err(invalid);
                }
                next.phase = SubmissionPhase::Succeeded {
                    link: self.config.browse_url(&issue.key),
                    key: issue.key,
                };
                next.submitting = false;
            }
            Event::SubmitFailed(message) => {
                if !self.submitting {
                    return Err(invalid);
                }
                next.phase = SubmissionPhase::Failed { message };
                next.submitting = false;
            }
            Event::Reset => {
                if self.submitting {
                    return Err(TransitionError::Busy("submission"));
                }
                next.phase = SubmissionPhase::Idle;
            }
        }

        Ok(next)
    }
}
