//! pipeline::submit
//!
//! The submission pipeline: summarize, truncate, create the issue.
//!
//! Every outcome is reported through the [`Notifier`] and returned to the
//! caller. The session is advanced through [`Session::apply`] at each step,
//! so after `submit` returns its phase is `Succeeded` or `Failed` (or
//! unchanged when the guard rejected the request).

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use super::state::{Event, Session, SubmissionPhase, TransitionError, ValidationError};
use super::truncate::MAX_DESCRIPTION_CHARS;
use crate::ai::{summarize_report, GenerationError, ModelClient};
use crate::core::config::DEFAULT_ISSUE_TYPE;
use crate::core::types::CreatedIssue;
use crate::jira::{CreateIssueRequest, IssueTracker, SubmitError};
use crate::ui::notify::{Notice, Notifier};

/// Message shown for failures that carry no message of their own.
pub const PREPARE_FAILED_MESSAGE: &str =
    "An error occurred while preparing the report for Jira. Please try again.";

const SUBMIT_FAILED_TITLE: &str = "Error Submitting to Jira";

/// Errors from a submission attempt.
///
/// `Display` is the text shown to the user.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Summarization failed. The detail is logged, not shown.
    #[error("An error occurred while preparing the report for Jira. Please try again.")]
    Generation(GenerationError),

    /// The tracker refused or failed; shown verbatim.
    #[error(transparent)]
    Submit(SubmitError),

    /// Any other fault.
    #[error("An error occurred while preparing the report for Jira. Please try again.")]
    Unexpected(String),
}

/// A created issue plus what was sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submitted {
    pub issue: CreatedIssue,
    /// Browser link to the issue
    pub link: String,
    pub summary: String,
    pub description: String,
    /// Whether the report was cut to fit the description limit
    pub truncated: bool,
}

/// Summarizes a report and files it as an issue.
pub struct SubmissionPipeline {
    model: Arc<dyn ModelClient>,
    tracker: Arc<dyn IssueTracker>,
    notifier: Arc<dyn Notifier>,
    issue_type: String,
}

impl SubmissionPipeline {
    pub fn new(
        model: Arc<dyn ModelClient>,
        tracker: Arc<dyn IssueTracker>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            model,
            tracker,
            notifier,
            issue_type: DEFAULT_ISSUE_TYPE.to_string(),
        }
    }

    /// Override the issue type (default "Bug").
    pub fn with_issue_type(mut self, issue_type: impl Into<String>) -> Self {
        self.issue_type = issue_type.into();
        self
    }

    /// Submit the session's report.
    ///
    /// # Errors
    ///
    /// - `Validation` if the report is empty or the configuration is
    ///   incomplete; the summarizer is not called
    /// - `Generation` if summarization fails
    /// - `Submit` if the tracker fails, carrying its message verbatim
    /// - `Unexpected` for out-of-order state
    pub async fn submit(&self, session: &mut Session) -> Result<Submitted, PipelineError> {
        *session = match session.apply(Event::SubmitRequested) {
            Ok(next) => next,
            Err(TransitionError::Rejected(validation)) => {
                self.notifier
                    .notify(Notice::error(validation.title(), validation.to_string()));
                return Err(PipelineError::Validation(validation));
            }
            Err(other) => {
                warn!(error = %other, "submit request refused");
                self.notifier
                    .notify(Notice::error(SUBMIT_FAILED_TITLE, PREPARE_FAILED_MESSAGE));
                return Err(PipelineError::Unexpected(other.to_string()));
            }
        };

        info!(
            tracker = self.tracker.name(),
            model = self.model.name(),
            chars = session.report.chars().count(),
            "submitting report"
        );

        let summary = match summarize_report(self.model.as_ref(), &session.report).await {
            Ok(summary) => summary,
            Err(e) => {
                debug!(detail = e.detail(), "summarization failed");
                return Err(self.fail(session, PipelineError::Generation(e)));
            }
        };
        self.advance(session, Event::Summarized(summary))?;

        if matches!(session.phase, SubmissionPhase::Truncating { .. }) {
            self.advance(session, Event::Truncated)?;
            info!(
                chars = session.report.chars().count(),
                limit = MAX_DESCRIPTION_CHARS,
                "report truncated for description"
            );
            self.notifier.notify(Notice::warning(
                "Content Truncated",
                format!(
                    "The report exceeded {} characters and was truncated for the Jira description.",
                    MAX_DESCRIPTION_CHARS
                ),
            ));
        }

        let SubmissionPhase::Submitting {
            summary,
            description,
            truncated,
        } = session.phase.clone()
        else {
            let message = format!("unexpected phase {}", session.phase.name());
            return Err(self.fail(session, PipelineError::Unexpected(message)));
        };

        let request = CreateIssueRequest::new(summary.clone(), description.clone())
            .with_issue_type(self.issue_type.clone());

        match self.tracker.create_issue(&session.config, request).await {
            Ok(issue) => {
                self.advance(session, Event::SubmitSucceeded(issue.clone()))?;
                let link = session.config.browse_url(&issue.key);
                info!(key = %issue.key, "issue created");
                self.notifier.notify(Notice::info(
                    "Report Submitted to Jira",
                    format!("Issue {} created: {}", issue.key, link),
                ));
                Ok(Submitted {
                    issue,
                    link,
                    summary,
                    description,
                    truncated,
                })
            }
            Err(e) => Err(self.fail(session, PipelineError::Submit(e))),
        }
    }

    fn advance(&self, session: &mut Session, event: Event) -> Result<(), PipelineError> {
        match session.apply(event) {
            Ok(next) => {
                *session = next;
                Ok(())
            }
            Err(e) => Err(self.fail(session, PipelineError::Unexpected(e.to_string()))),
        }
    }

    /// Move the session to `Failed` and emit the failure notice.
    fn fail(&self, session: &mut Session, error: PipelineError) -> PipelineError {
        if let PipelineError::Unexpected(detail) = &error {
            warn!(detail = %detail, "submission aborted");
        }

        let message = error.to_string();
        if let Ok(next) = session.apply(Event::SubmitFailed(message.clone())) {
            *session = next;
        }
        self.notifier
            .notify(Notice::error(SUBMIT_FAILED_TITLE, message));
        error
    }
}
