//! pipeline::generate
//!
//! Turns raw test output into the session's report.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use super::state::{Event, Session, TransitionError, ValidationError};
use crate::ai::{generate_report, GenerationError, ModelClient};
use crate::ui::notify::{Notice, Notifier};

/// Errors from a generation attempt.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The model call failed. The detail is logged, not shown.
    #[error("An error occurred while generating the report. Please try again.")]
    Generation(GenerationError),

    #[error(transparent)]
    Transition(TransitionError),
}

/// Reject blank test output, notifying the user.
///
/// Callers that need a model client can run this first so empty input is
/// reported before anything else is set up.
pub fn require_input(selenium_output: &str, notifier: &dyn Notifier) -> Result<(), GenerateError> {
    if selenium_output.trim().is_empty() {
        let err = ValidationError::EmptyInput;
        notifier.notify(Notice::error(err.title(), err.to_string()));
        return Err(err.into());
    }
    Ok(())
}

/// Generates a report and stores it in the session.
pub struct GenerationFlow {
    model: Arc<dyn ModelClient>,
    notifier: Arc<dyn Notifier>,
}

impl GenerationFlow {
    pub fn new(model: Arc<dyn ModelClient>, notifier: Arc<dyn Notifier>) -> Self {
        Self { model, notifier }
    }

    /// Generate a report from `selenium_output`.
    ///
    /// Blank input is rejected before the model is called. On success the
    /// report replaces `session.report`.
    pub async fn run(
        &self,
        session: &mut Session,
        selenium_output: &str,
    ) -> Result<String, GenerateError> {
        require_input(selenium_output, self.notifier.as_ref())?;

        *session = session
            .apply(Event::GenerationStarted)
            .map_err(GenerateError::Transition)?;

        info!(
            model = self.model.name(),
            chars = selenium_output.chars().count(),
            "generating report"
        );

        match generate_report(self.model.as_ref(), selenium_output).await {
            Ok(report) => {
                *session = session
                    .apply(Event::ReportGenerated(report.clone()))
                    .map_err(GenerateError::Transition)?;
                self.notifier.notify(Notice::info(
                    "Report Generated",
                    "AI has generated a report based on your input.",
                ));
                Ok(report)
            }
            Err(e) => {
                debug!(detail = e.detail(), "report generation failed");
                *session = session
                    .apply(Event::GenerationFinished)
                    .map_err(GenerateError::Transition)?;
                let err = GenerateError::Generation(e);
                self.notifier
                    .notify(Notice::error("Error Generating Report", err.to_string()));
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::mock::MockModelClient;
    use crate::ui::notify::RecordingNotifier;

    fn flow(model: &Arc<MockModelClient>) -> (GenerationFlow, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::new());
        (GenerationFlow::new(model.clone(), notifier.clone()), notifier)
    }

    #[tokio::test]
    async fn empty_input_never_reaches_model() {
        let model = Arc::new(MockModelClient::new().reply(r#"{"report":"x"}"#));
        let (flow, notifier) = flow(&model);
        let mut session = Session::default();

        let err = flow.run(&mut session, " \n\t").await.unwrap_err();

        assert!(matches!(err, GenerateError::Validation(ValidationError::EmptyInput)));
        assert_eq!(model.call_count(), 0);
        assert_eq!(notifier.titles(), vec!["Input Required"]);
        assert_eq!(
            notifier.notices()[0].description,
            "Please paste your Selenium QA test output."
        );
    }

    #[test]
    fn require_input_accepts_text_and_rejects_blank() {
        let notifier = RecordingNotifier::new();

        assert!(require_input("FAILED test_login", &notifier).is_ok());
        assert!(notifier.notices().is_empty());

        let err = require_input("\n  ", &notifier).unwrap_err();
        assert!(matches!(err, GenerateError::Validation(ValidationError::EmptyInput)));
        assert_eq!(notifier.titles(), vec!["Input Required"]);
    }

    #[tokio::test]
    async fn report_lands_in_session() {
        let model = Arc::new(MockModelClient::new().reply(r#"{"report":"2 tests failed"}"#));
        let (flow, notifier) = flow(&model);
        let mut session = Session::default();

        let report = flow.run(&mut session, "FAILED test_login").await.unwrap();

        assert_eq!(report, "2 tests failed");
        assert_eq!(session.report, "2 tests failed");
        assert!(!session.generating);
        assert_eq!(notifier.titles(), vec!["Report Generated"]);
        assert!(model.prompts()[0].text.contains("FAILED test_login"));
    }

    #[tokio::test]
    async fn model_failure_keeps_previous_report() {
        let model = Arc::new(MockModelClient::new().fail("401 unauthorized"));
        let (flow, notifier) = flow(&model);
        let mut session = Session::default().with_report("earlier");

        let err = flow.run(&mut session, "log").await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "An error occurred while generating the report. Please try again."
        );
        assert_eq!(session.report, "earlier");
        assert!(!session.generating);
        assert_eq!(notifier.titles(), vec!["Error Generating Report"]);
    }
}
