//! jira::traits
//!
//! Issue tracker trait definition.
//!
//! # Design
//!
//! The `IssueTracker` trait is async because issue creation involves network
//! I/O. There is exactly one attempt per call; failures are terminal for that
//! submission and the caller decides whether to try again.
//!
//! # Example
//!
//! ```ignore
//! use jira_pilot::jira::{CreateIssueRequest, IssueTracker};
//!
//! async fn file(tracker: &dyn IssueTracker, config: &JiraConfig) {
//!     let request = CreateIssueRequest::new("Login button unresponsive", "Full report...");
//!     match tracker.create_issue(config, request).await {
//!         Ok(issue) => println!("Created {}", issue.key),
//!         Err(e) => eprintln!("{}", e),
//!     }
//! }
//! ```

use async_trait::async_trait;
use thiserror::Error;

use crate::core::config::DEFAULT_ISSUE_TYPE;
use crate::core::types::{CreatedIssue, JiraConfig};

/// Errors from issue creation.
///
/// The `Display` text of each variant is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// One or more connection fields are empty. No request was made.
    #[error("Jira configuration is incomplete.")]
    ConfigurationIncomplete,

    /// Jira answered with a non-success status.
    #[error("Failed to create Jira issue: {message}")]
    Rejected {
        /// HTTP status code
        status: u16,
        /// Normalized error text from the response body
        message: String,
    },

    /// Transport failure or an unreadable success response.
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// Request to create an issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateIssueRequest {
    /// Issue title
    pub summary: String,
    /// Issue body (plain text, sent as a single paragraph)
    pub description: String,
    /// Issue type name, e.g. "Bug"
    pub issue_type: String,
}

impl CreateIssueRequest {
    /// Build a request with the default issue type ("Bug").
    pub fn new(summary: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            description: description.into(),
            issue_type: DEFAULT_ISSUE_TYPE.to_string(),
        }
    }

    /// Override the issue type.
    pub fn with_issue_type(mut self, issue_type: impl Into<String>) -> Self {
        self.issue_type = issue_type.into();
        self
    }
}

/// Creates issues in a remote tracker.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow use across async tasks.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Tracker name (e.g., "jira").
    fn name(&self) -> &'static str;

    /// Create an issue.
    ///
    /// # Errors
    ///
    /// - `ConfigurationIncomplete` if any field of `config` is empty; no
    ///   network call is made
    /// - `Rejected` if the tracker returns a non-success status
    /// - `Unexpected` for transport or decoding failures
    async fn create_issue(
        &self,
        config: &JiraConfig,
        request: CreateIssueRequest,
    ) -> Result<CreatedIssue, SubmitError>;
}
