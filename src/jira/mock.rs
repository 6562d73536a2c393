//! jira::mock
//!
//! Mock issue tracker for deterministic testing.
//!
//! Issues are numbered from 10001 with keys `<PROJECT>-1`, `<PROJECT>-2`, ...
//! The configuration guard behaves like the real client: an incomplete
//! configuration fails without recording a request.
//!
//! # Example
//!
//! ```
//! use jira_pilot::core::types::JiraConfig;
//! use jira_pilot::jira::mock::MockIssueTracker;
//! use jira_pilot::jira::{CreateIssueRequest, IssueTracker};
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let tracker = MockIssueTracker::new();
//! let config = JiraConfig {
//!     url: "https://x.atlassian.net".into(),
//!     email: "qa@x.test".into(),
//!     api_token: "tok".into(),
//!     project_key: "PROJ".into(),
//! };
//!
//! let issue = tracker
//!     .create_issue(&config, CreateIssueRequest::new("Summary", "Body"))
//!     .await
//!     .unwrap();
//! assert_eq!(issue.key, "PROJ-1");
//! assert_eq!(tracker.requests().len(), 1);
//! # });
//! ```

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::traits::{CreateIssueRequest, IssueTracker, SubmitError};
use crate::core::types::{CreatedIssue, JiraConfig};

/// Mock issue tracker.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping.
#[derive(Debug, Clone, Default)]
pub struct MockIssueTracker {
    inner: Arc<Mutex<MockTrackerInner>>,
}

#[derive(Debug, Default)]
struct MockTrackerInner {
    created: u64,
    fail_with: Option<SubmitError>,
    requests: Vec<RecordedRequest>,
}

/// A request that reached the mock (i.e. passed the configuration guard).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub url: String,
    pub project_key: String,
    pub summary: String,
    pub description: String,
    pub issue_type: String,
}

impl MockIssueTracker {
    /// Create a tracker that accepts every complete request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every request that reaches the tracker with `error`.
    pub fn fail_with(self, error: SubmitError) -> Self {
        self.inner.lock().unwrap().fail_with = Some(error);
        self
    }

    /// Requests that reached the tracker, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.inner.lock().unwrap().requests.clone()
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.inner.lock().unwrap().requests.last().cloned()
    }
}

#[async_trait]
impl IssueTracker for MockIssueTracker {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn create_issue(
        &self,
        config: &JiraConfig,
        request: CreateIssueRequest,
    ) -> Result<CreatedIssue, SubmitError> {
        if !config.is_complete() {
            return Err(SubmitError::ConfigurationIncomplete);
        }

        let mut inner = self.inner.lock().unwrap();
        inner.requests.push(RecordedRequest {
            url: config.url.clone(),
            project_key: config.project_key.clone(),
            summary: request.summary,
            description: request.description,
            issue_type: request.issue_type,
        });

        if let Some(err) = &inner.fail_with {
            return Err(err.clone());
        }

        inner.created += 1;
        let id = 10_000 + inner.created;
        Ok(CreatedIssue {
            id: id.to_string(),
            key: format!("{}-{}", config.project_key, inner.created),
            self_link: format!("{}/rest/api/3/issue/{}", config.base_url(), id),
        })
    }
}
