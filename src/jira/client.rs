//! jira::client
//!
//! Jira Cloud implementation of [`IssueTracker`] using the REST API v3.
//!
//! # Design
//!
//! A single `POST {url}/rest/api/3/issue` per submission, authenticated with
//! HTTP Basic (`email:api_token`). The description is wrapped in an Atlassian
//! Document Format document holding one paragraph with one text node.
//!
//! Error bodies come in two shapes, `errorMessages: [..]` and
//! `errors: {field: message}`; both are folded into one comma-joined message.
//!
//! # Example
//!
//! ```ignore
//! use jira_pilot::jira::{JiraClient, IssueTracker, CreateIssueRequest};
//!
//! let client = JiraClient::new();
//! let issue = client
//!     .create_issue(&config, CreateIssueRequest::new("Summary", "Body"))
//!     .await?;
//! println!("{}", config.browse_url(&issue.key));
//! ```

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use super::traits::{CreateIssueRequest, IssueTracker, SubmitError};
use crate::core::types::{CreatedIssue, JiraConfig};

/// Issue creation path relative to the site URL.
const ISSUE_PATH: &str = "/rest/api/3/issue";

/// Jira Cloud client.
#[derive(Debug, Clone, Default)]
pub struct JiraClient {
    client: Client,
}

impl JiraClient {
    /// Create a client with a default HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a client around an existing HTTP client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    fn headers(config: &JiraConfig) -> Result<HeaderMap, SubmitError> {
        let auth = HeaderValue::from_str(&basic_auth_header(&config.email, &config.api_token))
            .map_err(|e| SubmitError::Unexpected(format!("invalid authorization header: {}", e)))?;

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        Ok(headers)
    }
}

/// Build the `Authorization` header value for basic auth.
///
/// Pure encoding of `principal:credential`; no validation, nothing cached.
pub fn basic_auth_header(principal: &str, credential: &str) -> String {
    format!(
        "Basic {}",
        STANDARD.encode(format!("{}:{}", principal, credential))
    )
}

/// Issue creation endpoint for a site.
pub fn issue_endpoint(config: &JiraConfig) -> String {
    format!("{}{}", config.base_url(), ISSUE_PATH)
}

/// Fold a Jira error body into a single message.
///
/// Uses `errorMessages` if any, then the values of `errors`, then a generic
/// status line when the body is empty or unparseable.
pub fn normalize_error_message(body: &str, status: StatusCode) -> String {
    let fallback = || format!("Jira API responded with status {}", status.as_u16());

    let Ok(parsed) = serde_json::from_str::<JiraErrorResponse>(body) else {
        return fallback();
    };

    if !parsed.error_messages.is_empty() {
        let joined = parsed.error_messages.join(", ");
        if !joined.is_empty() {
            return joined;
        }
    }

    let field_errors: Vec<String> = parsed
        .errors
        .values()
        .map(|v| match v {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect();
    let joined = field_errors.join(", ");
    if !joined.is_empty() {
        return joined;
    }

    fallback()
}

/// Error for a non-success response, given the result of reading its body.
///
/// A body that could not be read at all is an unexpected failure, not a
/// rejection.
fn rejection_error<E: std::fmt::Display>(
    status: StatusCode,
    body: Result<String, E>,
) -> SubmitError {
    match body {
        Ok(text) => SubmitError::Rejected {
            status: status.as_u16(),
            message: normalize_error_message(&text, status),
        },
        Err(e) => SubmitError::Unexpected(format!("failed to read Jira error response: {}", e)),
    }
}

#[async_trait]
impl IssueTracker for JiraClient {
    fn name(&self) -> &'static str {
        "jira"
    }

    async fn create_issue(
        &self,
        config: &JiraConfig,
        request: CreateIssueRequest,
    ) -> Result<CreatedIssue, SubmitError> {
        if !config.is_complete() {
            warn!(missing = ?config.missing_fields(), "jira configuration incomplete");
            return Err(SubmitError::ConfigurationIncomplete);
        }

        let url = issue_endpoint(config);
        let body = IssueRequestBody::new(&config.project_key, &request);

        let response = self
            .client
            .post(&url)
            .headers(Self::headers(config)?)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(endpoint = %url, error = %e, "jira request failed");
                SubmitError::Unexpected(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error = rejection_error(status, response.text().await);
            info!(endpoint = %url, status = status.as_u16(), %error, "jira rejected issue");
            return Err(error);
        }

        let issue: CreatedIssue = response.json().await.map_err(|e| {
            error!(endpoint = %url, error = %e, "unreadable jira response");
            SubmitError::Unexpected(format!("failed to parse Jira response: {}", e))
        })?;

        info!(key = %issue.key, id = %issue.id, "jira issue created");
        Ok(issue)
    }
}

// =============================================================================
// Wire types
// =============================================================================

#[derive(Debug, Serialize)]
struct IssueRequestBody<'a> {
    fields: IssueFields<'a>,
}

impl<'a> IssueRequestBody<'a> {
    fn new(project_key: &'a str, request: &'a CreateIssueRequest) -> Self {
        Self {
            fields: IssueFields {
                project: ProjectRef { key: project_key },
                summary: &request.summary,
                description: AdfNode::document(&request.description),
                issuetype: IssueTypeRef {
                    name: &request.issue_type,
                },
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct IssueFields<'a> {
    project: ProjectRef<'a>,
    summary: &'a str,
    description: AdfNode<'a>,
    issuetype: IssueTypeRef<'a>,
}

#[derive(Debug, Serialize)]
struct ProjectRef<'a> {
    key: &'a str,
}

#[derive(Debug, Serialize)]
struct IssueTypeRef<'a> {
    name: &'a str,
}

/// Atlassian Document Format node (the subset we emit).
#[derive(Debug, Serialize)]
struct AdfNode<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    content: Vec<AdfNode<'a>>,
}

impl<'a> AdfNode<'a> {
    fn document(text: &'a str) -> Self {
        let text_node = AdfNode {
            kind: "text",
            version: None,
            text: Some(text),
            content: Vec::new(),
        };
        let paragraph = AdfNode {
            kind: "paragraph",
            version: None,
            text: None,
            content: vec![text_node],
        };
        AdfNode {
            kind: "doc",
            version: Some(1),
            text: None,
            content: vec![paragraph],
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct JiraErrorResponse {
    #[serde(rename = "errorMessages", default)]
    error_messages: Vec<String>,
    #[serde(default)]
    errors: serde_json::Map<String, serde_json::Value>,
}
