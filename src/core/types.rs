//! core::types
//!
//! Domain types shared by the store, the Jira client and the pipeline.
//!
//! # Types
//!
//! - [`JiraConfig`] - Persisted Jira connection settings
//! - [`CreatedIssue`] - Issue identifiers returned by Jira
//!
//! # Examples
//!
//! ```
//! use jira_pilot::core::types::JiraConfig;
//!
//! let config = JiraConfig {
//!     url: "https://acme.atlassian.net/".to_string(),
//!     email: "qa@acme.test".to_string(),
//!     api_token: "secret".to_string(),
//!     project_key: "proj".to_string(),
//! }
//! .normalized();
//!
//! assert!(config.is_complete());
//! assert_eq!(config.project_key, "PROJ");
//! assert_eq!(config.browse_url("PROJ-42"), "https://acme.atlassian.net/browse/PROJ-42");
//! ```

use serde::{Deserialize, Serialize};

/// Jira connection settings.
///
/// Serialized with the camelCase field names of the persisted record
/// (`url`, `email`, `apiToken`, `projectKey`). Missing fields read as empty.
///
/// An issue can be submitted only when all four fields are non-empty; see
/// [`JiraConfig::is_complete`].
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JiraConfig {
    /// Jira site URL, e.g. `https://your-domain.atlassian.net`
    pub url: String,
    /// Account email used as the basic-auth principal
    pub email: String,
    /// API token used as the basic-auth credential
    pub api_token: String,
    /// Project key, e.g. `PROJ`
    pub project_key: String,
}

// Custom Debug to avoid exposing api_token
impl std::fmt::Debug for JiraConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JiraConfig")
            .field("url", &self.url)
            .field("email", &self.email)
            .field("has_api_token", &!self.api_token.is_empty())
            .field("project_key", &self.project_key)
            .finish()
    }
}

impl JiraConfig {
    /// Return a copy with the project key upper-cased and fields trimmed.
    pub fn normalized(mut self) -> Self {
        self.url = self.url.trim().to_string();
        self.email = self.email.trim().to_string();
        self.project_key = self.project_key.trim().to_uppercase();
        self
    }

    /// Names of the required fields that are empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.url.is_empty() {
            missing.push("url");
        }
        if self.email.is_empty() {
            missing.push("email");
        }
        if self.api_token.is_empty() {
            missing.push("apiToken");
        }
        if self.project_key.is_empty() {
            missing.push("projectKey");
        }
        missing
    }

    /// Whether all four fields are present.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// The site URL with a single trailing slash removed.
    pub fn base_url(&self) -> &str {
        self.url.strip_suffix('/').unwrap_or(&self.url)
    }

    /// Web link to an issue on this site.
    pub fn browse_url(&self, key: &str) -> String {
        format!("{}/browse/{}", self.base_url(), key)
    }

    /// The API token with all but the last four characters masked.
    pub fn masked_token(&self) -> String {
        let count = self.api_token.chars().count();
        if count == 0 {
            return String::new();
        }
        let visible: String = self.api_token.chars().skip(count.saturating_sub(4)).collect();
        if count <= 4 {
            "*".repeat(count)
        } else {
            format!("{}{}", "*".repeat(count - 4), visible)
        }
    }
}

/// An issue created in Jira, exactly as the API reported it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedIssue {
    /// Numeric issue id (as a string)
    pub id: String,
    /// Human-readable key, e.g. `PROJ-42`
    pub key: String,
    /// REST URL of the issue
    #[serde(rename = "self")]
    pub self_link: String,
}
