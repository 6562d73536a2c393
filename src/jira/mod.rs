//! jira
//!
//! Issue creation in Jira.
//!
//! # Architecture
//!
//! The [`IssueTracker`] trait is the seam the submission pipeline depends on.
//!
//! - `traits`: `IssueTracker`, request type and [`SubmitError`]
//! - [`client`]: Jira Cloud REST v3 implementation
//! - [`mock`]: in-memory implementation for deterministic testing
//!
//! Submission never retries: one failed attempt is terminal and the user
//! re-submits by hand.

pub mod client;
pub mod mock;
mod traits;

pub use client::{basic_auth_header, issue_endpoint, JiraClient};
pub use traits::*;
