//! jira-pilot - Selenium QA output to AI reports to Jira issues
//!
//! jira-pilot takes raw test output, has a language model write a prose
//! report, lets the user edit it, and files it as a Jira issue with a
//! model-written summary.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, runs flows)
//! - [`pipeline`] - Session state, generation flow, submission pipeline
//! - [`ai`] - Language model seam and the two prompt flows
//! - [`jira`] - Issue tracker seam and the Jira REST client
//! - [`store`] - Persisted Jira connection settings
//! - [`core`] - Domain types and application config
//! - [`ui`] - Output, notifications and prompts
//! - [`logging`] - Diagnostic logging setup
//!
//! # Invariants
//!
//! 1. No network call is made with incomplete Jira settings
//! 2. Issue descriptions never exceed 254 characters
//! 3. Every attempt is single-shot; failures are reported, never retried

pub mod ai;
pub mod cli;
pub mod core;
pub mod jira;
pub mod logging;
pub mod pipeline;
pub mod store;
pub mod ui;
