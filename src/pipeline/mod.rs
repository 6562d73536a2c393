//! pipeline
//!
//! From raw test output to a created Jira issue.
//!
//! # Modules
//!
//! - [`state`] - The [`Session`] container and its pure reducer
//! - [`generate`] - [`GenerationFlow`]: test output to report
//! - [`submit`] - [`SubmissionPipeline`]: report to issue
//! - [`truncate`] - Description length policy
//!
//! # Flow
//!
//! ```text
//! test output -> GenerationFlow -> Session.report -> (edit)
//!     -> SubmissionPipeline: summarize -> truncate -> create issue
//! ```
//!
//! Both flows report every outcome through a
//! [`Notifier`](crate::ui::notify::Notifier) and make a single attempt.

pub mod generate;
pub mod state;
pub mod submit;
pub mod truncate;

pub use generate::{require_input, GenerateError, GenerationFlow};
pub use state::{Event, Session, SubmissionPhase, TransitionError, ValidationError};
pub use submit::{PipelineError, SubmissionPipeline, Submitted};
pub use truncate::{truncate_description, MAX_DESCRIPTION_CHARS};
