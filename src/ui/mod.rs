//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`output`] - Output formatting and display
//! - [`notify`] - Notification surface used by the pipelines
//! - [`prompts`] - Interactive prompts and the report editor
//!
//! # Design
//!
//! All output and prompts go through this module to ensure consistent
//! formatting and proper handling of interactive vs non-interactive modes.

pub mod notify;
pub mod output;
pub mod prompts;
