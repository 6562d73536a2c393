//! ai
//!
//! Language-model calls behind report generation and summarization.
//!
//! # Modules
//!
//! - `traits`: [`ModelClient`] and the opaque [`GenerationError`]
//! - [`flows`]: the generate and summarize prompt flows
//! - [`gemini`]: Google Gemini REST client
//! - [`mock`]: scripted client for deterministic testing
//! - `template`: `{{name}}` placeholder rendering

pub mod flows;
pub mod gemini;
pub mod mock;
mod template;
mod traits;

pub use flows::{generate_report, summarize_report};
pub use gemini::GeminiClient;
pub use traits::{GenerationError, ModelClient, StructuredPrompt};
