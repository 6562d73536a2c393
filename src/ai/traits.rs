//! ai::traits
//!
//! Language-model client trait definition.
//!
//! # Design
//!
//! A model call is a single-shot request/response: one rendered prompt in,
//! one JSON object with a single string field out. Every failure (transport,
//! auth, refusal, malformed output) is reported as the same
//! [`GenerationError`]; the underlying detail is kept for debug logs only.

use async_trait::async_trait;
use std::fmt;

/// Opaque failure of a model call.
///
/// Callers show a fixed message; [`GenerationError::detail`] is for logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationError {
    detail: String,
}

impl GenerationError {
    /// Wrap an underlying failure description.
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }

    /// Underlying failure description, for logs.
    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "generation failed")
    }
}

impl std::error::Error for GenerationError {}

/// A rendered prompt with its one-field output contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuredPrompt {
    /// Prompt name, used in logs
    pub name: &'static str,
    /// Fully rendered prompt text
    pub text: String,
    /// Name of the single string field the model must return
    pub output_field: &'static str,
    /// Description of that field, passed along in the response schema
    pub output_description: &'static str,
}

/// A language-model completion service.
///
/// Implementations must be `Send + Sync` to allow use across async tasks.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Client name (e.g., "gemini").
    fn name(&self) -> &'static str;

    /// Run the prompt and return the raw JSON text of the model's answer.
    async fn complete(&self, prompt: &StructuredPrompt) -> Result<String, GenerationError>;
}
