//! ai::mock
//!
//! Scripted model client for deterministic testing.
//!
//! Replies are consumed in order; once the script is exhausted the last
//! reply repeats. An empty script fails every call.
//!
//! # Example
//!
//! ```
//! use jira_pilot::ai::mock::MockModelClient;
//! use jira_pilot::ai::flows::generate_report;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let model = MockModelClient::new().reply(r#"{"report":"All green"}"#);
//! assert_eq!(generate_report(&model, "log").await.unwrap(), "All green");
//! assert_eq!(model.call_count(), 1);
//! # });
//! ```

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::traits::{GenerationError, ModelClient, StructuredPrompt};

/// Mock model client.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping; clones share state.
#[derive(Debug, Clone, Default)]
pub struct MockModelClient {
    inner: Arc<Mutex<MockModelInner>>,
}

#[derive(Debug, Default)]
struct MockModelInner {
    script: Vec<Result<String, GenerationError>>,
    prompts: Vec<StructuredPrompt>,
}

impl MockModelClient {
    /// Create a client with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a successful raw reply to the script.
    pub fn reply(self, raw: impl Into<String>) -> Self {
        self.inner.lock().unwrap().script.push(Ok(raw.into()));
        self
    }

    /// Append a failure to the script.
    pub fn fail(self, detail: impl Into<String>) -> Self {
        self.inner
            .lock()
            .unwrap()
            .script
            .push(Err(GenerationError::new(detail)));
        self
    }

    /// Prompts received so far, oldest first.
    pub fn prompts(&self) -> Vec<StructuredPrompt> {
        self.inner.lock().unwrap().prompts.clone()
    }

    /// Number of calls received.
    pub fn call_count(&self) -> usize {
        self.inner.lock().unwrap().prompts.len()
    }
}

#[async_trait]
impl ModelClient for MockModelClient {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn complete(&self, prompt: &StructuredPrompt) -> Result<String, GenerationError> {
        let mut inner = self.inner.lock().unwrap();
        inner.prompts.push(prompt.clone());

        let index = inner.prompts.len() - 1;
        match inner.script.get(index).or_else(|| inner.script.last()) {
            Some(result) => result.clone(),
            None => Err(GenerationError::new("mock model has no scripted reply")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt() -> StructuredPrompt {
        StructuredPrompt {
            name: "test",
            text: "hello".into(),
            output_field: "report",
            output_description: "",
        }
    }

    #[tokio::test]
    async fn replies_in_order_then_repeats_last() {
        let model = MockModelClient::new().reply("a").reply("b");

        assert_eq!(model.complete(&prompt()).await.unwrap(), "a");
        assert_eq!(model.complete(&prompt()).await.unwrap(), "b");
        assert_eq!(model.complete(&prompt()).await.unwrap(), "b");
        assert_eq!(model.call_count(), 3);
    }

    #[tokio::test]
    async fn empty_script_fails() {
        let model = MockModelClient::new();
        assert!(model.complete(&prompt()).await.is_err());
        assert_eq!(model.prompts()[0].text, "hello");
    }
}
