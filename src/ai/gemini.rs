//! ai::gemini
//!
//! Google Gemini implementation of [`ModelClient`].
//!
//! # Design
//!
//! Uses the `generateContent` REST endpoint with a JSON response schema of
//! one required string property, so the answer is the JSON object the flows
//! expect. The API key travels in the `x-goog-api-key` header and is never
//! logged.
//!
//! # Example
//!
//! ```ignore
//! use jira_pilot::ai::gemini::GeminiClient;
//! use jira_pilot::ai::flows::generate_report;
//!
//! let model = GeminiClient::new(DEFAULT_AI_BASE_URL, "gemini-2.0-flash", api_key);
//! let report = generate_report(&model, &selenium_output).await?;
//! ```

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use super::traits::{GenerationError, ModelClient, StructuredPrompt};

/// Longest slice of an error body kept in failure details.
const MAX_ERROR_BODY_CHARS: usize = 300;

/// Gemini REST client.
pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

// Custom Debug to avoid exposing api_key
impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a client for `model` at `base_url`.
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            model: model.into(),
            api_key: api_key.into(),
        }
    }

    /// The configured model name.
    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

/// Request body for a single-field structured answer.
fn request_body(prompt: &StructuredPrompt) -> serde_json::Value {
    json!({
        "contents": [
            {
                "role": "user",
                "parts": [{ "text": prompt.text }]
            }
        ],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    prompt.output_field: {
                        "type": "STRING",
                        "description": prompt.output_description
                    }
                },
                "required": [prompt.output_field]
            }
        }
    })
}

#[async_trait]
impl ModelClient for GeminiClient {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn complete(&self, prompt: &StructuredPrompt) -> Result<String, GenerationError> {
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body(prompt))
            .send()
            .await
            .map_err(|e| GenerationError::new(format!("failed to call Gemini API: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let excerpt: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
            return Err(GenerationError::new(format!(
                "Gemini API request failed: HTTP {} {}",
                status, excerpt
            )));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::new(format!("failed to decode Gemini response: {}", e)))?;

        let text = parsed
            .candidates
            .unwrap_or_default()
            .into_iter()
            .flat_map(|c| c.content.and_then(|content| content.parts).unwrap_or_default())
            .filter_map(|part| part.text)
            .collect::<Vec<_>>()
            .join("");

        if text.trim().is_empty() {
            return Err(GenerationError::new("Gemini API returned no text content"));
        }

        Ok(text)
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    parts: Option<Vec<Part>>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}
