//! ai::flows
//!
//! The two prompt flows: report generation and report summarization.
//!
//! Each flow renders a fixed template with its input interpolated once,
//! calls the model, and reads exactly one string field from the JSON answer.
//!
//! | Flow      | Input            | Output field      |
//! |-----------|------------------|-------------------|
//! | generate  | `seleniumOutput` | `report`          |
//! | summarize | `report`         | `jiraDescription` |

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use super::template::render;
use super::traits::{GenerationError, ModelClient, StructuredPrompt};

const GENERATE_REPORT_TEMPLATE: &str = include_str!("../../prompts/generate_report.txt");
const SUMMARIZE_REPORT_TEMPLATE: &str = include_str!("../../prompts/summarize_report.txt");

#[derive(Debug, Deserialize)]
struct GenerateReportOutput {
    report: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SummarizeReportOutput {
    jira_description: String,
}

/// Build the report-generation prompt.
pub fn generate_report_prompt(selenium_output: &str) -> StructuredPrompt {
    StructuredPrompt {
        name: "generateReportFromSeleniumOutput",
        text: render(
            GENERATE_REPORT_TEMPLATE,
            &[("seleniumOutput", selenium_output)],
        ),
        output_field: "report",
        output_description: "The concise report summarizing issues and potential root causes.",
    }
}

/// Build the summarization prompt.
pub fn summarize_report_prompt(report: &str) -> StructuredPrompt {
    StructuredPrompt {
        name: "summarizeReportForJira",
        text: render(SUMMARIZE_REPORT_TEMPLATE, &[("report", report)]),
        output_field: "jiraDescription",
        output_description: "A Jira-compatible issue description summarizing the report.",
    }
}

/// Turn raw Selenium output into a prose report.
///
/// The caller is responsible for rejecting empty input.
pub async fn generate_report(
    model: &dyn ModelClient,
    selenium_output: &str,
) -> Result<String, GenerationError> {
    let prompt = generate_report_prompt(selenium_output);
    let output: GenerateReportOutput = run(model, &prompt).await?;
    Ok(output.report)
}

/// Condense a report into an issue-title-length summary.
pub async fn summarize_report(
    model: &dyn ModelClient,
    report: &str,
) -> Result<String, GenerationError> {
    let prompt = summarize_report_prompt(report);
    let output: SummarizeReportOutput = run(model, &prompt).await?;
    Ok(output.jira_description)
}

async fn run<T: DeserializeOwned>(
    model: &dyn ModelClient,
    prompt: &StructuredPrompt,
) -> Result<T, GenerationError> {
    debug!(prompt = prompt.name, model = model.name(), chars = prompt.text.chars().count(), "calling model");

    let raw = model.complete(prompt).await.map_err(|e| {
        debug!(prompt = prompt.name, detail = e.detail(), "model call failed");
        e
    })?;

    parse_output(&raw).map_err(|e| {
        debug!(prompt = prompt.name, detail = e.detail(), "model output rejected");
        e
    })
}

/// Parse the model's answer, tolerating prose or code fences around the object.
fn parse_output<T: DeserializeOwned>(raw: &str) -> Result<T, GenerationError> {
    let json = extract_json_object(raw)?;
    serde_json::from_str(json)
        .map_err(|e| GenerationError::new(format!("malformed model output: {}", e)))
}

fn extract_json_object(content: &str) -> Result<&str, GenerationError> {
    let trimmed = content.trim();
    if serde_json::from_str::<serde_json::Value>(trimmed).is_ok() {
        return Ok(trimmed);
    }

    let start = trimmed
        .find('{')
        .ok_or_else(|| GenerationError::new("model output did not include a JSON object"))?;
    let end = trimmed
        .rfind('}')
        .filter(|end| *end > start)
        .ok_or_else(|| GenerationError::new("model output did not include a JSON object end"))?;

    Ok(&trimmed[start..=end])
}
