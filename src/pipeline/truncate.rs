//! pipeline::truncate
//!
//! Description length policy.
//!
//! Jira descriptions are capped at [`MAX_DESCRIPTION_CHARS`] Unicode scalar
//! values. Longer reports are cut hard at the limit: no ellipsis, no word
//! boundary search.

/// Maximum description length, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 254;

/// Result of applying the length policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Truncated {
    /// Text to send
    pub text: String,
    /// Length of the input, in characters
    pub original_chars: usize,
    /// Whether the input was cut
    pub was_truncated: bool,
}

/// Cut `report` to at most `max_chars` characters.
pub fn truncate_chars(report: &str, max_chars: usize) -> Truncated {
    let original_chars = report.chars().count();
    if original_chars <= max_chars {
        return Truncated {
            text: report.to_string(),
            original_chars,
            was_truncated: false,
        };
    }

    // byte offset of the first character past the limit
    let end = report
        .char_indices()
        .nth(max_chars)
        .map(|(idx, _)| idx)
        .unwrap_or(report.len());

    Truncated {
        text: report[..end].to_string(),
        original_chars,
        was_truncated: true,
    }
}

/// Apply the description policy.
pub fn truncate_description(report: &str) -> Truncated {
    truncate_chars(report, MAX_DESCRIPTION_CHARS)
}
