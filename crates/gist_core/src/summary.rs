//! Summary output type with parse fallback.

use crate::truncate_chars;
use serde::{Deserialize, Deserializer, Serialize};

/// Maximum characters of raw model output carried into the fallback summary.
pub const FALLBACK_SUMMARY_CHARS: usize = 500;

/// Tone reported when the model did not supply one.
pub const FALLBACK_TONE: &str = "informative";

/// Structured summary produced by the model.
///
/// The model is instructed to emit strict JSON with these fields. Parsing
/// is total: malformed output degrades to a defined fallback instead of
/// an error, so a summarization that reached the model always yields a
/// result.
///
/// # Examples
///
/// ```
/// use gist_core::SummaryResult;
///
/// let parsed = SummaryResult::parse_or_fallback(
///     r#"{"summary":"Short and sharp.","keyPoints":["one","two"],"tone":"news"}"#,
/// );
/// assert_eq!(parsed.summary, "Short and sharp.");
/// assert_eq!(parsed.key_points.len(), 2);
///
/// let degraded = SummaryResult::parse_or_fallback("The model rambled instead.");
/// assert_eq!(degraded.summary, "The model rambled instead.");
/// assert!(degraded.key_points.is_empty());
/// assert_eq!(degraded.tone, "informative");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    /// The summary text
    pub summary: String,
    /// Supporting bullet points, possibly empty
    #[serde(default, rename = "keyPoints", deserialize_with = "lenient_points")]
    pub key_points: Vec<String>,
    /// Detected tone of the source article
    #[serde(default = "default_tone")]
    pub tone: String,
}

fn default_tone() -> String {
    FALLBACK_TONE.to_string()
}

/// Accept a missing, null, or wrong-typed `keyPoints` field as empty
/// rather than failing the whole parse; non-string members are dropped.
fn lenient_points<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    })
}

impl SummaryResult {
    /// Parse model output, degrading to [`SummaryResult::fallback`] when
    /// the content is not the expected JSON shape or lacks a summary.
    pub fn parse_or_fallback(content: &str) -> Self {
        match serde_json::from_str::<SummaryResult>(content) {
            Ok(parsed) if !parsed.summary.is_empty() => Self {
                tone: if parsed.tone.is_empty() {
                    default_tone()
                } else {
                    parsed.tone
                },
                ..parsed
            },
            _ => Self::fallback(content),
        }
    }

    /// The defined degradation: raw content truncated to
    /// [`FALLBACK_SUMMARY_CHARS`], no key points, informative tone.
    pub fn fallback(raw: &str) -> Self {
        Self {
            summary: truncate_chars(raw, FALLBACK_SUMMARY_CHARS).to_string(),
            key_points: Vec::new(),
            tone: default_tone(),
        }
    }
}
