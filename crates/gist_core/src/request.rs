//! Derived request specification.

use serde::{Deserialize, Serialize};

/// Complete model request parameters derived from one settings record.
///
/// Ephemeral: built once per summarization attempt and never cached
/// across articles, since temperature and output budget vary per call.
///
/// # Examples
///
/// ```
/// use gist_core::RequestSpec;
///
/// let spec = RequestSpec {
///     system_prompt: "You are a summarizer.".to_string(),
///     temperature: 0.7,
///     max_output_tokens: 200,
/// };
///
/// assert!(spec.temperature >= 0.0 && spec.temperature <= 2.0);
/// assert!(spec.max_output_tokens > 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestSpec {
    /// Fully rendered system prompt
    pub system_prompt: String,
    /// Sampling temperature, within [0, 2]
    pub temperature: f32,
    /// Output token budget, always positive
    pub max_output_tokens: u32,
}
