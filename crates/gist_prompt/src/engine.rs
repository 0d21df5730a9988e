//! Pure prompt assembly.
//!
//! Every function here is deterministic: the same settings and article
//! always produce byte-identical output. No I/O, no clock, no randomness.

use crate::presets;
use gist_core::{Article, CreativityKey, LengthKey, RequestSpec, VariationSettings, truncate_chars};
use tracing::instrument;

/// Longest article content embedded in a user prompt, in characters.
pub const MAX_CONTENT_CHARS: usize = 6000;

/// Marker appended when article content is cut at [`MAX_CONTENT_CHARS`].
pub const TRUNCATION_MARKER: &str = "...[truncated]";

/// Render the system prompt for one resolved settings record.
///
/// Interpolates the tone, length, and focus instructions plus the tone
/// preset's example summaries into a fixed template. The template pins
/// the output contract: honest, varied openings, strict JSON with
/// `summary`, `keyPoints`, and `tone` fields.
#[instrument(skip_all, fields(tone = %settings.tone, length = %settings.length))]
pub fn build_system_prompt(settings: &VariationSettings) -> String {
    let tone = presets::tone(settings.tone);
    let length = presets::length(settings.length);
    let focus = presets::focus(settings.focus);

    let examples = tone
        .examples
        .iter()
        .map(|example| format!("- \"{}\"", example))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"You are Gist, a brilliant summarizer with a knack for distilling articles into their essence.

STYLE: {}
LENGTH: {}
FOCUS: {}

Your summaries should be:
- HONEST: Never misrepresent or exaggerate the article's actual content
- VARIED: Don't start every summary the same way

You MUST respond with valid JSON in this exact format:
{{
  "summary": "Your summary here",
  "keyPoints": ["Key point 1", "Key point 2", "Key point 3"],
  "tone": "informative"
}}

The "tone" field should be one of: informative, opinion, news, technical, entertainment, analysis

Examples of GOOD summaries:
{}

BAD patterns to avoid:
- "This article discusses..." (boring)
- "In this piece, the author..." (too formal)
- "The key takeaways are..." (robotic)
- Opening with "[Topic] is..." or "[Topic] are..."

Keep key points brief (under 15 words each). Aim for 3 points unless the article only has 1-2 main ideas."#,
        tone.instruction, length.instruction, focus.instruction, examples
    )
}

/// Render the user prompt embedding the article title and content.
///
/// Content past [`MAX_CONTENT_CHARS`] characters is dropped and the
/// remainder suffixed with [`TRUNCATION_MARKER`] to keep the request
/// inside the model's context budget.
#[instrument(skip_all, fields(title = %article.title, content_len = article.content.len()))]
pub fn build_user_prompt(article: &Article) -> String {
    let clipped = truncate_chars(&article.content, MAX_CONTENT_CHARS);
    let content = if clipped.len() < article.content.len() {
        format!("{}{}", clipped, TRUNCATION_MARKER)
    } else {
        clipped.to_string()
    };

    format!(
        "Summarize this article:\n\nTITLE: {}\n\nCONTENT:\n{}",
        article.title, content
    )
}

/// Sampling temperature for an optional creativity key string.
///
/// Unknown or absent keys fall back to the balanced preset.
pub fn temperature_for(creativity: Option<&str>) -> f32 {
    presets::creativity(CreativityKey::resolve(creativity)).temperature
}

/// Output token budget for an optional length key string.
///
/// Unknown or absent keys fall back to the brief preset.
pub fn max_output_tokens_for(length: Option<&str>) -> u32 {
    presets::length(LengthKey::resolve(length)).max_output_tokens
}

/// Assemble the complete request specification for one settings record.
pub fn request_spec(settings: &VariationSettings) -> RequestSpec {
    RequestSpec {
        system_prompt: build_system_prompt(settings),
        temperature: presets::creativity(settings.creativity).temperature,
        max_output_tokens: presets::length(settings.length).max_output_tokens,
    }
}
