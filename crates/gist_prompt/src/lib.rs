//! Prompt configuration engine for the Gist summarization library.
//!
//! Maps a resolved [`VariationSettings`](gist_core::VariationSettings)
//! record to a complete request specification: rendered system prompt,
//! sampling temperature, and output token budget. Driven by static preset
//! tables; unknown preset keys resolve to documented defaults upstream,
//! never to errors here.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod engine;
pub mod presets;

pub use engine::{
    MAX_CONTENT_CHARS, TRUNCATION_MARKER, build_system_prompt, build_user_prompt,
    max_output_tokens_for, request_spec, temperature_for,
};
