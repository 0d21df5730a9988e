//! Core data types for the Gist summarization library.
//!
//! This crate provides the foundation data types shared by the prompt
//! engine, the rate-limited client, and the orchestrator facade: article
//! input, variation preset keys with fallback resolution, the derived
//! request specification, and the summary output type with its defined
//! parse fallback.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod article;
mod request;
mod settings;
mod summary;
mod telemetry;
mod text;

pub use article::Article;
pub use request::RequestSpec;
pub use settings::{
    CreativityKey, FocusKey, LengthKey, SettingsPatch, ToneKey, VariationSettings,
};
pub use summary::{SummaryResult, FALLBACK_SUMMARY_CHARS, FALLBACK_TONE};
pub use telemetry::{init_telemetry, shutdown_telemetry};
pub use text::truncate_chars;
