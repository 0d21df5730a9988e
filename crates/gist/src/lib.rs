//! Gist - Stylistically-configurable article summarization
//!
//! Gist is the summarization core of a browser-reader extension: it turns
//! extracted article text into a short summary in a user-selected style,
//! through Groq's OpenAI-compatible chat-completions API, with per-URL
//! caching of results.
//!
//! # Features
//!
//! - **Prompt Engine**: deterministic request assembly from tone, length,
//!   focus, and creativity presets with documented fallbacks
//! - **Rate Limiting**: pre-emptive pacing against the request and token
//!   budgets advertised in response headers, plus retry with exponential
//!   backoff and jitter
//! - **Caching**: per-URL summary cache with TTL expiry and LRU eviction
//! - **Provider Seam**: async `SummaryProvider` trait with a declared
//!   cleanup capability, so the orchestrator never probes at call time
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use gist::{Article, GistConfig, MemoryStore, SettingsPatch, Summarizer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = GistConfig::load()?;
//!     let store = MemoryStore::new(config.cache.clone());
//!     let summarizer = Summarizer::with_groq(&config, store);
//!
//!     let article = Article::new("A headline", "The extracted article text...");
//!     match summarizer.summarize(&article, &SettingsPatch::default(), false).await {
//!         Ok(record) => println!("{}", record.summary.summary),
//!         Err(report) => eprintln!("{}: {}", report.code(), report.message()),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Gist is organized as a workspace with focused crates:
//!
//! - `gist_error` - Error types and retry classification
//! - `gist_core` - Core data types (Article, preset keys, SummaryResult)
//! - `gist_prompt` - Prompt configuration engine
//! - `gist_client` - Rate-limited Groq client
//! - `gist_cache` - Per-URL summary cache
//!
//! This crate (`gist`) adds the orchestrator, provider and storage seams,
//! configuration loading, and re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

// Re-export the workspace crates
pub use gist_cache::*;
pub use gist_client::*;
pub use gist_core::*;
pub use gist_error::*;
pub use gist_prompt::*;

mod config;
mod orchestrator;
mod provider;
mod record;
mod report;
mod store;

pub use config::GistConfig;
pub use orchestrator::Summarizer;
pub use provider::{GroqProvider, ProviderSummary, SummaryProvider};
pub use record::{ArticleMeta, SummaryRecord};
pub use report::{ErrorCode, ErrorReport};
pub use store::{MemoryStore, SummaryStore};
