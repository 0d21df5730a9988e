//! Per-URL summary caching with TTL support.
//!
//! Caches summarization results keyed by article URL so revisiting a
//! page never costs a second API call within the expiry window. Entries
//! expire after a configurable TTL and the cache evicts its least
//! recently used entry at capacity.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cache;

pub use cache::{CacheConfig, CacheConfigBuilder, CacheEntry, CacheStats, SummaryCache};
