//! Storage seam for settings and cached summaries.
//!
//! In the extension the collaborator is browser storage; here the
//! contract is an async trait with an in-memory implementation built on
//! [`SummaryCache`]. Store failures never abort a summarization: the
//! orchestrator degrades to a cache miss or an unsaved record.

use crate::record::SummaryRecord;
use async_trait::async_trait;
use gist_cache::{CacheConfig, CacheStats, SummaryCache};
use gist_core::SettingsPatch;
use gist_error::{StoreError, StoreErrorKind, StoreResult};
use tokio::sync::Mutex;
use tracing::debug;

/// Persistent settings and per-URL summary cache.
#[async_trait]
pub trait SummaryStore: Send + Sync {
    /// Stored user default settings.
    async fn settings(&self) -> StoreResult<SettingsPatch>;

    /// Merge the given fields into the stored settings.
    ///
    /// Fields left `None` in the patch keep their stored value.
    async fn save_settings(&self, patch: &SettingsPatch) -> StoreResult<()>;

    /// Cached summary record for a URL, if present and fresh.
    async fn cached_summary(&self, url: &str) -> StoreResult<Option<SummaryRecord>>;

    /// Cache a summary record for a URL.
    async fn cache_summary(&self, url: &str, record: &SummaryRecord) -> StoreResult<()>;

    /// Drop every cached summary.
    async fn clear_cache(&self) -> StoreResult<()>;

    /// Statistics over the summary cache.
    async fn cache_stats(&self) -> StoreResult<CacheStats>;
}

/// In-memory store backed by [`SummaryCache`].
///
/// Suitable for tests and for hosts without durable storage; the
/// extension swaps in a browser-storage implementation behind the same
/// trait.
#[derive(Debug, Default)]
pub struct MemoryStore {
    settings: Mutex<SettingsPatch>,
    cache: Mutex<SummaryCache>,
}

impl MemoryStore {
    /// Create a store with an empty settings patch and the given cache
    /// configuration.
    pub fn new(cache_config: CacheConfig) -> Self {
        Self {
            settings: Mutex::new(SettingsPatch::default()),
            cache: Mutex::new(SummaryCache::new(cache_config)),
        }
    }

    /// Create a store seeded with stored user defaults.
    pub fn with_settings(settings: SettingsPatch, cache_config: CacheConfig) -> Self {
        Self {
            settings: Mutex::new(settings),
            cache: Mutex::new(SummaryCache::new(cache_config)),
        }
    }
}

#[async_trait]
impl SummaryStore for MemoryStore {
    async fn settings(&self) -> StoreResult<SettingsPatch> {
        Ok(self.settings.lock().await.clone())
    }

    async fn save_settings(&self, patch: &SettingsPatch) -> StoreResult<()> {
        let mut stored = self.settings.lock().await;
        if let Some(tone) = &patch.tone {
            stored.tone = Some(tone.clone());
        }
        if let Some(length) = &patch.length {
            stored.length = Some(length.clone());
        }
        if let Some(focus) = &patch.focus {
            stored.focus = Some(focus.clone());
        }
        if let Some(creativity) = &patch.creativity {
            stored.creativity = Some(creativity.clone());
        }
        debug!("Saved settings");
        Ok(())
    }

    async fn cached_summary(&self, url: &str) -> StoreResult<Option<SummaryRecord>> {
        let mut cache = self.cache.lock().await;
        match cache.get(url) {
            Some(value) => {
                let record = serde_json::from_value(value)
                    .map_err(|e| StoreError::new(StoreErrorKind::Decode(e.to_string())))?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    async fn cache_summary(&self, url: &str, record: &SummaryRecord) -> StoreResult<()> {
        let value = serde_json::to_value(record)
            .map_err(|e| StoreError::new(StoreErrorKind::Encode(e.to_string())))?;
        self.cache.lock().await.insert(url, value);
        Ok(())
    }

    async fn clear_cache(&self) -> StoreResult<()> {
        self.cache.lock().await.clear();
        Ok(())
    }

    async fn cache_stats(&self) -> StoreResult<CacheStats> {
        Ok(self.cache.lock().await.stats())
    }
}
