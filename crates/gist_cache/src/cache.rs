//! Summary cache implementation.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Cache entry with value and expiration.
#[derive(Debug, Clone, Getters)]
pub struct CacheEntry {
    /// Cached record, opaque to the cache
    value: JsonValue,
    /// Original URL, kept for inspection
    url: String,
    created_at: Instant,
    ttl: Duration,
}

impl CacheEntry {
    /// Check if this entry is expired.
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.ttl
    }

    /// Get remaining time until expiration.
    pub fn time_remaining(&self) -> Option<Duration> {
        self.ttl.checked_sub(self.created_at.elapsed())
    }
}

/// Configuration for the summary cache.
#[derive(
    Debug, Clone, Serialize, Deserialize, Getters, derive_setters::Setters, derive_builder::Builder,
)]
#[setters(prefix = "with_")]
pub struct CacheConfig {
    /// Whether caching is enabled
    #[serde(default = "default_enabled")]
    enabled: bool,

    /// Maximum number of cached summaries
    #[serde(default = "default_max_entries")]
    max_entries: usize,

    /// Entry lifetime in seconds
    #[serde(default = "default_ttl_secs")]
    ttl_secs: u64,
}

fn default_enabled() -> bool {
    true
}

fn default_max_entries() -> usize {
    100
}

fn default_ttl_secs() -> u64 {
    86_400 // 24 hours
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            max_entries: default_max_entries(),
            ttl_secs: default_ttl_secs(),
        }
    }
}

/// Point-in-time cache statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct CacheStats {
    /// Live (unexpired) entries
    count: usize,
    /// Configured capacity
    max_entries: usize,
    /// Age of the oldest live entry in seconds
    oldest_age_secs: Option<u64>,
    /// Age of the newest live entry in seconds
    newest_age_secs: Option<u64>,
}

/// Cache of summarization results keyed by article URL.
///
/// Keys are sha256 digests of the URL, so arbitrary-length URLs map to
/// fixed-size keys. Entries expire after the configured TTL; at capacity
/// the least recently used entry is evicted first.
///
/// # Example
///
/// ```
/// use gist_cache::{CacheConfig, SummaryCache};
/// use serde_json::json;
///
/// let mut cache = SummaryCache::new(CacheConfig::default());
/// cache.insert("https://example.com/article", json!({"summary": "short"}));
///
/// assert_eq!(
///     cache.get("https://example.com/article"),
///     Some(json!({"summary": "short"}))
/// );
/// assert_eq!(cache.get("https://example.com/other"), None);
/// ```
#[derive(Debug)]
pub struct SummaryCache {
    config: CacheConfig,
    entries: HashMap<String, CacheEntry>,
    access_order: Vec<String>,
}

impl SummaryCache {
    /// Create a new summary cache with configuration.
    pub fn new(config: CacheConfig) -> Self {
        tracing::debug!(
            enabled = config.enabled,
            max_entries = config.max_entries,
            ttl_secs = config.ttl_secs,
            "Creating new SummaryCache"
        );
        Self {
            config,
            entries: HashMap::new(),
            access_order: Vec::new(),
        }
    }

    /// Cache a summary record for a URL, replacing any previous entry.
    #[tracing::instrument(skip(self, value), fields(cache_size = self.entries.len()))]
    pub fn insert(&mut self, url: &str, value: JsonValue) {
        if !self.config.enabled {
            tracing::debug!("Cache disabled, skipping insert");
            return;
        }

        let key = hash_url(url);

        // Evict if at capacity
        if self.entries.len() >= self.config.max_entries && !self.entries.contains_key(&key) {
            self.evict_lru();
        }

        // Track access order for LRU
        if let Some(pos) = self.access_order.iter().position(|k| k == &key) {
            self.access_order.remove(pos);
        }
        self.access_order.push(key.clone());

        let entry = CacheEntry {
            value,
            url: url.to_string(),
            created_at: Instant::now(),
            ttl: Duration::from_secs(self.config.ttl_secs),
        };

        tracing::debug!(ttl = ?entry.ttl, "Inserted entry into cache");
        self.entries.insert(key, entry);
    }

    /// Get the cached summary for a URL.
    ///
    /// Returns None if:
    /// - No entry exists for the URL
    /// - The entry is expired (it is removed on the way out)
    /// - The cache is disabled
    #[tracing::instrument(skip(self), fields(cache_size = self.entries.len()))]
    pub fn get(&mut self, url: &str) -> Option<JsonValue> {
        if !self.config.enabled {
            tracing::debug!("Cache disabled, returning None");
            return None;
        }

        let key = hash_url(url);

        let entry = self.entries.get(&key)?;
        if entry.is_expired() {
            tracing::debug!("Cache entry expired, removing");
            self.entries.remove(&key);
            if let Some(pos) = self.access_order.iter().position(|k| k == &key) {
                self.access_order.remove(pos);
            }
            return None;
        }

        // Update access order for LRU
        if let Some(pos) = self.access_order.iter().position(|k| k == &key) {
            let key_clone = self.access_order.remove(pos);
            self.access_order.push(key_clone);
        }

        let entry = self.entries.get(&key)?;
        tracing::debug!(time_remaining = ?entry.time_remaining(), "Cache hit");
        Some(entry.value.clone())
    }

    /// Remove expired entries from the cache.
    pub fn cleanup_expired(&mut self) -> usize {
        let before = self.entries.len();

        self.entries.retain(|key, entry| {
            let keep = !entry.is_expired();
            if !keep
                && let Some(pos) = self.access_order.iter().position(|k| k == key)
            {
                self.access_order.remove(pos);
            }
            keep
        });

        let removed = before - self.entries.len();
        if removed > 0 {
            tracing::info!(
                removed,
                remaining = self.entries.len(),
                "Cleaned up expired cache entries"
            );
        }
        removed
    }

    /// Clear all cached summaries.
    pub fn clear(&mut self) {
        let count = self.entries.len();
        self.entries.clear();
        self.access_order.clear();
        tracing::info!(cleared = count, "Cleared summary cache");
    }

    /// Statistics over the live entries.
    pub fn stats(&self) -> CacheStats {
        let ages: Vec<u64> = self
            .entries
            .values()
            .filter(|entry| !entry.is_expired())
            .map(|entry| entry.created_at.elapsed().as_secs())
            .collect();

        CacheStats {
            count: ages.len(),
            max_entries: self.config.max_entries,
            oldest_age_secs: ages.iter().max().copied(),
            newest_age_secs: ages.iter().min().copied(),
        }
    }

    /// Get number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Evict the least recently used entry.
    fn evict_lru(&mut self) {
        if let Some(key) = self.access_order.first().cloned() {
            if let Some(entry) = self.entries.remove(&key) {
                tracing::debug!(url = %entry.url, "Evicting LRU entry");
            }
            self.access_order.remove(0);
        }
    }
}

impl Default for SummaryCache {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}

fn hash_url(url: &str) -> String {
    let digest = Sha256::digest(url.as_bytes());
    format!("{:x}", digest)
}
