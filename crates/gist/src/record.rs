//! Summary records as returned to the caller and stored in the cache.

use gist_core::{Article, SummaryResult};
use serde::{Deserialize, Serialize};

/// Article metadata carried alongside a cached summary.
///
/// Extractor output passes through untouched; the core never interprets
/// the site name or reading time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleMeta {
    /// Article title
    pub title: String,
    /// Canonical URL, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Publishing site name from the extractor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    /// Estimated reading time in minutes from the extractor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading_time: Option<u32>,
}

impl From<&Article> for ArticleMeta {
    fn from(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            url: article.url.clone(),
            site_name: article.site_name.clone(),
            reading_time: article.reading_time,
        }
    }
}

/// One completed summarization, fresh or served from cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRecord {
    /// Metadata of the summarized article
    pub article: ArticleMeta,
    /// The summary itself
    pub summary: SummaryResult,
    /// Name of the provider that produced the summary
    pub provider: String,
    /// Whether this record was served from the cache
    pub from_cache: bool,
    /// Tokens the original request consumed
    #[serde(default)]
    pub tokens_used: u64,
    /// Retries the original request performed
    #[serde(default)]
    pub retries: u32,
}
