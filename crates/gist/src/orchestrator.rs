//! Summarization orchestrator.
//!
//! Thin glue over the provider and store seams: cache lookup, settings
//! merge, provider invocation, record assembly, and error-code mapping.
//! All failure paths produce an [`ErrorReport`] value; nothing panics
//! across this boundary.

use crate::config::GistConfig;
use crate::provider::{GroqProvider, SummaryProvider};
use crate::record::SummaryRecord;
use crate::report::ErrorReport;
use crate::store::SummaryStore;
use gist_core::{Article, SettingsPatch, VariationSettings};
use gist_error::StoreResult;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Orchestrates one summarization request end to end.
///
/// Generic over the store so the extension host can supply its own
/// persistence; the provider is optional because the user may not have
/// configured a key yet.
pub struct Summarizer<S> {
    provider: Option<Arc<dyn SummaryProvider>>,
    store: S,
}

impl<S: SummaryStore> Summarizer<S> {
    /// Create a summarizer over an explicit provider and store.
    pub fn new(provider: Option<Arc<dyn SummaryProvider>>, store: S) -> Self {
        Self { provider, store }
    }

    /// Create a Groq-backed summarizer from configuration.
    ///
    /// The provider is absent when `GROQ_API_KEY` is unset; summarize
    /// calls then report [`ErrorCode::NoProvider`](crate::ErrorCode).
    pub fn with_groq(config: &GistConfig, store: S) -> Self {
        let provider = GroqProvider::from_env(config.client.clone())
            .ok()
            .map(|provider| Arc::new(provider) as Arc<dyn SummaryProvider>);
        if provider.is_none() {
            warn!("GROQ_API_KEY not set; summarization unavailable until configured");
        }
        Self::new(provider, store)
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Summarize an article, serving from cache when possible.
    ///
    /// Stored default settings merge under `overrides` field by field.
    /// With `force_refresh` the cache is bypassed (the fresh result still
    /// replaces the cached record). Store failures degrade to a cache
    /// miss or an unsaved record rather than failing the request.
    #[instrument(skip(self, article, overrides), fields(title = %article.title, force_refresh))]
    pub async fn summarize(
        &self,
        article: &Article,
        overrides: &SettingsPatch,
        force_refresh: bool,
    ) -> Result<SummaryRecord, ErrorReport> {
        if !force_refresh
            && let Some(url) = &article.url
        {
            match self.store.cached_summary(url).await {
                Ok(Some(mut record)) => {
                    info!("Returning cached summary");
                    record.from_cache = true;
                    return Ok(record);
                }
                Ok(None) => {}
                Err(error) => warn!(error = %error, "Cache lookup failed, summarizing fresh"),
            }
        }

        let Some(provider) = &self.provider else {
            return Err(ErrorReport::no_provider());
        };
        if !provider.is_available().await {
            return Err(ErrorReport::no_provider());
        }

        let stored = match self.store.settings().await {
            Ok(stored) => stored,
            Err(error) => {
                warn!(error = %error, "Failed to load stored settings, using defaults");
                SettingsPatch::default()
            }
        };
        let settings = VariationSettings::resolve(&stored, overrides);

        debug!(provider = provider.name(), "Summarizing");
        let produced = match provider.summarize(article, &settings).await {
            Ok(produced) => produced,
            Err(error) => {
                if provider.supports_cleanup() {
                    provider.cleanup().await;
                }
                return Err(ErrorReport::from_api_error(&error));
            }
        };

        let record = SummaryRecord {
            article: article.into(),
            summary: produced.summary().clone(),
            provider: provider.name().to_string(),
            from_cache: false,
            tokens_used: *produced.tokens_used(),
            retries: *produced.retries(),
        };

        if let Some(url) = &article.url
            && let Err(error) = self.store.cache_summary(url, &record).await
        {
            warn!(error = %error, "Failed to cache summary");
        }

        Ok(record)
    }

    /// Cached record for a URL, marked as served from cache.
    pub async fn cached(&self, url: &str) -> Option<SummaryRecord> {
        match self.store.cached_summary(url).await {
            Ok(Some(mut record)) => {
                record.from_cache = true;
                Some(record)
            }
            Ok(None) => None,
            Err(error) => {
                warn!(error = %error, "Cache lookup failed");
                None
            }
        }
    }

    /// Drop every cached summary.
    pub async fn clear_cache(&self) -> StoreResult<()> {
        self.store.clear_cache().await
    }
}
