//! Shared test doubles for orchestrator tests.

#![allow(dead_code)]

use async_trait::async_trait;
use gist::{
    ApiError, ApiErrorKind, ApiResult, Article, ProviderSummary, SummaryProvider, SummaryResult,
    VariationSettings,
};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Build a provider summary with the given text and fixed accounting.
pub fn summary(text: &str) -> ProviderSummary {
    ProviderSummary::new(
        SummaryResult {
            summary: text.to_string(),
            key_points: vec!["a point".to_string()],
            tone: "informative".to_string(),
        },
        1700,
        0,
    )
}

/// Scripted provider with call, cleanup, and settings capture counters.
pub struct MockProvider {
    available: bool,
    cleanup_supported: bool,
    results: Mutex<VecDeque<ApiResult<ProviderSummary>>>,
    calls: AtomicUsize,
    cleanups: AtomicUsize,
    seen_settings: Mutex<Vec<VariationSettings>>,
}

impl MockProvider {
    pub fn with_results(results: Vec<ApiResult<ProviderSummary>>) -> Self {
        Self {
            available: true,
            cleanup_supported: false,
            results: Mutex::new(results.into()),
            calls: AtomicUsize::new(0),
            cleanups: AtomicUsize::new(0),
            seen_settings: Mutex::new(Vec::new()),
        }
    }

    pub fn succeeding(texts: &[&str]) -> Self {
        Self::with_results(texts.iter().map(|text| Ok(summary(text))).collect())
    }

    pub fn failing(kind: ApiErrorKind) -> Self {
        Self::with_results(vec![Err(ApiError::new(kind))])
    }

    pub fn unavailable() -> Self {
        let mut provider = Self::with_results(Vec::new());
        provider.available = false;
        provider
    }

    pub fn supporting_cleanup(mut self) -> Self {
        self.cleanup_supported = true;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn cleanup_count(&self) -> usize {
        self.cleanups.load(Ordering::SeqCst)
    }

    /// Settings the orchestrator resolved for each call, in order.
    pub fn seen_settings(&self) -> Vec<VariationSettings> {
        self.seen_settings.lock().unwrap().clone()
    }
}

#[async_trait]
impl SummaryProvider for MockProvider {
    fn name(&self) -> &str {
        "Mock"
    }

    async fn is_available(&self) -> bool {
        self.available
    }

    async fn summarize(
        &self,
        _article: &Article,
        settings: &VariationSettings,
    ) -> ApiResult<ProviderSummary> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen_settings.lock().unwrap().push(*settings);
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(summary("unscripted")))
    }

    fn supports_cleanup(&self) -> bool {
        self.cleanup_supported
    }

    async fn cleanup(&self) {
        self.cleanups.fetch_add(1, Ordering::SeqCst);
    }
}
