//! Summary provider seam.
//!
//! The orchestrator talks to an abstract provider, so the Groq client can
//! be swapped for a test double or a future second backend. The cleanup
//! capability is declared on the trait and decided at construction time,
//! never probed at call time.

use async_trait::async_trait;
use derive_getters::Getters;
use gist_client::{ClientConfig, GroqClient, StatsSnapshot};
use gist_core::{Article, SummaryResult, VariationSettings};
use gist_error::{ApiResult, GistResult};
use gist_prompt::request_spec;
use tracing::instrument;

/// What a provider hands back for one summarized article.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ProviderSummary {
    /// Parsed summary, or the defined fallback
    summary: SummaryResult,
    /// Tokens the request consumed
    tokens_used: u64,
    /// Retries performed before success
    retries: u32,
}

impl ProviderSummary {
    /// Assemble a provider summary from its parts.
    pub fn new(summary: SummaryResult, tokens_used: u64, retries: u32) -> Self {
        Self {
            summary,
            tokens_used,
            retries,
        }
    }
}

/// A summarization backend.
///
/// Failure is a value: `summarize` returns the client's terminal
/// [`ApiError`](gist_error::ApiError) so the orchestrator can map it to a
/// stable user-facing error code.
#[async_trait]
pub trait SummaryProvider: Send + Sync {
    /// Human-readable provider name, recorded in summary records.
    fn name(&self) -> &str;

    /// Whether the provider is configured and ready to serve requests.
    async fn is_available(&self) -> bool;

    /// Summarize one article under the given resolved settings.
    async fn summarize(
        &self,
        article: &Article,
        settings: &VariationSettings,
    ) -> ApiResult<ProviderSummary>;

    /// Whether this provider holds resources worth releasing on failure.
    ///
    /// Decided at construction; the orchestrator calls [`cleanup`]
    /// after a failed request only when this returns true.
    ///
    /// [`cleanup`]: SummaryProvider::cleanup
    fn supports_cleanup(&self) -> bool {
        false
    }

    /// Release provider resources after a failure.
    async fn cleanup(&self) {}
}

/// Groq-backed summary provider.
///
/// Thin wrapper tying the prompt engine to the rate-limited client: it
/// derives a request spec from the settings, runs the client, and
/// flattens the outcome into the provider contract.
#[derive(Debug, Clone)]
pub struct GroqProvider {
    client: GroqClient,
}

impl GroqProvider {
    /// Create a provider with an explicit API key.
    pub fn new(api_key: impl Into<String>, config: ClientConfig) -> Self {
        Self {
            client: GroqClient::new(api_key, config),
        }
    }

    /// Create a provider reading the key from `GROQ_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns an error when the variable is unset.
    pub fn from_env(config: ClientConfig) -> GistResult<Self> {
        Ok(Self {
            client: GroqClient::from_env(config)?,
        })
    }

    /// The underlying rate-limited client.
    pub fn client(&self) -> &GroqClient {
        &self.client
    }

    /// Cumulative accounting from the underlying client.
    pub async fn stats(&self) -> StatsSnapshot {
        self.client.stats().await
    }
}

#[async_trait]
impl SummaryProvider for GroqProvider {
    fn name(&self) -> &str {
        "Groq"
    }

    async fn is_available(&self) -> bool {
        // Key presence was decided at construction.
        true
    }

    #[instrument(skip(self, article, settings), fields(title = %article.title))]
    async fn summarize(
        &self,
        article: &Article,
        settings: &VariationSettings,
    ) -> ApiResult<ProviderSummary> {
        let spec = request_spec(settings);
        match self.client.summarize(article, &spec).await {
            Ok(response) => Ok(ProviderSummary::new(
                response.parsed().clone(),
                *response.tokens_used(),
                *response.retries(),
            )),
            Err(failure) => Err(failure.error().clone()),
        }
    }
}
