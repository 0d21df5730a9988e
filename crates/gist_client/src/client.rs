//! Rate-limited summarization client.

use crate::backoff::exponential_backoff;
use crate::config::ClientConfig;
use crate::limits::RateLimitState;
use crate::stats::{BatchEstimate, ClientStats, StatsSnapshot, estimate_batch};
use crate::transport::{ChatTransport, HttpTransport, RawResponse};
use crate::wire::{self, ChatMessage, ChatRequest, ChatResponse, ChatRole, ResponseFormat};
use derive_getters::Getters;
use gist_core::{Article, RequestSpec, SummaryResult};
use gist_error::{ApiError, ApiErrorKind, ApiResult, RetryClass, RetryableError};
use gist_prompt::build_user_prompt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, error, instrument, warn};

/// Successful summarization outcome.
#[derive(Debug, Clone, Getters)]
pub struct SummarizeResponse {
    /// Decoded response body, when the server returned valid JSON
    data: Option<ChatResponse>,
    /// Parsed summary, or the defined fallback
    parsed: SummaryResult,
    /// Tokens consumed, zero when the server omitted usage
    tokens_used: u64,
    /// Rate-limit view after this request
    rate_limits: RateLimitState,
    /// Retries performed before success
    retries: u32,
}

/// Failed summarization outcome.
///
/// A value, not a panic: carries the terminal error, the retries
/// performed, and the rate-limit view at failure time.
#[derive(Debug, Clone, Getters, derive_more::Display)]
#[display("{} after {} retries", error, retries)]
pub struct SummarizeFailure {
    /// Terminal error
    error: ApiError,
    /// Rate-limit view at failure time
    rate_limits: RateLimitState,
    /// Retries performed before giving up
    retries: u32,
}

/// Outcome of a single attempt inside the retry loop.
enum Attempt {
    Success(Box<SummarizeResponse>),
    Retry { error: ApiError, delay: Duration },
    Fatal(ApiError),
}

/// Rate-limit view and accounting shared by all clones of a client.
#[derive(Debug, Default)]
struct ClientState {
    limits: RateLimitState,
    stats: ClientStats,
}

/// Rate-limited Groq chat client.
///
/// Paces requests pre-emptively against the server-advertised request
/// and token budgets, retries transient failures with exponential
/// backoff plus jitter, and accounts every request for its lifetime.
/// Cheap to clone; clones share the transport and state, so concurrent
/// `summarize` calls see one coherent rate-limit view.
#[derive(Debug, Clone)]
pub struct GroqClient {
    transport: Arc<dyn ChatTransport>,
    config: ClientConfig,
    state: Arc<Mutex<ClientState>>,
}

impl GroqClient {
    /// Creates a client with an explicit API key.
    pub fn new(api_key: impl Into<String>, config: ClientConfig) -> Self {
        Self::with_transport(Arc::new(HttpTransport::new(api_key.into())), config)
    }

    /// Creates a client reading the key from `GROQ_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiErrorKind::MissingApiKey`] when the variable is unset.
    pub fn from_env(config: ClientConfig) -> ApiResult<Self> {
        let api_key = std::env::var("GROQ_API_KEY")
            .map_err(|_| ApiError::new(ApiErrorKind::MissingApiKey))?;
        Ok(Self::new(api_key, config))
    }

    /// Creates a client over a custom transport.
    pub fn with_transport(transport: Arc<dyn ChatTransport>, config: ClientConfig) -> Self {
        debug!(
            model = %config.model(),
            max_retries = *config.max_retries(),
            "Creating Groq client"
        );
        Self {
            transport,
            config,
            state: Arc::new(Mutex::new(ClientState::default())),
        }
    }

    /// Configuration in effect.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Summarize one article with pacing and bounded retries.
    ///
    /// Sleeps out the pacing delay derived from the current rate-limit
    /// view, then attempts the request up to `max_retries + 1` times.
    /// Rate-limit rejections wait for the longer of backoff and the
    /// server-advertised reset; other transient failures use pure
    /// backoff. The failure arm is a value carrying the terminal error,
    /// the retry count, and a rate-limit snapshot.
    #[instrument(skip(self, article, spec), fields(model = %self.config.model(), title = %article.title))]
    pub async fn summarize(
        &self,
        article: &Article,
        spec: &RequestSpec,
    ) -> Result<SummarizeResponse, SummarizeFailure> {
        let delay = self.state.lock().await.limits.pacing_delay();
        if !delay.is_zero() {
            debug!(delay_ms = delay.as_millis() as u64, "Pacing before request");
            tokio::time::sleep(delay).await;
        }

        let request = match self.build_request(article, spec) {
            Ok(request) => request,
            Err(error) => return Err(self.fail(error, 0).await),
        };

        let max_retries = *self.config.max_retries();
        let mut retries = 0u32;
        let mut last_error: Option<ApiError> = None;

        for attempt in 0..=max_retries {
            match self.attempt(&request, attempt, retries).await {
                Attempt::Success(response) => return Ok(*response),
                Attempt::Retry { error, delay } => {
                    retries += 1;
                    warn!(
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %error,
                        "Retrying chat completion"
                    );
                    last_error = Some(error);
                    tokio::time::sleep(delay).await;
                }
                Attempt::Fatal(error) => {
                    last_error = Some(error);
                    break;
                }
            }
        }

        let error = last_error.unwrap_or_else(|| {
            ApiError::new(ApiErrorKind::Transport(
                "request loop ended without a response".to_string(),
            ))
        });
        Err(self.fail(error, retries).await)
    }

    /// Current accounting snapshot with the rate-limit view.
    pub async fn stats(&self) -> StatsSnapshot {
        let state = self.state.lock().await;
        state.stats.snapshot(state.limits)
    }

    /// Current rate-limit view.
    pub async fn rate_limits(&self) -> RateLimitState {
        self.state.lock().await.limits
    }

    /// Project wall-clock time for a batch of `requests` summarizations
    /// under the current token limit.
    pub async fn estimate_batch_time(&self, requests: u32) -> BatchEstimate {
        let limits = self.rate_limits().await;
        estimate_batch(requests, limits.limit_tokens)
    }

    /// Run one attempt: execute the request, fold headers into the
    /// rate-limit view, and classify the outcome.
    async fn attempt(&self, request: &ChatRequest, attempt: u32, retries_so_far: u32) -> Attempt {
        let max_retries = *self.config.max_retries();

        let raw = match self.transport.execute(request).await {
            Ok(raw) => raw,
            Err(error) => {
                if attempt < max_retries {
                    self.state.lock().await.stats.total_retries += 1;
                    return Attempt::Retry {
                        error,
                        delay: self.backoff(attempt),
                    };
                }
                return Attempt::Fatal(error);
            }
        };

        let status = raw.status();
        if (200..300).contains(&status) {
            return Attempt::Success(Box::new(self.accept(&raw, retries_so_far).await));
        }

        let message = wire::error_message(raw.body(), status);
        let error = ApiError::new(ApiErrorKind::from_status(status, message));

        // Headers on error responses still carry the freshest budget view.
        let mut state = self.state.lock().await;
        state.limits.update_from_headers(raw.headers());

        if error.is_retryable() && attempt < max_retries {
            state.stats.total_retries += 1;
            let delay = match error.retry_class() {
                RetryClass::RateLimited => state.limits.retry_after(self.backoff(attempt)),
                _ => self.backoff(attempt),
            };
            return Attempt::Retry { error, delay };
        }

        Attempt::Fatal(error)
    }

    /// Fold a successful response into the state and build the outcome.
    async fn accept(&self, raw: &RawResponse, retries: u32) -> SummarizeResponse {
        let (data, parsed, tokens_used) = match serde_json::from_str::<ChatResponse>(raw.body()) {
            Ok(response) => {
                let tokens_used = response.total_tokens();
                let parsed = match response.content() {
                    Some(content) => SummaryResult::parse_or_fallback(content),
                    None => SummaryResult::fallback(""),
                };
                (Some(response), parsed, tokens_used)
            }
            Err(_) => (None, SummaryResult::fallback(raw.body()), 0),
        };

        let mut state = self.state.lock().await;
        state.limits.update_from_headers(raw.headers());
        state.stats.total_requests += 1;
        state.stats.total_tokens += tokens_used;
        let rate_limits = state.limits;
        drop(state);

        debug!(tokens_used, retries, "Chat completion succeeded");
        SummarizeResponse {
            data,
            parsed,
            tokens_used,
            rate_limits,
            retries,
        }
    }

    /// Record a terminal error and build the failure outcome.
    async fn fail(&self, error: ApiError, retries: u32) -> SummarizeFailure {
        let mut state = self.state.lock().await;
        state.stats.errors.push(error.message());
        let rate_limits = state.limits;
        drop(state);

        error!(error = %error, retries, "Summarization failed");
        SummarizeFailure {
            error,
            rate_limits,
            retries,
        }
    }

    fn build_request(&self, article: &Article, spec: &RequestSpec) -> ApiResult<ChatRequest> {
        let messages = vec![
            ChatMessage::new(ChatRole::System, spec.system_prompt.clone()),
            ChatMessage::new(ChatRole::User, build_user_prompt(article)),
        ];

        ChatRequest::builder()
            .model(self.config.model().clone())
            .messages(messages)
            .temperature(spec.temperature)
            .max_tokens(spec.max_output_tokens)
            .response_format(ResponseFormat::json_object())
            .build()
            .map_err(|e| ApiError::new(ApiErrorKind::InvalidRequest(e.to_string())))
    }

    fn backoff(&self, attempt: u32) -> Duration {
        exponential_backoff(
            attempt,
            *self.config.base_delay_ms(),
            *self.config.max_delay_ms(),
        )
    }
}
