//! HTTP transport seam for the chat endpoint.
//!
//! The retry loop talks to [`ChatTransport`] rather than reqwest
//! directly, so tests can script status codes, headers, and bodies
//! without a network.

use crate::wire::ChatRequest;
use async_trait::async_trait;
use gist_error::{ApiError, ApiErrorKind, ApiResult};
use reqwest::Client;
use reqwest::header::HeaderMap;
use tracing::{debug, instrument};

/// Groq chat-completions endpoint.
pub const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// One HTTP exchange as seen by the retry loop: status, headers, and the
/// body read to completion. Status classification happens in the client,
/// not here.
#[derive(Debug, Clone)]
pub struct RawResponse {
    status: u16,
    headers: HeaderMap,
    body: String,
}

impl RawResponse {
    /// Assemble a raw response from its parts.
    pub fn new(status: u16, headers: HeaderMap, body: impl Into<String>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Response body text.
    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Transport for one chat-completions exchange.
///
/// Implementations return `Ok` for any HTTP response regardless of
/// status; `Err` is reserved for connection-level failures where no
/// response exists.
#[async_trait]
pub trait ChatTransport: Send + Sync + std::fmt::Debug {
    /// Execute one request and read the response to completion.
    async fn execute(&self, request: &ChatRequest) -> ApiResult<RawResponse>;
}

/// Production transport over reqwest.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
    api_key: String,
    endpoint: String,
}

impl HttpTransport {
    /// Creates a transport against the Groq endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_key: api_key.into(),
            endpoint: GROQ_API_URL.to_string(),
        }
    }
}

#[async_trait]
impl ChatTransport for HttpTransport {
    #[instrument(skip(self, request), fields(model = %request.model()))]
    async fn execute(&self, request: &ChatRequest) -> ApiResult<RawResponse> {
        debug!(url = %self.endpoint, "Sending chat completion request");

        let response = self
            .http
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(request)
            .send()
            .await
            .map_err(|e| {
                ApiError::new(ApiErrorKind::Transport(format!("Request failed: {}", e)))
            })?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.text().await.map_err(|e| {
            ApiError::new(ApiErrorKind::Transport(format!(
                "Failed to read response body: {}",
                e
            )))
        })?;

        debug!(status, body_len = body.len(), "Received chat completion response");
        Ok(RawResponse::new(status, headers, body))
    }
}
