//! Shared test doubles for client integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use gist_client::{ChatRequest, ChatTransport, RawResponse};
use gist_error::{ApiError, ApiErrorKind, ApiResult};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Transport that replays a scripted sequence of exchanges.
///
/// Each `summarize` attempt consumes one step; the requests the client
/// sent are recorded for inspection. An exhausted script fails the
/// attempt with a transport error so a runaway retry loop cannot hang.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    steps: Mutex<VecDeque<ApiResult<RawResponse>>>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl ScriptedTransport {
    pub fn new(steps: Vec<ApiResult<RawResponse>>) -> Self {
        Self {
            steps: Mutex::new(steps.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Number of attempts the client made so far.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Requests sent, in order.
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatTransport for ScriptedTransport {
    async fn execute(&self, request: &ChatRequest) -> ApiResult<RawResponse> {
        self.requests.lock().unwrap().push(request.clone());
        self.steps.lock().unwrap().pop_front().unwrap_or_else(|| {
            Err(ApiError::new(ApiErrorKind::Transport(
                "transport script exhausted".to_string(),
            )))
        })
    }
}

/// Build a header map from string pairs.
pub fn headers(pairs: &[(&str, &str)]) -> HeaderMap {
    let mut map = HeaderMap::new();
    for (key, value) in pairs {
        map.insert(
            HeaderName::from_bytes(key.as_bytes()).unwrap(),
            HeaderValue::from_str(value).unwrap(),
        );
    }
    map
}

/// A scripted response with the given status, headers, and body.
pub fn response(
    status: u16,
    header_pairs: &[(&str, &str)],
    body: impl Into<String>,
) -> ApiResult<RawResponse> {
    Ok(RawResponse::new(status, headers(header_pairs), body))
}

/// A successful completion whose content is `summary` encoded in the
/// strict JSON shape, reporting `total_tokens` usage.
pub fn success_response(
    summary: &str,
    total_tokens: u64,
    header_pairs: &[(&str, &str)],
) -> ApiResult<RawResponse> {
    let content = serde_json::json!({
        "summary": summary,
        "keyPoints": ["point one", "point two"],
        "tone": "informative",
    })
    .to_string();
    let body = serde_json::json!({
        "choices": [{"message": {"content": content}}],
        "usage": {"total_tokens": total_tokens},
    })
    .to_string();
    response(200, header_pairs, body)
}

/// A successful completion carrying arbitrary raw content.
pub fn success_with_content(
    content: &str,
    total_tokens: u64,
    header_pairs: &[(&str, &str)],
) -> ApiResult<RawResponse> {
    let body = serde_json::json!({
        "choices": [{"message": {"content": content}}],
        "usage": {"total_tokens": total_tokens},
    })
    .to_string();
    response(200, header_pairs, body)
}

/// An error response in Groq's documented envelope.
pub fn error_response(
    status: u16,
    message: &str,
    header_pairs: &[(&str, &str)],
) -> ApiResult<RawResponse> {
    let body = serde_json::json!({"error": {"message": message}}).to_string();
    response(status, header_pairs, body)
}

/// A connection-level failure where no response exists.
pub fn transport_failure(message: &str) -> ApiResult<RawResponse> {
    Err(ApiError::new(ApiErrorKind::Transport(message.to_string())))
}
