//! Groq chat-completions wire types.
//!
//! Request and response bodies for the OpenAI-compatible
//! `/chat/completions` endpoint, limited to the fields the summarizer
//! actually sends and reads.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Chat message role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// System instructions
    System,
    /// End-user content
    User,
    /// Model output
    Assistant,
}

/// One message in a chat request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ChatMessage {
    /// Message role
    role: ChatRole,
    /// Message content
    content: String,
}

impl ChatMessage {
    /// Creates a new builder for `ChatMessage`.
    pub fn builder() -> ChatMessageBuilder {
        ChatMessageBuilder::default()
    }

    /// Creates a message directly from role and content.
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Output format constraint for the completion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResponseFormat {
    /// Format identifier
    #[serde(rename = "type")]
    format_type: String,
}

impl ResponseFormat {
    /// Constrain the model to emit a single JSON object.
    pub fn json_object() -> Self {
        Self {
            format_type: "json_object".to_string(),
        }
    }
}

/// Chat-completions request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ChatRequest {
    /// Model identifier
    model: String,
    /// Conversation messages, system prompt first
    messages: Vec<ChatMessage>,
    /// Sampling temperature
    temperature: f32,
    /// Output token budget
    max_tokens: u32,
    /// Output format constraint
    response_format: ResponseFormat,
}

impl ChatRequest {
    /// Creates a new builder for `ChatRequest`.
    pub fn builder() -> ChatRequestBuilder {
        ChatRequestBuilder::default()
    }
}

/// Token accounting reported with a completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct Usage {
    /// Total tokens consumed by the request
    #[serde(default)]
    total_tokens: u64,
}

/// Message held by a completion choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ChoiceMessage {
    /// Model output text, absent on filtered or empty completions
    #[serde(default)]
    content: Option<String>,
}

/// One completion choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ChatChoice {
    /// Choice message
    message: ChoiceMessage,
}

/// Chat-completions response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct ChatResponse {
    /// Completion choices, first is the answer
    #[serde(default)]
    choices: Vec<ChatChoice>,
    /// Token accounting, when the server reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    usage: Option<Usage>,
}

impl ChatResponse {
    /// Content of the first choice, when present.
    pub fn content(&self) -> Option<&str> {
        self.choices.first()?.message.content.as_deref()
    }

    /// Total tokens consumed, zero when the server omitted usage.
    pub fn total_tokens(&self) -> u64 {
        self.usage.map(|usage| usage.total_tokens).unwrap_or(0)
    }
}

/// Error envelope returned with non-2xx responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ApiErrorBody {
    /// Error detail, when the server sent one
    #[serde(default)]
    error: Option<ApiErrorDetail>,
}

/// Server-side error detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ApiErrorDetail {
    /// Human-readable error message
    message: String,
}

/// Best-effort error message from a non-2xx body.
///
/// Falls back to `HTTP <status>` when the body is not the documented
/// error envelope.
pub fn error_message(body: &str, status: u16) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|envelope| {
            envelope
                .error()
                .as_ref()
                .map(|detail| detail.message().clone())
        })
        .unwrap_or_else(|| format!("HTTP {}", status))
}
