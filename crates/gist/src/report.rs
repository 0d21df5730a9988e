//! User-facing error reports.
//!
//! The orchestrator maps client failures to a small set of stable codes
//! the extension UI branches on. The server's message and whether the
//! condition is recoverable are preserved end to end.

use derive_getters::Getters;
use gist_error::{ApiError, ApiErrorKind};
use serde::Serialize;

/// Stable error code presented to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// No summarization provider is configured
    #[display("no_provider")]
    NoProvider,
    /// Rejected by a rate-limit bucket; trying again later will work
    #[display("rate_limited")]
    RateLimited,
    /// The configured credential was rejected; the user must fix it
    #[display("invalid_key")]
    InvalidKey,
    /// Any other API or transport failure
    #[display("api_error")]
    ApiError,
}

/// Error envelope returned to the caller in place of a summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct ErrorReport {
    /// Stable code the UI branches on
    code: ErrorCode,
    /// Short human-readable title
    title: String,
    /// Detailed message, preserving the server's wording when present
    message: String,
    /// Whether retrying later can succeed without user action
    recoverable: bool,
}

impl ErrorReport {
    /// Report for a missing provider: the user has not added a key yet.
    pub fn no_provider() -> Self {
        Self {
            code: ErrorCode::NoProvider,
            title: "Setup Required".to_string(),
            message: "Add your free Groq API key to start summarizing articles!".to_string(),
            recoverable: false,
        }
    }

    /// Map a terminal client error to its user-facing envelope.
    pub fn from_api_error(error: &ApiError) -> Self {
        let message = error.message();
        match &error.kind {
            ApiErrorKind::MissingApiKey => Self::no_provider(),
            ApiErrorKind::InvalidApiKey(_) => Self {
                code: ErrorCode::InvalidKey,
                title: "Invalid API Key".to_string(),
                message,
                recoverable: false,
            },
            ApiErrorKind::RateLimited(_) => Self {
                code: ErrorCode::RateLimited,
                title: "Rate Limited".to_string(),
                message,
                recoverable: true,
            },
            ApiErrorKind::Server { .. } | ApiErrorKind::Transport(_) => Self {
                code: ErrorCode::ApiError,
                title: "Server Error".to_string(),
                message,
                recoverable: true,
            },
            ApiErrorKind::Api { .. } | ApiErrorKind::InvalidRequest(_) => Self {
                code: ErrorCode::ApiError,
                title: "API Error".to_string(),
                message,
                recoverable: error.kind.recoverable(),
            },
        }
    }
}
