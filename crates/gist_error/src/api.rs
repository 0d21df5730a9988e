//! Summarization API error types and retry classification.

/// How a failed request should be handled by the retry loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum RetryClass {
    /// Rejected by a rate-limit bucket; wait out the server-advertised reset
    RateLimited,
    /// Transient failure; retry with exponential backoff
    Transient,
    /// Permanent failure; surface immediately without retrying
    Fatal,
}

/// API error conditions for the summarization endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ApiErrorKind {
    /// API key not found in environment
    #[display("GROQ_API_KEY environment variable not set")]
    MissingApiKey,
    /// Credential rejected by the server (401)
    #[display("Invalid API key: {}", _0)]
    InvalidApiKey(String),
    /// Request rejected by a rate-limit bucket (429)
    #[display("Rate limited: {}", _0)]
    RateLimited(String),
    /// Server-side failure (5xx)
    #[display("HTTP {} error: {}", status, message)]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message from the response body, or a status placeholder
        message: String,
    },
    /// Permanent client-side rejection (4xx other than 401/429)
    #[display("HTTP {} error: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from the response body, or a status placeholder
        message: String,
    },
    /// Network or transport failure before a response arrived
    #[display("Transport error: {}", _0)]
    Transport(String),
    /// Request body could not be constructed
    #[display("Invalid request: {}", _0)]
    InvalidRequest(String),
}

impl ApiErrorKind {
    /// Classify a non-success HTTP status into an error kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use gist_error::ApiErrorKind;
    ///
    /// let kind = ApiErrorKind::from_status(429, "Rate limit reached");
    /// assert!(matches!(kind, ApiErrorKind::RateLimited(_)));
    ///
    /// let kind = ApiErrorKind::from_status(503, "Service unavailable");
    /// assert!(matches!(kind, ApiErrorKind::Server { status: 503, .. }));
    /// ```
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            429 => ApiErrorKind::RateLimited(message),
            401 => ApiErrorKind::InvalidApiKey(message),
            s if s >= 500 => ApiErrorKind::Server { status: s, message },
            s => ApiErrorKind::Api { status: s, message },
        }
    }

    /// HTTP status associated with this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiErrorKind::InvalidApiKey(_) => Some(401),
            ApiErrorKind::RateLimited(_) => Some(429),
            ApiErrorKind::Server { status, .. } | ApiErrorKind::Api { status, .. } => Some(*status),
            ApiErrorKind::MissingApiKey
            | ApiErrorKind::Transport(_)
            | ApiErrorKind::InvalidRequest(_) => None,
        }
    }

    /// Check if this error type should trigger a retry.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ApiErrorKind::RateLimited(_) | ApiErrorKind::Server { .. } | ApiErrorKind::Transport(_)
        )
    }

    /// Get the retry classification for this error.
    pub fn retry_class(&self) -> RetryClass {
        match self {
            ApiErrorKind::RateLimited(_) => RetryClass::RateLimited,
            ApiErrorKind::Server { .. } | ApiErrorKind::Transport(_) => RetryClass::Transient,
            _ => RetryClass::Fatal,
        }
    }

    /// Whether the caller can reasonably try again later.
    ///
    /// Credential problems require user action and are not recoverable;
    /// everything else is worth a later attempt even when it is not
    /// retried within a single request.
    pub fn recoverable(&self) -> bool {
        !matches!(
            self,
            ApiErrorKind::MissingApiKey | ApiErrorKind::InvalidApiKey(_)
        )
    }
}

/// API error with source location tracking.
///
/// # Examples
///
/// ```
/// use gist_error::{ApiError, ApiErrorKind};
///
/// let err = ApiError::new(ApiErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("GROQ_API_KEY"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("API Error: {} at line {} in {}", kind, line, file)]
pub struct ApiError {
    /// The kind of error that occurred
    pub kind: ApiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ApiError {
    /// Create a new ApiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ApiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// The bare message of this error, without location decoration.
    ///
    /// This is what accumulates in client stats and reaches user-facing
    /// error reports.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

/// Trait for errors that support retry logic.
///
/// # Examples
///
/// ```
/// use gist_error::{ApiError, ApiErrorKind, RetryClass, RetryableError};
///
/// let err = ApiError::new(ApiErrorKind::from_status(503, "overloaded"));
/// assert!(err.is_retryable());
/// assert_eq!(err.retry_class(), RetryClass::Transient);
///
/// let err = ApiError::new(ApiErrorKind::from_status(401, "bad key"));
/// assert_eq!(err.retry_class(), RetryClass::Fatal);
/// ```
pub trait RetryableError {
    /// Returns true if this error should trigger a retry.
    ///
    /// Transient errors like 503 (service unavailable), 429 (rate limit),
    /// or network failures return true. Permanent errors like 401
    /// (unauthorized) or 400 (bad request) return false.
    fn is_retryable(&self) -> bool;

    /// Get the retry classification for this error.
    ///
    /// The default implementation maps retryable errors to
    /// [`RetryClass::Transient`]; override to distinguish rate-limit
    /// rejections, which wait on the server's reset window instead of
    /// pure backoff.
    fn retry_class(&self) -> RetryClass {
        if self.is_retryable() {
            RetryClass::Transient
        } else {
            RetryClass::Fatal
        }
    }
}

impl RetryableError for ApiError {
    fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }

    fn retry_class(&self) -> RetryClass {
        self.kind.retry_class()
    }
}

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
