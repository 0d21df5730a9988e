//! Top-level error wrapper types.

use crate::{ApiError, BuilderError, ConfigError, JsonError, StoreError};

/// The foundation error enum covering every gist crate.
///
/// # Examples
///
/// ```
/// use gist_error::{ApiError, ApiErrorKind, GistError};
///
/// let api_err = ApiError::new(ApiErrorKind::MissingApiKey);
/// let err: GistError = api_err.into();
/// assert!(format!("{}", err).contains("API Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum GistErrorKind {
    /// Summarization API error
    #[from(ApiError)]
    Api(ApiError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
    /// Summary/settings store error
    #[from(StoreError)]
    Store(StoreError),
}

/// Gist error with kind discrimination.
///
/// # Examples
///
/// ```
/// use gist_error::{ConfigError, GistResult};
///
/// fn might_fail() -> GistResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Gist Error: {}", _0)]
pub struct GistError(Box<GistErrorKind>);

impl GistError {
    /// Create a new error from a kind.
    pub fn new(kind: GistErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GistErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to GistErrorKind
impl<T> From<T> for GistError
where
    T: Into<GistErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for gist operations.
///
/// # Examples
///
/// ```
/// use gist_error::{GistResult, JsonError};
///
/// fn decode() -> GistResult<String> {
///     Err(JsonError::new("unexpected end of input"))?
/// }
/// ```
pub type GistResult<T> = std::result::Result<T, GistError>;
