//! Summary/settings store error types.

/// Kinds of store errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum StoreErrorKind {
    /// Failed to encode a record for storage
    #[display("Failed to encode record: {}", _0)]
    Encode(String),
    /// Failed to decode a stored record
    #[display("Failed to decode record: {}", _0)]
    Decode(String),
    /// Storage backend failed
    #[display("Storage backend error: {}", _0)]
    Backend(String),
}

/// Store error with location tracking.
///
/// # Examples
///
/// ```
/// use gist_error::{StoreError, StoreErrorKind};
///
/// let err = StoreError::new(StoreErrorKind::Decode("truncated record".to_string()));
/// assert!(format!("{}", err).contains("decode"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Store Error: {} at line {} in {}", kind, line, file)]
pub struct StoreError {
    /// The kind of error that occurred
    pub kind: StoreErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StoreError {
    /// Create a new store error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StoreErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
