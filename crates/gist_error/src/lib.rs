//! Error types for the Gist summarization library.
//!
//! This crate provides the foundation error types used throughout the gist
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! The [`RetryableError`] trait classifies API failures for the client's
//! retry loop: rate-limit rejections wait on the server's advertised reset
//! window, transient failures back off exponentially, and everything else
//! surfaces immediately.
//!
//! # Examples
//!
//! ```
//! use gist_error::{ApiError, ApiErrorKind, GistResult};
//!
//! fn request() -> GistResult<String> {
//!     Err(ApiError::new(ApiErrorKind::from_status(503, "overloaded")))?
//! }
//!
//! match request() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod builder;
mod config;
mod error;
mod json;
mod store;

pub use api::{ApiError, ApiErrorKind, ApiResult, RetryClass, RetryableError};
pub use builder::{BuilderError, BuilderErrorKind};
pub use config::ConfigError;
pub use error::{GistError, GistErrorKind, GistResult};
pub use json::JsonError;
pub use store::{StoreError, StoreErrorKind, StoreResult};
