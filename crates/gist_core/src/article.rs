//! Article input type.

use serde::{Deserialize, Serialize};

/// Readable article content handed to the summarization core.
///
/// Produced upstream by the extension's content extractor; `content` is
/// arbitrary-length plain text and is truncated to the prompt ceiling by
/// the engine, not here.
///
/// # Examples
///
/// ```
/// use gist_core::Article;
///
/// let article = Article {
///     title: "Rust 2024 released".to_string(),
///     content: "The Rust team announced...".to_string(),
///     url: Some("https://example.com/rust-2024".to_string()),
///     site_name: None,
///     reading_time: Some(4),
/// };
///
/// assert_eq!(article.title, "Rust 2024 released");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Article title
    pub title: String,
    /// Extracted plain-text body
    pub content: String,
    /// Canonical URL, when known (cache key upstream)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Publishing site name from the extractor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    /// Estimated reading time in minutes from the extractor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading_time: Option<u32>,
}

impl Article {
    /// Create an article from title and content alone.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            url: None,
            site_name: None,
            reading_time: None,
        }
    }
}
