//! Small text helpers shared by the prompt engine and parse fallback.

/// Truncate a string to at most `max_chars` characters, on a character
/// boundary.
///
/// Returns the original slice when it is already short enough, so callers
/// can detect truncation by comparing byte lengths.
///
/// # Examples
///
/// ```
/// use gist_core::truncate_chars;
///
/// assert_eq!(truncate_chars("hello", 10), "hello");
/// assert_eq!(truncate_chars("hello", 3), "hel");
/// assert_eq!(truncate_chars("héllo", 2), "hé");
/// ```
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
