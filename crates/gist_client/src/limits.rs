//! Rate-limit state parsed from Groq response headers.
//!
//! Groq reports per-minute budgets through OpenAI-style headers:
//! - `x-ratelimit-limit-requests` / `x-ratelimit-remaining-requests`
//! - `x-ratelimit-limit-tokens` / `x-ratelimit-remaining-tokens`
//! - `x-ratelimit-reset-requests` / `x-ratelimit-reset-tokens`
//!
//! Reset headers are compound durations such as `"1m30s"`, `"2m"`, or
//! `"7.66s"`. The state is advisory for pacing; a server 429 always wins.

use regex::Regex;
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Tokens assumed per summarization request when no measurement exists.
pub(crate) const EST_TOKENS_PER_REQUEST: u64 = 1800;

/// Token headroom below which pacing waits for the token window to reset.
const LOW_TOKEN_FLOOR: u64 = 2000;

/// Request headroom below which pacing waits for the request window to reset.
const MIN_REQUEST_HEADROOM: u32 = 2;

/// Safety margin added when waiting out a reset window.
const RESET_MARGIN_MS: u64 = 500;

/// Floor between consecutive requests when budgets are healthy.
const MIN_PACE_MS: u64 = 500;

/// Margin added on top of a 429 wait.
const RATE_LIMIT_MARGIN_MS: u64 = 1000;

/// Snapshot of the per-minute request and token budgets.
///
/// Defaults are the conservative free-tier budgets and apply until the
/// first response carries headers. Updated after every response; fields
/// with missing or unparseable headers retain their previous values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateLimitState {
    /// Maximum requests per minute
    pub limit_requests: u32,
    /// Maximum tokens per minute
    pub limit_tokens: u64,
    /// Requests remaining in the current window
    pub remaining_requests: u32,
    /// Tokens remaining in the current window
    pub remaining_tokens: u64,
    /// Seconds until the request window resets
    pub reset_requests_secs: f64,
    /// Seconds until the token window resets
    pub reset_tokens_secs: f64,
}

impl Default for RateLimitState {
    fn default() -> Self {
        Self {
            limit_requests: 30,
            limit_tokens: 6000,
            remaining_requests: 30,
            remaining_tokens: 6000,
            reset_requests_secs: 60.0,
            reset_tokens_secs: 60.0,
        }
    }
}

impl RateLimitState {
    /// Fold rate-limit headers from one response into the state.
    ///
    /// Each field falls back to its previous value when the header is
    /// absent or does not parse, so one malformed response cannot zero
    /// out the budget view.
    pub fn update_from_headers(&mut self, headers: &HeaderMap) {
        self.limit_requests =
            parse_header_u32(headers, "x-ratelimit-limit-requests").unwrap_or(self.limit_requests);
        self.limit_tokens =
            parse_header_u64(headers, "x-ratelimit-limit-tokens").unwrap_or(self.limit_tokens);
        self.remaining_requests = parse_header_u32(headers, "x-ratelimit-remaining-requests")
            .unwrap_or(self.remaining_requests);
        self.remaining_tokens = parse_header_u64(headers, "x-ratelimit-remaining-tokens")
            .unwrap_or(self.remaining_tokens);
        self.reset_requests_secs = parse_header_duration(headers, "x-ratelimit-reset-requests")
            .unwrap_or(self.reset_requests_secs);
        self.reset_tokens_secs = parse_header_duration(headers, "x-ratelimit-reset-tokens")
            .unwrap_or(self.reset_tokens_secs);

        debug!(
            remaining_requests = self.remaining_requests,
            remaining_tokens = self.remaining_tokens,
            reset_requests_secs = self.reset_requests_secs,
            reset_tokens_secs = self.reset_tokens_secs,
            "Updated rate limit state from headers"
        );
    }

    /// Delay to apply before the next request.
    ///
    /// Near-empty budgets wait out the relevant reset window plus a small
    /// margin. Otherwise requests are spread to target roughly half of the
    /// token budget per minute, assuming [`EST_TOKENS_PER_REQUEST`] tokens
    /// per call, with a floor of half a second between requests.
    pub fn pacing_delay(&self) -> Duration {
        if self.remaining_tokens < LOW_TOKEN_FLOOR {
            let wait = (self.reset_tokens_secs * 1000.0).ceil() as u64 + RESET_MARGIN_MS;
            return Duration::from_millis(wait);
        }

        if self.remaining_requests < MIN_REQUEST_HEADROOM {
            let wait = (self.reset_requests_secs * 1000.0).ceil() as u64 + RESET_MARGIN_MS;
            return Duration::from_millis(wait);
        }

        let safe_rpm = (self.limit_tokens / EST_TOKENS_PER_REQUEST / 2).max(1);
        let spacing = 60_000u64.div_ceil(safe_rpm);
        Duration::from_millis(spacing.max(MIN_PACE_MS))
    }

    /// Wait before retrying after a 429.
    ///
    /// Takes whichever is longer of the exponential backoff and the
    /// server-advertised reset windows, plus a one second margin.
    pub fn retry_after(&self, backoff: Duration) -> Duration {
        let reset_ms =
            (self.reset_tokens_secs.max(self.reset_requests_secs) * 1000.0).ceil() as u64;
        let wait = reset_ms.max(backoff.as_millis() as u64) + RATE_LIMIT_MARGIN_MS;
        Duration::from_millis(wait)
    }
}

fn parse_header_u32(headers: &HeaderMap, key: &str) -> Option<u32> {
    headers.get(key)?.to_str().ok()?.parse().ok()
}

fn parse_header_u64(headers: &HeaderMap, key: &str) -> Option<u64> {
    headers.get(key)?.to_str().ok()?.parse().ok()
}

fn parse_header_duration(headers: &HeaderMap, key: &str) -> Option<f64> {
    parse_reset_duration(headers.get(key)?.to_str().ok()?)
}

/// Parse a compound reset duration like `"1m30s"`, `"45s"`, or `"2m"`
/// into seconds. Fractional seconds (`"7.66s"`) are preserved. Returns
/// `None` when the string matches neither component.
pub fn parse_reset_duration(value: &str) -> Option<f64> {
    let re = Regex::new(r"^(?:(\d+)m)?(?:(\d+(?:\.\d+)?)s)?$").ok()?;
    let captures = re.captures(value)?;

    let minutes = captures.get(1).map(|m| m.as_str().parse::<f64>().ok());
    let seconds = captures.get(2).map(|s| s.as_str().parse::<f64>().ok());
    if minutes.is_none() && seconds.is_none() {
        return None;
    }

    Some(minutes.flatten().unwrap_or(0.0) * 60.0 + seconds.flatten().unwrap_or(0.0))
}
