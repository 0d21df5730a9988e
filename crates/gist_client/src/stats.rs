//! Request accounting and batch projections.

use crate::limits::{EST_TOKENS_PER_REQUEST, RateLimitState};
use derive_getters::Getters;
use serde::Serialize;

/// Cumulative accounting for one client's lifetime.
///
/// Counters only grow; `errors` collects the terminal message of every
/// failed summarization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientStats {
    /// Successful requests completed
    pub total_requests: u64,
    /// Tokens consumed across successful requests
    pub total_tokens: u64,
    /// Retries actually performed
    pub total_retries: u64,
    /// Terminal error messages, in order of occurrence
    pub errors: Vec<String>,
}

impl ClientStats {
    /// Derive a reporting snapshot from the current counters.
    pub fn snapshot(&self, rate_limits: RateLimitState) -> StatsSnapshot {
        let avg_tokens_per_request = if self.total_requests > 0 {
            (self.total_tokens as f64 / self.total_requests as f64).round() as u64
        } else {
            0
        };

        StatsSnapshot {
            total_requests: self.total_requests,
            total_tokens: self.total_tokens,
            total_retries: self.total_retries,
            error_count: self.errors.len(),
            avg_tokens_per_request,
            rate_limits,
        }
    }
}

/// Point-in-time view of the client's accounting.
#[derive(Debug, Clone, PartialEq, Serialize, Getters)]
pub struct StatsSnapshot {
    /// Successful requests completed
    total_requests: u64,
    /// Tokens consumed across successful requests
    total_tokens: u64,
    /// Retries actually performed
    total_retries: u64,
    /// Number of terminal errors recorded
    error_count: usize,
    /// Mean tokens per successful request, zero before the first success
    avg_tokens_per_request: u64,
    /// Rate-limit view at snapshot time
    rate_limits: RateLimitState,
}

/// Qualitative recommendation attached to a batch projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum BatchAdvice {
    /// The batch fits comfortably inside an hour.
    #[display("Should complete in reasonable time")]
    ReasonableTime,
    /// The batch projects past an hour at current limits.
    #[display("Consider running overnight or upgrading Groq tier")]
    RunOvernight,
}

/// Projected wall-clock cost of a batch of summarization requests.
#[derive(Debug, Clone, PartialEq, Serialize, Getters)]
pub struct BatchEstimate {
    /// Requests in the batch
    requests: u32,
    /// Tokens the batch is expected to consume
    estimated_tokens: u64,
    /// Token budget per minute used for the projection
    tokens_per_minute: u64,
    /// Projected duration in whole minutes
    estimated_minutes: u64,
    /// Projected duration in hours, to one decimal
    estimated_hours: f64,
    /// Recommendation for how to schedule the batch
    advice: BatchAdvice,
}

/// Project how long `requests` summarizations take under `limit_tokens`
/// tokens per minute, assuming [`EST_TOKENS_PER_REQUEST`] tokens each.
///
/// Monotonically non-decreasing in `requests`.
pub fn estimate_batch(requests: u32, limit_tokens: u64) -> BatchEstimate {
    let estimated_tokens = u64::from(requests) * EST_TOKENS_PER_REQUEST;
    // A zero token limit would divide by zero below.
    let tokens_per_minute = limit_tokens.max(1);
    let estimated_minutes = estimated_tokens.div_ceil(tokens_per_minute);
    let estimated_hours = (estimated_minutes as f64 / 60.0 * 10.0).round() / 10.0;

    let advice = if estimated_minutes > 60 {
        BatchAdvice::RunOvernight
    } else {
        BatchAdvice::ReasonableTime
    };

    BatchEstimate {
        requests,
        estimated_tokens,
        tokens_per_minute: limit_tokens,
        estimated_minutes,
        estimated_hours,
        advice,
    }
}
