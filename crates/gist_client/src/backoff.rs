//! Exponential backoff with jitter.

use rand::Rng;
use std::time::Duration;

/// Delay before retry `attempt` (0-indexed).
///
/// Doubles the base delay per attempt, adds up to a second of jitter so
/// concurrent clients do not retry in lockstep, and caps at `max_delay_ms`.
pub fn exponential_backoff(attempt: u32, base_delay_ms: u64, max_delay_ms: u64) -> Duration {
    let mut rng = rand::thread_rng();
    let jitter = rng.gen_range(0..1000);

    let delay = base_delay_ms
        .saturating_mul(2u64.saturating_pow(attempt))
        .saturating_add(jitter);

    Duration::from_millis(delay.min(max_delay_ms))
}
