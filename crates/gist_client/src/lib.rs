//! Rate-limited Groq API client for the Gist summarization library.
//!
//! Executes chat-completions requests against Groq's OpenAI-compatible
//! endpoint with self-throttling and resilient retry:
//!
//! - **Pacing**: before every request, a delay is derived from the
//!   server-advertised request and token budgets ([`RateLimitState`]),
//!   so bursts cannot exhaust either bucket before headers are re-read.
//! - **Retry**: rate-limit rejections wait out the longer of exponential
//!   backoff and the server's reset window; transient failures use pure
//!   backoff with jitter; credential and other permanent errors surface
//!   immediately.
//! - **Accounting**: requests, tokens, retries, and terminal errors
//!   accumulate in [`ClientStats`] for the client's lifetime.
//!
//! The HTTP exchange goes through the [`ChatTransport`] seam, so tests
//! script status codes, headers, and bodies without a network.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod backoff;
mod client;
mod config;
mod limits;
mod stats;
mod transport;
mod wire;

pub use backoff::exponential_backoff;
pub use client::{GroqClient, SummarizeFailure, SummarizeResponse};
pub use config::{ClientConfig, ClientConfigBuilder};
pub use limits::{RateLimitState, parse_reset_duration};
pub use stats::{BatchAdvice, BatchEstimate, ClientStats, StatsSnapshot, estimate_batch};
pub use transport::{ChatTransport, GROQ_API_URL, HttpTransport, RawResponse};
pub use wire::{
    ChatChoice, ChatMessage, ChatRequest, ChatResponse, ChatRole, ChoiceMessage, ResponseFormat,
    Usage,
};
