//! Retry, pacing, and accounting behavior of the rate-limited client.
//!
//! All tests run on a paused tokio clock, so pacing and backoff waits
//! are asserted precisely without real sleeping.

mod test_utils;

use gist_client::{ChatRole, ClientConfig, GroqClient, RateLimitState};
use gist_core::{Article, FALLBACK_SUMMARY_CHARS, FALLBACK_TONE, VariationSettings};
use gist_error::ApiErrorKind;
use gist_prompt::{build_user_prompt, request_spec};
use std::sync::Arc;
use std::time::Duration;
use test_utils::{
    ScriptedTransport, error_response, success_response, success_with_content, transport_failure,
};
use tokio::time::Instant;

fn article() -> Article {
    Article {
        title: "Paced and patient".to_string(),
        content: "A short article body used across the retry tests.".to_string(),
        url: Some("https://example.com/paced".to_string()),
        site_name: None,
        reading_time: Some(2),
    }
}

fn client_with(steps: Vec<gist_error::ApiResult<gist_client::RawResponse>>) -> (GroqClient, Arc<ScriptedTransport>) {
    let transport = Arc::new(ScriptedTransport::new(steps));
    let client = GroqClient::with_transport(transport.clone(), ClientConfig::default());
    (client, transport)
}

/// Pacing against the default free-tier budget spaces requests a minute
/// apart: 6000 tokens/min at an 1800-token estimate targets 1 rpm.
const DEFAULT_PACING: Duration = Duration::from_millis(60_000);

#[tokio::test(start_paused = true)]
async fn two_rate_limits_then_success_retries_twice() {
    let reset_headers = [
        ("x-ratelimit-reset-tokens", "5s"),
        ("x-ratelimit-reset-requests", "1s"),
    ];
    let (client, transport) = client_with(vec![
        error_response(429, "Rate limit reached", &reset_headers),
        error_response(429, "Rate limit reached", &reset_headers),
        success_response(
            "Third time lucky.",
            1700,
            &[
                ("x-ratelimit-remaining-requests", "29"),
                ("x-ratelimit-reset-requests", "45s"),
            ],
        ),
    ]);

    let spec = request_spec(&VariationSettings::default());
    let start = Instant::now();
    let response = client.summarize(&article(), &spec).await.unwrap();
    let elapsed = start.elapsed();

    assert_eq!(*response.retries(), 2);
    assert_eq!(*response.tokens_used(), 1700);
    assert_eq!(response.parsed().summary, "Third time lucky.");
    assert_eq!(transport.call_count(), 3);

    // Each 429 waits max(backoff, 5s reset) + 1s margin = 6s exactly,
    // since backoff for attempts 0 and 1 stays under 3s.
    let floor = DEFAULT_PACING + Duration::from_millis(12_000);
    assert!(elapsed >= floor, "elapsed {:?} below {:?}", elapsed, floor);
    assert!(elapsed < floor + Duration::from_millis(100));

    // Headers from the success response land in the returned snapshot.
    assert_eq!(response.rate_limits().remaining_requests, 29);
    assert_eq!(response.rate_limits().reset_requests_secs, 45.0);

    let stats = client.stats().await;
    assert_eq!(*stats.total_requests(), 1);
    assert_eq!(*stats.total_tokens(), 1700);
    assert_eq!(*stats.total_retries(), 2);
}

#[tokio::test(start_paused = true)]
async fn invalid_key_fails_without_retrying() {
    let (client, transport) = client_with(vec![error_response(401, "Invalid API Key", &[])]);

    let spec = request_spec(&VariationSettings::default());
    let start = Instant::now();
    let failure = client
        .summarize(&article(), &spec)
        .await
        .expect_err("401 must not succeed");

    assert_eq!(*failure.retries(), 0);
    assert_eq!(transport.call_count(), 1);
    assert!(matches!(failure.error().kind, ApiErrorKind::InvalidApiKey(_)));
    assert!(failure.error().message().contains("Invalid API Key"));
    // Only the pre-request pacing elapsed; no backoff was slept.
    assert!(start.elapsed() < DEFAULT_PACING + Duration::from_millis(100));
}

#[tokio::test(start_paused = true)]
async fn other_4xx_is_fatal_with_server_message() {
    let (client, transport) = client_with(vec![error_response(400, "model_decommissioned", &[])]);

    let spec = request_spec(&VariationSettings::default());
    let failure = client.summarize(&article(), &spec).await.unwrap_err();

    assert_eq!(*failure.retries(), 0);
    assert_eq!(transport.call_count(), 1);
    assert!(matches!(
        failure.error().kind,
        ApiErrorKind::Api { status: 400, .. }
    ));
    assert!(failure.error().message().contains("model_decommissioned"));
}

#[tokio::test(start_paused = true)]
async fn server_errors_exhaust_the_retry_budget() {
    let config = ClientConfig::default().with_max_retries(3);
    let transport = Arc::new(ScriptedTransport::new(vec![
        error_response(503, "Service unavailable", &[]),
        error_response(503, "Service unavailable", &[]),
        error_response(503, "Service unavailable", &[]),
        error_response(503, "Service unavailable", &[]),
    ]));
    let client = GroqClient::with_transport(transport.clone(), config);

    let spec = request_spec(&VariationSettings::default());
    let start = Instant::now();
    let failure = client.summarize(&article(), &spec).await.unwrap_err();
    let elapsed = start.elapsed();

    assert_eq!(*failure.retries(), 3);
    assert_eq!(transport.call_count(), 4);
    assert!(matches!(
        failure.error().kind,
        ApiErrorKind::Server { status: 503, .. }
    ));

    // Backoff doubles per attempt: [1s, 2s), [2s, 3s), [4s, 5s).
    let floor = DEFAULT_PACING + Duration::from_millis(7_000);
    let ceiling = DEFAULT_PACING + Duration::from_millis(10_000);
    assert!(elapsed >= floor, "elapsed {:?} below {:?}", elapsed, floor);
    assert!(elapsed < ceiling, "elapsed {:?} above {:?}", elapsed, ceiling);

    let stats = client.stats().await;
    assert_eq!(*stats.total_requests(), 0);
    assert_eq!(*stats.total_retries(), 3);
    assert_eq!(*stats.error_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn network_failure_is_retried_like_a_transient_error() {
    let (client, transport) = client_with(vec![
        transport_failure("connection reset by peer"),
        success_response("Recovered.", 1600, &[]),
    ]);

    let spec = request_spec(&VariationSettings::default());
    let response = client.summarize(&article(), &spec).await.unwrap();

    assert_eq!(*response.retries(), 1);
    assert_eq!(response.parsed().summary, "Recovered.");
    assert_eq!(transport.call_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn pacing_follows_headers_from_the_previous_response() {
    let (client, _transport) = client_with(vec![
        success_response(
            "First.",
            1700,
            &[
                ("x-ratelimit-remaining-tokens", "1500"),
                ("x-ratelimit-reset-tokens", "3s"),
            ],
        ),
        success_response("Second.", 1700, &[]),
    ]);

    let spec = request_spec(&VariationSettings::default());
    client.summarize(&article(), &spec).await.unwrap();

    // 1500 remaining tokens is under the 2000 floor, so the next call
    // waits out the 3s token reset plus the 500ms margin instead of the
    // one-minute spacing.
    let start = Instant::now();
    client.summarize(&article(), &spec).await.unwrap();
    let elapsed = start.elapsed();

    assert!(elapsed >= Duration::from_millis(3_500));
    assert!(elapsed < Duration::from_millis(3_600));
}

#[tokio::test(start_paused = true)]
async fn malformed_model_output_degrades_to_the_fallback() {
    let rambling = "not json ".repeat(100);
    let (client, _transport) = client_with(vec![success_with_content(&rambling, 900, &[])]);

    let spec = request_spec(&VariationSettings::default());
    let response = client.summarize(&article(), &spec).await.unwrap();

    assert_eq!(*response.retries(), 0);
    assert_eq!(
        response.parsed().summary.chars().count(),
        FALLBACK_SUMMARY_CHARS
    );
    assert!(response.parsed().key_points.is_empty());
    assert_eq!(response.parsed().tone, FALLBACK_TONE);
    // The request itself succeeded and is accounted as such.
    assert_eq!(*response.tokens_used(), 900);
}

#[tokio::test(start_paused = true)]
async fn missing_content_field_is_a_parse_failure_not_a_transport_failure() {
    let body = serde_json::json!({"usage": {"total_tokens": 120}}).to_string();
    let (client, transport) = client_with(vec![test_utils::response(200, &[], body)]);

    let spec = request_spec(&VariationSettings::default());
    let response = client.summarize(&article(), &spec).await.unwrap();

    assert_eq!(transport.call_count(), 1);
    assert_eq!(response.parsed().summary, "");
    assert_eq!(response.parsed().tone, FALLBACK_TONE);
    assert_eq!(*response.tokens_used(), 120);
}

#[tokio::test(start_paused = true)]
async fn request_body_carries_the_spec_and_rendered_prompts() {
    let (client, transport) = client_with(vec![success_response("Checked.", 1000, &[])]);

    let input = article();
    let spec = request_spec(&VariationSettings::default());
    client.summarize(&input, &spec).await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.model(), "llama-3.1-8b-instant");
    assert_eq!(*request.temperature(), spec.temperature);
    assert_eq!(*request.max_tokens(), spec.max_output_tokens);

    let messages = request.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(*messages[0].role(), ChatRole::System);
    assert_eq!(messages[0].content(), &spec.system_prompt);
    assert_eq!(*messages[1].role(), ChatRole::User);
    assert_eq!(messages[1].content(), &build_user_prompt(&input));
}

#[tokio::test(start_paused = true)]
async fn stats_accumulate_across_calls() {
    let (client, _transport) = client_with(vec![
        success_response("One.", 1700, &[]),
        success_response("Two.", 1900, &[]),
        error_response(400, "bad request", &[]),
    ]);

    let spec = request_spec(&VariationSettings::default());
    client.summarize(&article(), &spec).await.unwrap();
    client.summarize(&article(), &spec).await.unwrap();
    client.summarize(&article(), &spec).await.unwrap_err();

    let stats = client.stats().await;
    assert_eq!(*stats.total_requests(), 2);
    assert_eq!(*stats.total_tokens(), 3600);
    assert_eq!(*stats.avg_tokens_per_request(), 1800);
    assert_eq!(*stats.error_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn batch_estimate_tracks_the_advertised_token_limit() {
    let (client, _transport) = client_with(vec![success_response(
        "Budget update.",
        1700,
        &[("x-ratelimit-limit-tokens", "30000")],
    )]);

    let spec = request_spec(&VariationSettings::default());

    // Before any response, the estimate uses the free-tier default.
    let before = client.estimate_batch_time(10).await;
    assert_eq!(*before.tokens_per_minute(), 6000);

    client.summarize(&article(), &spec).await.unwrap();

    let after = client.estimate_batch_time(10).await;
    assert_eq!(*after.tokens_per_minute(), 30_000);
    assert_eq!(*after.estimated_minutes(), 1);
}

#[tokio::test(start_paused = true)]
async fn concurrent_calls_share_one_coherent_rate_limit_view() {
    let (client, transport) = client_with(vec![
        success_response("A.", 1000, &[("x-ratelimit-remaining-requests", "28")]),
        success_response("B.", 1200, &[("x-ratelimit-remaining-requests", "27")]),
    ]);

    let spec = request_spec(&VariationSettings::default());
    let input = article();
    let (first, second) = tokio::join!(
        client.summarize(&input, &spec),
        client.summarize(&input, &spec)
    );
    first.unwrap();
    second.unwrap();

    assert_eq!(transport.call_count(), 2);
    let stats = client.stats().await;
    assert_eq!(*stats.total_requests(), 2);
    assert_eq!(*stats.total_tokens(), 2200);

    let limits: RateLimitState = client.rate_limits().await;
    assert!(limits.remaining_requests == 27 || limits.remaining_requests == 28);
}
