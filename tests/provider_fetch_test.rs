//! Retry contract of the HTTP benefit provider, exercised against wiremock.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use benefit_consensus::domain::value_objects::{BenefitField, MemberId};
use benefit_consensus::infrastructure::providers::{HttpBenefitProvider, RetryPolicy};
use serde_json::json;
use std::time::{Duration, Instant};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const RETRY_DELAY: Duration = Duration::from_millis(20);

fn sample_benefits() -> serde_json::Value {
    json!({
        "oop_max": 10000,
        "remaining_oop_max": 9000,
        "copay": 1000
    })
}

fn provider(server: &MockServer, max_attempts: u32) -> HttpBenefitProvider {
    let retry = RetryPolicy::new()
        .with_max_attempts(max_attempts)
        .with_delay(RETRY_DELAY);
    HttpBenefitProvider::new(format!("{}/benefits", server.uri()), 5000, retry)
        .expect("client should build")
}

fn member() -> MemberId {
    MemberId::new(123).expect("valid member id")
}

#[tokio::test]
async fn test_successful_fetch_sends_member_id_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/benefits"))
        .and(query_param("member_id", "123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_benefits()))
        .expect(1)
        .mount(&server)
        .await;

    let snapshot = provider(&server, 3)
        .fetch(&member())
        .await
        .expect("snapshot expected");

    assert_eq!(snapshot.field(BenefitField::OopMax), Ok(10000));
    assert_eq!(snapshot.field(BenefitField::RemainingOopMax), Ok(9000));
    assert_eq!(snapshot.field(BenefitField::Copay), Ok(1000));
}

#[tokio::test]
async fn test_always_failing_provider_gives_up_after_max_attempts() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/benefits"))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&server)
        .await;

    let started = Instant::now();
    let result = provider(&server, 3).fetch(&member()).await;

    assert!(result.is_none());
    // Two pauses between three attempts.
    assert!(started.elapsed() >= RETRY_DELAY * 2);
}

#[tokio::test]
async fn test_custom_attempt_count_is_respected() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(5)
        .mount(&server)
        .await;

    assert!(provider(&server, 5).fetch(&member()).await.is_none());
}

#[tokio::test]
async fn test_single_attempt_does_not_sleep() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let retry = RetryPolicy::new()
        .with_max_attempts(1)
        .with_delay(Duration::from_secs(30));
    let provider = HttpBenefitProvider::new(server.uri(), 5000, retry).expect("client");

    let started = Instant::now();
    assert!(provider.fetch(&member()).await.is_none());
    assert!(started.elapsed() < Duration::from_secs(30));
}

#[tokio::test]
async fn test_recovers_after_transient_failures() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/benefits"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(2)
        .with_priority(1)
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/benefits"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_benefits()))
        .expect(1)
        .mount(&server)
        .await;

    let snapshot = provider(&server, 3).fetch(&member()).await;

    let snapshot = snapshot.expect("third attempt should succeed");
    assert_eq!(snapshot.field(BenefitField::Copay), Ok(1000));
}

#[tokio::test]
async fn test_not_found_is_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such member"))
        .expect(3)
        .mount(&server)
        .await;

    assert!(provider(&server, 3).fetch(&member()).await.is_none());
}

#[tokio::test]
async fn test_malformed_body_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .expect(1)
        .mount(&server)
        .await;

    assert!(provider(&server, 3).fetch(&member()).await.is_none());
}

#[tokio::test]
async fn test_non_object_body_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([10000, 9000, 1000])))
        .expect(1)
        .mount(&server)
        .await;

    assert!(provider(&server, 3).fetch(&member()).await.is_none());
}

#[tokio::test]
async fn test_timeout_is_retried_until_attempts_exhausted() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/benefits"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(sample_benefits())
                .set_delay(Duration::from_millis(500)),
        )
        .expect(2)
        .mount(&server)
        .await;

    let retry = RetryPolicy::new()
        .with_max_attempts(2)
        .with_delay(Duration::from_millis(10));
    let provider = HttpBenefitProvider::new(format!("{}/benefits", server.uri()), 100, retry)
        .expect("client should build");

    assert!(provider.fetch(&member()).await.is_none());
}

#[tokio::test]
async fn test_no_pause_after_final_attempt() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&server)
        .await;

    let delay = Duration::from_millis(500);
    let retry = RetryPolicy::new().with_max_attempts(3).with_delay(delay);
    let provider = HttpBenefitProvider::new(server.uri(), 5000, retry).expect("client");

    let started = Instant::now();
    assert!(provider.fetch(&member()).await.is_none());
    let elapsed = started.elapsed();

    // Exactly two pauses: a third one would push this past three delays.
    assert!(elapsed >= delay * 2, "elapsed {:?}", elapsed);
    assert!(elapsed < delay * 3, "elapsed {:?}", elapsed);
}
