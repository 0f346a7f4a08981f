//! # HTTP Benefit Provider
//!
//! Fetches a member's benefit snapshot from one provider endpoint with
//! bounded, fixed-interval retries.
//!
//! A request is `GET <base_url>?member_id=<id>`. Transport failures and
//! error statuses are retried; a body that is not JSON, or JSON that is not
//! an object, ends the fetch at once.

use crate::domain::entities::BenefitSnapshot;
use crate::domain::value_objects::MemberId;
use crate::infrastructure::providers::error::ProviderResult;
use crate::infrastructure::providers::http_client::HttpClient;
use crate::infrastructure::providers::retry::RetryPolicy;
use crate::infrastructure::providers::traits::BenefitProvider;
use async_trait::async_trait;

/// Default per-request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Query parameter carrying the member id.
const MEMBER_ID_PARAM: &str = "member_id";

/// A benefit provider reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpBenefitProvider {
    base_url: String,
    client: HttpClient,
    retry: RetryPolicy,
}

impl HttpBenefitProvider {
    /// Creates a provider for `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Internal` if the HTTP client cannot be built.
    pub fn new(
        base_url: impl Into<String>,
        timeout_ms: u64,
        retry: RetryPolicy,
    ) -> ProviderResult<Self> {
        Ok(Self {
            base_url: base_url.into(),
            client: HttpClient::new(timeout_ms)?,
            retry,
        })
    }

    /// Creates a provider sharing an existing client.
    #[must_use]
    pub fn with_client(
        base_url: impl Into<String>,
        client: HttpClient,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            client,
            retry,
        }
    }

    /// Returns the endpoint this provider queries.
    #[inline]
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the retry policy.
    #[inline]
    #[must_use]
    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    /// Fetches the member's snapshot, retrying transient failures.
    ///
    /// Makes at most `max_attempts` requests and sleeps the configured delay
    /// between consecutive attempts only. Returns `None` once attempts are
    /// exhausted or as soon as the body cannot be decoded.
    pub async fn fetch(&self, member_id: &MemberId) -> Option<BenefitSnapshot> {
        let max_attempts = self.retry.max_attempts();
        let params = [(MEMBER_ID_PARAM, member_id.get())];

        for attempt in 1..=max_attempts {
            let error = match self
                .client
                .get_json_with_params(&self.base_url, &params)
                .await
            {
                Ok(body) => return self.decode_snapshot(body, member_id),
                Err(e) => e,
            };

            if !error.is_retryable() {
                tracing::error!(
                    provider = %self.base_url,
                    member_id = %member_id,
                    error = %error,
                    "error parsing provider response"
                );
                return None;
            }

            tracing::warn!(
                provider = %self.base_url,
                member_id = %member_id,
                attempt,
                max_attempts,
                status = ?error.status(),
                error = %error,
                "error fetching member data"
            );

            if self.retry.should_retry(attempt) {
                let delay = self.retry.delay();
                tracing::info!(
                    provider = %self.base_url,
                    delay = ?delay,
                    "retrying provider request"
                );
                tokio::time::sleep(delay).await;
            } else {
                tracing::error!(
                    provider = %self.base_url,
                    member_id = %member_id,
                    attempts = max_attempts,
                    "max retries exceeded, giving up"
                );
            }
        }

        None
    }

    fn decode_snapshot(
        &self,
        body: serde_json::Value,
        member_id: &MemberId,
    ) -> Option<BenefitSnapshot> {
        match BenefitSnapshot::from_json(body) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                tracing::error!(
                    provider = %self.base_url,
                    member_id = %member_id,
                    error = %e,
                    "provider response has unexpected shape"
                );
                None
            }
        }
    }
}

#[async_trait]
impl BenefitProvider for HttpBenefitProvider {
    fn name(&self) -> &str {
        &self.base_url
    }

    async fn fetch_benefits(&self, member_id: &MemberId) -> Option<BenefitSnapshot> {
        self.fetch(member_id).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn new_provider() {
        let provider = HttpBenefitProvider::new(
            "https://api1.com",
            DEFAULT_TIMEOUT_MS,
            RetryPolicy::default(),
        )
        .unwrap();
        assert_eq!(provider.base_url(), "https://api1.com");
        assert_eq!(provider.name(), "https://api1.com");
        assert_eq!(provider.retry_policy().max_attempts(), 3);
    }

    #[tokio::test]
    async fn unreachable_provider_is_absent_after_retries() {
        let retry = RetryPolicy::new()
            .with_max_attempts(2)
            .with_delay(Duration::from_millis(5));
        let provider = HttpBenefitProvider::new("http://127.0.0.1:9/", 500, retry).unwrap();

        let member_id = MemberId::new(123).unwrap();
        assert!(provider.fetch(&member_id).await.is_none());
    }
}
