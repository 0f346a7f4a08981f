//! # HTTP Client
//!
//! Thin reqwest wrapper used by provider adapters.
//!
//! Every request carries the configured timeout. Status and decoding
//! failures are mapped to [`ProviderError`] so callers can decide whether
//! to retry.
//!
//! # Examples
//!
//! ```ignore
//! use benefit_consensus::infrastructure::providers::http_client::HttpClient;
//!
//! let client = HttpClient::new(5000)?;
//! let body = client.get_json_with_params("https://api1.com", &[("member_id", 123)]).await?;
//! ```

use crate::infrastructure::providers::error::{ProviderError, ProviderResult};
use reqwest::{Client, Response};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// HTTP client wrapper for provider adapters.
#[derive(Debug, Clone)]
pub struct HttpClient {
    /// Inner reqwest client.
    client: Client,
    /// Request timeout in milliseconds.
    timeout_ms: u64,
}

impl HttpClient {
    /// Creates a new HTTP client with the specified timeout.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Internal` if the client cannot be created.
    pub fn new(timeout_ms: u64) -> ProviderResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| ProviderError::internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, timeout_ms })
    }

    /// Makes a GET request with query parameters and decodes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Timeout` or `ProviderError::Connection` if the
    /// request fails, `ProviderError::HttpStatus` for a 4xx/5xx answer, and
    /// `ProviderError::Malformed` if the body is not valid JSON.
    pub async fn get_json_with_params<P: Serialize + ?Sized>(
        &self,
        url: &str,
        params: &P,
    ) -> ProviderResult<Value> {
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        self.handle_response(response).await
    }

    /// Checks the status, then decodes the body.
    async fn handle_response(&self, response: Response) -> ProviderResult<Value> {
        let status = response.status();

        if status.is_client_error() || status.is_server_error() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(ProviderError::http_status(status.as_u16(), error_body));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        serde_json::from_slice(&bytes)
            .map_err(|e| ProviderError::malformed(format!("Failed to parse response: {}", e)))
    }

    /// Maps a reqwest error to a ProviderError.
    fn map_reqwest_error(&self, error: reqwest::Error) -> ProviderError {
        if error.is_timeout() {
            ProviderError::timeout(format!("Request timed out after {}ms", self.timeout_ms))
        } else if error.is_connect() {
            ProviderError::connection(format!("Connection failed: {}", error))
        } else {
            ProviderError::connection(format!("HTTP request failed: {}", error))
        }
    }
}
