//! # Configuration
//!
//! Process settings and the provider set.
//!
//! [`ServiceConfig`] is read from defaults overlaid with `BENEFITS_*`
//! environment variables (a `.env` file is honored by the binary).
//! [`ProviderConfig`] is not environment-driven: the default is the fixed
//! list of three upstream endpoints, and callers may pass their own.
//!
//! | Variable             | Default   |
//! |----------------------|-----------|
//! | `BENEFITS_HOST`      | `0.0.0.0` |
//! | `BENEFITS_PORT`      | `8000`    |
//! | `BENEFITS_LOG_FORMAT`| `pretty`  |

use crate::infrastructure::providers::{
    BenefitProvider, DEFAULT_TIMEOUT_MS, HttpBenefitProvider, HttpClient, ProviderResult,
    RetryPolicy,
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "BENEFITS";

/// Upstream endpoints queried for every member lookup, in vote order.
pub const DEFAULT_PROVIDER_URLS: [&str; 3] =
    ["https://api1.com", "https://api2.com", "https://api3.com"];

/// Configuration loading error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Settings could not be read or deserialized.
    #[error("configuration error: {0}")]
    Load(#[from] config::ConfigError),

    /// Host and port do not form a socket address.
    #[error("invalid bind address '{0}'")]
    InvalidAddress(String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable output.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Log output format.
    pub log_format: LogFormat,
}

impl ServiceConfig {
    /// Loads settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Load` if a variable has an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
    }

    /// Loads settings from defaults overlaid with `source`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Load` if the merged settings cannot be deserialized.
    pub fn load<S>(source: S) -> Result<Self, ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let settings = config::Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 8000)?
            .set_default("log_format", "pretty")?
            .add_source(source)
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Returns the socket address to bind.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidAddress` if host and port do not parse.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse().map_err(|_| ConfigError::InvalidAddress(raw))
    }
}

/// The set of providers consulted per lookup and how each is called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Provider base URLs, in vote order.
    pub urls: Vec<String>,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Retry policy applied to each provider.
    pub retry: RetryPolicy,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            urls: DEFAULT_PROVIDER_URLS.iter().map(|u| (*u).to_string()).collect(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            retry: RetryPolicy::default(),
        }
    }
}

impl ProviderConfig {
    /// Creates a configuration for the given URLs with default call settings.
    #[must_use]
    pub fn with_urls<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            urls: urls.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Sets the retry policy.
    #[must_use]
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Builds one HTTP provider per URL, sharing a single client.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Internal` if the HTTP client cannot be built.
    pub fn build_providers(&self) -> ProviderResult<Vec<Arc<dyn BenefitProvider>>> {
        let client = HttpClient::new(self.timeout_ms)?;
        Ok(self
            .urls
            .iter()
            .map(|url| {
                Arc::new(HttpBenefitProvider::with_client(
                    url.clone(),
                    client.clone(),
                    self.retry,
                )) as Arc<dyn BenefitProvider>
            })
            .collect())
    }
}
