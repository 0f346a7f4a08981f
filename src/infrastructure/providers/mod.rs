//! # Benefit Providers
//!
//! Adapters for the upstream services supplying member benefit figures.
//!
//! - [`BenefitProvider`]: Port implemented by every provider
//! - [`HttpBenefitProvider`]: JSON-over-HTTP provider with fixed-interval retries
//! - [`HttpClient`]: Shared reqwest wrapper
//! - [`RetryPolicy`]: Attempt count and delay

pub mod error;
pub mod http_client;
pub mod http_provider;
pub mod retry;
pub mod traits;

pub use error::{ProviderError, ProviderResult};
pub use http_client::HttpClient;
pub use http_provider::{DEFAULT_TIMEOUT_MS, HttpBenefitProvider};
pub use retry::RetryPolicy;
pub use traits::BenefitProvider;
