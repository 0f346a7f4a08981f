//! # Benefit Provider Trait
//!
//! Port definition for upstream benefit data sources.
//!
//! # Examples
//!
//! ```ignore
//! use benefit_consensus::infrastructure::providers::BenefitProvider;
//!
//! struct MyProvider { /* ... */ }
//!
//! #[async_trait::async_trait]
//! impl BenefitProvider for MyProvider {
//!     // ... implement required methods
//! }
//! ```

use crate::domain::entities::BenefitSnapshot;
use crate::domain::value_objects::MemberId;
use async_trait::async_trait;
use std::fmt;

/// An upstream source of member benefit figures.
///
/// Implementations absorb their own failures: a provider that cannot answer
/// returns `None` after logging why.
#[async_trait]
pub trait BenefitProvider: Send + Sync + fmt::Debug {
    /// Returns a name identifying this provider in diagnostics.
    fn name(&self) -> &str;

    /// Fetches the benefit snapshot for a member, or `None` if the provider
    /// could not supply one.
    async fn fetch_benefits(&self, member_id: &MemberId) -> Option<BenefitSnapshot>;
}
