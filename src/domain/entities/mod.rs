//! # Entities
//!
//! Request-scoped records flowing through the consensus pipeline.
//!
//! - [`BenefitSnapshot`]: One provider's response
//! - [`BenefitSummary`]: The consolidated per-member result

pub mod benefit_snapshot;
pub mod benefit_summary;

pub use benefit_snapshot::BenefitSnapshot;
pub use benefit_summary::BenefitSummary;
