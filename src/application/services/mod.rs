//! # Application Services
//!
//! Services that orchestrate domain logic and infrastructure.
//!
//! - [`BenefitAggregationEngine`]: Sequential provider lookup and per-field consensus

pub mod benefit_aggregation;

pub use benefit_aggregation::{AggregationResult, BenefitAggregationEngine, FieldSamples};
