//! # Benefit Aggregation Engine
//!
//! Orchestrates provider lookups and per-field consensus.
//!
//! This module provides the [`BenefitAggregationEngine`] which queries each
//! configured provider in order, collects one sample list per benefit field
//! and reduces each list to its consensus value. Provider and field failures
//! are logged and skipped; they never fail the lookup as a whole.

use crate::domain::entities::{BenefitSnapshot, BenefitSummary};
use crate::domain::services::consensus;
use crate::domain::value_objects::{BenefitField, MemberId};
use crate::infrastructure::providers::BenefitProvider;
use std::sync::Arc;

/// Samples gathered for each benefit field, in provider order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSamples {
    oop_max: Vec<i64>,
    remaining_oop_max: Vec<i64>,
    copay: Vec<i64>,
}

impl FieldSamples {
    /// Returns the samples collected for a field.
    #[must_use]
    pub fn get(&self, field: BenefitField) -> &[i64] {
        match field {
            BenefitField::OopMax => &self.oop_max,
            BenefitField::RemainingOopMax => &self.remaining_oop_max,
            BenefitField::Copay => &self.copay,
        }
    }

    /// Appends a sample for a field.
    pub fn push(&mut self, field: BenefitField, value: i64) {
        match field {
            BenefitField::OopMax => self.oop_max.push(value),
            BenefitField::RemainingOopMax => self.remaining_oop_max.push(value),
            BenefitField::Copay => self.copay.push(value),
        }
    }

    /// Reduces every field to its consensus value.
    #[must_use]
    pub fn summarize(&self) -> BenefitSummary {
        let mut summary = BenefitSummary::default();
        for field in BenefitField::ALL {
            summary.set(field, consensus(self.get(field)));
        }
        summary
    }
}

/// Result of one member lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationResult {
    /// Consensus figures.
    pub summary: BenefitSummary,
    /// Samples the summary was computed from.
    pub samples: FieldSamples,
    /// Number of providers queried.
    pub providers_queried: usize,
    /// Number of providers that returned a snapshot.
    pub providers_responded: usize,
    /// Number of individual field values dropped as missing or mistyped.
    pub fields_skipped: usize,
}

/// Engine for collecting and reconciling benefit figures across providers.
#[derive(Debug, Clone)]
pub struct BenefitAggregationEngine {
    providers: Vec<Arc<dyn BenefitProvider>>,
}

impl BenefitAggregationEngine {
    /// Creates a new engine over the given providers, queried in order.
    #[must_use]
    pub fn new(providers: Vec<Arc<dyn BenefitProvider>>) -> Self {
        Self { providers }
    }

    /// Returns the number of configured providers.
    #[must_use]
    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    /// Queries every provider for `member_id` and reconciles the answers.
    ///
    /// Providers are queried one after another; a slow or retrying provider
    /// delays the ones behind it.
    pub async fn collect(&self, member_id: &MemberId) -> AggregationResult {
        let mut samples = FieldSamples::default();
        let mut providers_responded = 0;
        let mut fields_skipped = 0;

        for provider in &self.providers {
            let Some(snapshot) = provider.fetch_benefits(member_id).await else {
                tracing::warn!(
                    provider = provider.name(),
                    member_id = %member_id,
                    "provider returned no data, skipping"
                );
                continue;
            };

            providers_responded += 1;
            fields_skipped += collect_fields(provider.name(), &snapshot, &mut samples);
        }

        let summary = samples.summarize();

        tracing::debug!(
            member_id = %member_id,
            providers_queried = self.providers.len(),
            providers_responded,
            fields_skipped,
            complete = summary.is_complete(),
            "benefit consensus computed"
        );

        AggregationResult {
            summary,
            samples,
            providers_queried: self.providers.len(),
            providers_responded,
            fields_skipped,
        }
    }

    /// Queries every provider and returns only the consensus figures.
    pub async fn summarize(&self, member_id: &MemberId) -> BenefitSummary {
        self.collect(member_id).await.summary
    }
}

/// Adds each usable field of `snapshot` to `samples`; returns how many were skipped.
fn collect_fields(provider: &str, snapshot: &BenefitSnapshot, samples: &mut FieldSamples) -> usize {
    let mut skipped = 0;
    for field in BenefitField::ALL {
        match snapshot.field(field) {
            Ok(value) => samples.push(field, value),
            Err(e) => {
                tracing::warn!(
                    provider,
                    field = field.as_str(),
                    error = %e,
                    "skipping provider field"
                );
                skipped += 1;
            }
        }
    }
    skipped
}
