//! # Benefit Summary
//!
//! The consolidated answer returned for one member.

use crate::domain::value_objects::BenefitField;
use serde::{Deserialize, Serialize};

/// Consensus figures for one member, formatted for display.
///
/// A field is `None` when no provider contributed a usable value for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitSummary {
    /// Out-of-pocket maximum.
    pub oop_max: Option<String>,
    /// Remaining out-of-pocket maximum.
    pub remaining_oop_max: Option<String>,
    /// Copay.
    pub copay: Option<String>,
}

impl BenefitSummary {
    /// Returns the formatted value for a field.
    #[must_use]
    pub fn get(&self, field: BenefitField) -> Option<&str> {
        match field {
            BenefitField::OopMax => self.oop_max.as_deref(),
            BenefitField::RemainingOopMax => self.remaining_oop_max.as_deref(),
            BenefitField::Copay => self.copay.as_deref(),
        }
    }

    /// Sets the formatted value for a field.
    pub fn set(&mut self, field: BenefitField, value: Option<String>) {
        match field {
            BenefitField::OopMax => self.oop_max = value,
            BenefitField::RemainingOopMax => self.remaining_oop_max = value,
            BenefitField::Copay => self.copay = value,
        }
    }

    /// Returns true if every field has a value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        BenefitField::ALL.iter().all(|f| self.get(*f).is_some())
    }
}
