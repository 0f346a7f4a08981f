//! # Benefit Fields
//!
//! The named figures each provider reports for a member.

use std::fmt;

/// A benefit figure reported by providers.
///
/// # Examples
///
/// ```
/// use benefit_consensus::domain::value_objects::BenefitField;
///
/// assert_eq!(BenefitField::RemainingOopMax.as_str(), "remaining_oop_max");
/// assert_eq!(BenefitField::ALL.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BenefitField {
    /// Out-of-pocket maximum.
    OopMax,
    /// Remaining out-of-pocket maximum.
    RemainingOopMax,
    /// Copay.
    Copay,
}

impl BenefitField {
    /// All fields, in response order.
    pub const ALL: [BenefitField; 3] = [Self::OopMax, Self::RemainingOopMax, Self::Copay];

    /// Returns the wire name of the field.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OopMax => "oop_max",
            Self::RemainingOopMax => "remaining_oop_max",
            Self::Copay => "copay",
        }
    }
}

impl fmt::Display for BenefitField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
