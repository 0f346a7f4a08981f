//! # Benefit Snapshot
//!
//! One provider's answer for one member.
//!
//! Fields are looked up individually so that a missing or malformed figure
//! only drops that figure, not the whole response.
//!
//! # Examples
//!
//! ```
//! use benefit_consensus::domain::entities::BenefitSnapshot;
//! use benefit_consensus::domain::value_objects::BenefitField;
//! use serde_json::json;
//!
//! let snapshot = BenefitSnapshot::from_json(json!({
//!     "oop_max": 10000,
//!     "remaining_oop_max": "lots",
//! }))
//! .unwrap();
//!
//! assert_eq!(snapshot.field(BenefitField::OopMax), Ok(10000));
//! assert!(snapshot.field(BenefitField::RemainingOopMax).is_err());
//! assert!(snapshot.field(BenefitField::Copay).is_err());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::BenefitField;
use serde_json::{Map, Value};

/// A provider response: a JSON object keyed by benefit field name.
#[derive(Debug, Clone, PartialEq)]
pub struct BenefitSnapshot {
    fields: Map<String, Value>,
}

impl BenefitSnapshot {
    /// Builds a snapshot from a decoded JSON body.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnexpectedShape` if `value` is not an object.
    pub fn from_json(value: Value) -> DomainResult<Self> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(DomainError::unexpected_shape(json_kind(&other))),
        }
    }

    /// Looks up one figure in minor units.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingField` if the key is absent and
    /// `DomainError::FieldTypeMismatch` if the value is not an integer that
    /// fits in `i64`.
    pub fn field(&self, field: BenefitField) -> DomainResult<i64> {
        let name = field.as_str();
        let value = self
            .fields
            .get(name)
            .ok_or_else(|| DomainError::missing_field(name))?;

        value
            .as_i64()
            .ok_or_else(|| DomainError::field_type_mismatch(name, json_kind(value)))
    }

    /// Returns the number of keys in the underlying object.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the underlying object has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Short name of a JSON value's type, for diagnostics.
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() => "integer",
        Value::Number(n) if n.is_u64() => "integer out of range",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_all_fields() {
        let snapshot = BenefitSnapshot::from_json(json!({
            "oop_max": 10000,
            "remaining_oop_max": 9000,
            "copay": 1000
        }))
        .unwrap();

        assert_eq!(snapshot.field(BenefitField::OopMax), Ok(10000));
        assert_eq!(snapshot.field(BenefitField::RemainingOopMax), Ok(9000));
        assert_eq!(snapshot.field(BenefitField::Copay), Ok(1000));
        assert_eq!(snapshot.len(), 3);
    }

    #[test]
    fn rejects_non_object_bodies() {
        for body in [json!(null), json!([1, 2, 3]), json!("text"), json!(42)] {
            assert!(matches!(
                BenefitSnapshot::from_json(body),
                Err(DomainError::UnexpectedShape(_))
            ));
        }
    }

    #[test]
    fn empty_object_reports_missing_fields() {
        let snapshot = BenefitSnapshot::from_json(json!({})).unwrap();
        assert!(snapshot.is_empty());
        assert_eq!(
            snapshot.field(BenefitField::Copay),
            Err(DomainError::MissingField("copay"))
        );
    }

    #[test]
    fn type_mismatch_is_per_field() {
        let snapshot = BenefitSnapshot::from_json(json!({
            "oop_max": "10000",
            "remaining_oop_max": 12.5,
            "copay": 1000
        }))
        .unwrap();

        assert_eq!(
            snapshot.field(BenefitField::OopMax),
            Err(DomainError::field_type_mismatch("oop_max", "string"))
        );
        assert_eq!(
            snapshot.field(BenefitField::RemainingOopMax),
            Err(DomainError::field_type_mismatch("remaining_oop_max", "float"))
        );
        assert_eq!(snapshot.field(BenefitField::Copay), Ok(1000));
    }

    #[test]
    fn out_of_range_integer_is_mismatch() {
        let snapshot = BenefitSnapshot::from_json(json!({ "copay": u64::MAX })).unwrap();
        assert!(matches!(
            snapshot.field(BenefitField::Copay),
            Err(DomainError::FieldTypeMismatch { .. })
        ));
    }
}
