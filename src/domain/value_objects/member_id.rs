//! # Member Identifier
//!
//! Positive integer identifier of a plan member.

use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;
use std::str::FromStr;

/// Identifier of a plan member.
///
/// Always strictly positive.
///
/// # Examples
///
/// ```
/// use benefit_consensus::domain::value_objects::MemberId;
///
/// let id: MemberId = "123".parse().unwrap();
/// assert_eq!(id.get(), 123);
/// assert!("0".parse::<MemberId>().is_err());
/// assert!("abc".parse::<MemberId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MemberId(u64);

impl MemberId {
    /// Creates a member id, rejecting zero.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidMemberId` if `value` is zero.
    pub fn new(value: u64) -> DomainResult<Self> {
        if value == 0 {
            return Err(DomainError::invalid_member_id(
                "member id must be a positive integer",
            ));
        }
        Ok(Self(value))
    }

    /// Returns the raw identifier.
    #[inline]
    #[must_use]
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl FromStr for MemberId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.parse::<u64>().map_err(|e| {
            DomainError::invalid_member_id(format!("'{}' is not a positive integer: {}", s, e))
        })?;
        Self::new(value)
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
