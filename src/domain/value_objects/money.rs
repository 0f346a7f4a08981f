//! # Money
//!
//! Currency amounts held in minor units (cents) and rendered for display.
//!
//! # Examples
//!
//! ```
//! use benefit_consensus::domain::value_objects::Money;
//!
//! assert_eq!(Money::from_minor_units(1_000_000).to_string(), "$10,000.00");
//! assert_eq!(Money::from_minor_units(1050).to_string(), "$10.50");
//! ```

use rust_decimal::Decimal;
use std::fmt;

/// Number of minor units in one major unit, expressed as a decimal scale.
const MINOR_UNIT_SCALE: u32 = 2;

/// Currency symbol prefixed to formatted amounts.
pub const CURRENCY_SYMBOL: &str = "$";

/// A currency amount in minor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Money(i64);

impl Money {
    /// Creates an amount from minor units (cents).
    #[inline]
    #[must_use]
    pub const fn from_minor_units(minor_units: i64) -> Self {
        Self(minor_units)
    }

    /// Returns the amount in major units as an exact decimal.
    #[must_use]
    pub fn as_decimal(&self) -> Decimal {
        Decimal::new(self.0, MINOR_UNIT_SCALE)
    }
}

impl fmt::Display for Money {
    /// Formats as `$` followed by the signed amount with comma-grouped
    /// thousands and two decimals. Negative amounts render as `$-5.00`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = format!("{:.2}", self.as_decimal());
        let (sign, unsigned) = match rendered.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", rendered.as_str()),
        };
        let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, "00"));
        write!(
            f,
            "{}{}{}.{}",
            CURRENCY_SYMBOL,
            sign,
            group_thousands(whole),
            fraction
        )
    }
}

/// Inserts a comma between every group of three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
