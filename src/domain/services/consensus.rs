//! # Consensus
//!
//! Majority-vote reconciliation of per-field provider samples.
//!
//! The consensus value of a field is the statistical mode of the samples
//! collected for it. When several values share the highest frequency, the
//! one encountered first in sample order wins. Samples are collected in
//! provider order, so the earliest configured provider breaks ties.
//!
//! # Examples
//!
//! ```
//! use benefit_consensus::domain::services::consensus::{consensus, mode};
//!
//! assert_eq!(mode(&[1000, 2000, 1000, 1000, 3000]), Some(1000));
//! assert_eq!(consensus(&[1000, 2000, 1000, 1000, 3000]).as_deref(), Some("$10.00"));
//! assert_eq!(consensus(&[1500, 2500, 1800, 3000]).as_deref(), Some("$15.00"));
//! assert_eq!(consensus(&[]), None);
//! ```

use crate::domain::value_objects::Money;
use std::collections::HashMap;

/// Returns the most frequent value in `samples`.
///
/// Ties resolve to the tied value that appears first in `samples`.
/// Returns `None` for an empty slice.
#[must_use]
pub fn mode(samples: &[i64]) -> Option<i64> {
    let mut counts: HashMap<i64, usize> = HashMap::with_capacity(samples.len());
    for sample in samples {
        *counts.entry(*sample).or_insert(0) += 1;
    }

    let mut best: Option<(i64, usize)> = None;
    for sample in samples {
        let count = counts.get(sample).copied().unwrap_or(0);
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((*sample, count)),
        }
    }

    best.map(|(value, _)| value)
}

/// Returns the mode of `samples` formatted as currency, or `None` if there
/// are no samples.
#[must_use]
pub fn consensus(samples: &[i64]) -> Option<String> {
    mode(samples).map(|value| Money::from_minor_units(value).to_string())
}
