//! Area containment, threshold and equality checks.

use std::collections::BTreeSet;

use super::offending_ids;

/// Rows in scope whose value is at or below `min_exclusive`. Nulls are skipped.
pub fn at_or_below(
    ids: &[String],
    values: &[Option<f64>],
    min_exclusive: f64,
    scope: &[bool],
) -> BTreeSet<String> {
    offending_ids(ids, |idx| {
        scope[idx] && values[idx].is_some_and(|value| value <= min_exclusive)
    })
}

/// Rows where `smaller > larger * (1 + tolerance)`. Rows with a null side are skipped.
pub fn exceeds_container(
    ids: &[String],
    smaller: &[Option<f64>],
    larger: &[Option<f64>],
    tolerance: f64,
) -> BTreeSet<String> {
    offending_ids(ids, |idx| match (smaller[idx], larger[idx]) {
        (Some(smaller), Some(larger)) => smaller > larger * (1.0 + tolerance),
        _ => false,
    })
}

/// Rows in scope where `left != right`. A null side counts as unequal.
pub fn unequal(
    ids: &[String],
    left: &[Option<f64>],
    right: &[Option<f64>],
    scope: &[bool],
) -> BTreeSet<String> {
    offending_ids(ids, |idx| {
        scope[idx]
            && match (left[idx], right[idx]) {
                (Some(left), Some(right)) => left != right,
                _ => true,
            }
    })
}
