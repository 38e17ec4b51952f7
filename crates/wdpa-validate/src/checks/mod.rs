//! Generic evaluators.
//!
//! Each function works on columns already read from the dataset and
//! returns the offending record identifiers. None of them touches the
//! dataset itself, so any number can run at once.

pub mod area;
pub mod codes;
pub mod consistency;
pub mod marine;
pub mod membership;
pub mod plausibility;
pub mod text;

use std::collections::BTreeSet;

/// Identifiers of the rows where `offending` returns true.
pub(crate) fn offending_ids<F>(ids: &[String], mut offending: F) -> BTreeSet<String>
where
    F: FnMut(usize) -> bool,
{
    ids.iter()
        .enumerate()
        .filter(|(idx, _)| offending(*idx))
        .map(|(_, id)| id.clone())
        .collect()
}
