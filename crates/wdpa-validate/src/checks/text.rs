use std::collections::BTreeSet;

use super::offending_ids;

/// Records whose value contains any of `characters`. Nulls are skipped.
pub fn forbidden_characters(
    ids: &[String],
    values: &[Option<String>],
    characters: &[char],
) -> BTreeSet<String> {
    offending_ids(ids, |idx| {
        values[idx]
            .as_deref()
            .is_some_and(|value| value.contains(characters))
    })
}

/// Records whose value is null.
pub fn null_values(ids: &[String], values: &[Option<String>]) -> BTreeSet<String> {
    offending_ids(ids, |idx| values[idx].is_none())
}
