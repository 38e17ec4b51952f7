//! Grouped consistency and duplicate keys.

use std::collections::{BTreeMap, BTreeSet};

use super::offending_ids;

/// Key values that occur more than once, plus the record identifier of
/// every record whose key is null.
pub fn duplicate_keys(ids: &[String], keys: &[Option<String>]) -> BTreeSet<String> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    let mut offenders = BTreeSet::new();
    for (id, key) in ids.iter().zip(keys) {
        match key {
            Some(key) => *counts.entry(key.as_str()).or_default() += 1,
            None => {
                offenders.insert(id.clone());
            }
        }
    }
    offenders.extend(
        counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(key, _)| key.to_string()),
    );
    offenders
}

/// Every record of a group that holds more than one distinct non-null value.
///
/// Records without a group identifier are never grouped together.
pub fn inconsistent_groups(
    ids: &[String],
    groups: &[Option<String>],
    values: &[Option<String>],
) -> BTreeSet<String> {
    let mut distinct: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for (group, value) in groups.iter().zip(values) {
        if let (Some(group), Some(value)) = (group, value) {
            distinct
                .entry(group.as_str())
                .or_default()
                .insert(value.as_str());
        }
    }
    offending_ids(ids, |idx| {
        groups[idx]
            .as_deref()
            .and_then(|group| distinct.get(group))
            .is_some_and(|values| values.len() > 1)
    })
}
