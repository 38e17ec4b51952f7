//! Allowed-value membership and condition gating.

use std::collections::BTreeSet;

use super::offending_ids;
use crate::rules::{Condition, ValueSet};

/// One column read in the representation a value set compares against.
#[derive(Debug, Clone, PartialEq)]
pub enum Cells {
    Text(Vec<Option<String>>),
    Numbers(Vec<Option<f64>>),
}

impl Cells {
    pub fn len(&self) -> usize {
        match self {
            Cells::Text(values) => values.len(),
            Cells::Numbers(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Membership of row `idx` in `set`. Missing rows count as null.
    pub fn is_member(&self, idx: usize, set: &ValueSet) -> bool {
        match self {
            Cells::Text(values) => {
                set.contains_text(values.get(idx).and_then(|value| value.as_deref()))
            }
            Cells::Numbers(values) => set.contains_number(values.get(idx).copied().flatten()),
        }
    }
}

/// Row mask of a condition; every row is in scope without one.
pub fn condition_mask(condition: Option<(&Condition, &Cells)>, rows: usize) -> Vec<bool> {
    match condition {
        None => vec![true; rows],
        Some((condition, cells)) => (0..rows)
            .map(|idx| condition.gates_in(cells.is_member(idx, &condition.values)))
            .collect(),
    }
}

/// Rows in scope whose value is outside `allowed`.
pub fn invalid_values(
    ids: &[String],
    cells: &Cells,
    allowed: &ValueSet,
    scope: &[bool],
) -> BTreeSet<String> {
    offending_ids(ids, |idx| scope[idx] && !cells.is_member(idx, allowed))
}
