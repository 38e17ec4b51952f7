//! Collected outcomes of one validation run.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use wdpa_model::{RuleOutcome, SchemaVariant};

use crate::rules::RuleCategory;

/// Outcome of one catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleResult {
    pub name: String,
    pub category: RuleCategory,
    pub description: String,
    pub provisional: bool,
    pub outcome: RuleOutcome,
}

/// Outcomes of a catalog against one dataset, in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub variant: SchemaVariant,
    pub record_count: usize,
    pub results: Vec<RuleResult>,
}

impl ValidationReport {
    pub fn get(&self, name: &str) -> Option<&RuleResult> {
        self.results.iter().find(|result| result.name == name)
    }

    /// Outcome of the rule called `name`.
    pub fn outcome(&self, name: &str) -> Option<&RuleOutcome> {
        self.get(name).map(|result| &result.outcome)
    }

    /// Rules that found at least one violation.
    pub fn violated(&self) -> impl Iterator<Item = &RuleResult> {
        self.results
            .iter()
            .filter(|result| result.outcome.flag() == Some(true))
    }

    /// Rules that could not be evaluated.
    pub fn failed(&self) -> impl Iterator<Item = &RuleResult> {
        self.results
            .iter()
            .filter(|result| result.outcome.is_failed())
    }

    pub fn has_violations(&self) -> bool {
        self.violated().next().is_some()
    }

    pub fn has_failures(&self) -> bool {
        self.failed().next().is_some()
    }

    /// Returns true when every rule ran and none found a violation.
    pub fn is_clean(&self) -> bool {
        !self.has_violations() && !self.has_failures()
    }

    /// Number of violated rules per category.
    pub fn violations_by_category(&self) -> BTreeMap<RuleCategory, usize> {
        let mut counts = BTreeMap::new();
        for result in self.violated() {
            *counts.entry(result.category).or_default() += 1;
        }
        counts
    }

    /// Boolean mode of every rule; `None` for failed rules.
    pub fn flags(&self) -> BTreeMap<String, Option<bool>> {
        self.results
            .iter()
            .map(|result| (result.name.clone(), result.outcome.flag()))
            .collect()
    }

    /// Rule name to outcome.
    pub fn to_map(&self) -> BTreeMap<String, RuleOutcome> {
        self.results
            .iter()
            .map(|result| (result.name.clone(), result.outcome.clone()))
            .collect()
    }
}

impl From<ValidationReport> for BTreeMap<String, RuleOutcome> {
    fn from(report: ValidationReport) -> Self {
        report
            .results
            .into_iter()
            .map(|result| (result.name, result.outcome))
            .collect()
    }
}
