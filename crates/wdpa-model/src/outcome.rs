use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Result of evaluating one rule against one dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RuleOutcome {
    /// The rule ran; `offenders` holds the offending record identifiers
    /// (or duplicated key values for duplicate checks).
    Evaluated { offenders: BTreeSet<String> },
    /// The rule could not run against this dataset.
    Failed { reason: String },
}

impl RuleOutcome {
    pub fn evaluated<I, S>(offenders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RuleOutcome::Evaluated {
            offenders: offenders.into_iter().map(Into::into).collect(),
        }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        RuleOutcome::Failed {
            reason: reason.into(),
        }
    }

    /// Boolean mode: `Some(true)` when any violation exists, `None` when failed.
    pub fn flag(&self) -> Option<bool> {
        match self {
            RuleOutcome::Evaluated { offenders } => Some(!offenders.is_empty()),
            RuleOutcome::Failed { .. } => None,
        }
    }

    pub fn offenders(&self) -> Option<&BTreeSet<String>> {
        match self {
            RuleOutcome::Evaluated { offenders } => Some(offenders),
            RuleOutcome::Failed { .. } => None,
        }
    }

    pub fn offender_count(&self) -> usize {
        self.offenders().map_or(0, BTreeSet::len)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RuleOutcome::Failed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_follows_offenders() {
        assert_eq!(RuleOutcome::evaluated(Vec::<String>::new()).flag(), Some(false));
        assert_eq!(RuleOutcome::evaluated(["1"]).flag(), Some(true));
        assert_eq!(RuleOutcome::failed("boom").flag(), None);
    }

    #[test]
    fn serializes_with_status_tag() {
        let json = serde_json::to_string(&RuleOutcome::evaluated(["b", "a"])).expect("json");
        assert_eq!(json, r#"{"status":"evaluated","offenders":["a","b"]}"#);
    }
}
