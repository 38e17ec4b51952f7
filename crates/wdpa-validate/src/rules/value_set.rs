//! Allowed-value sets and the conditions that gate a rule.

use std::collections::BTreeSet;

use serde::Serialize;
use wdpa_model::FieldKind;

/// Values a field may take.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ValueSet {
    /// Exact, case-sensitive text. An empty string admits null.
    Text { values: BTreeSet<String> },
    /// Exact numbers.
    Numeric { values: Vec<f64> },
    /// `0`, or a whole year in `min..=max`.
    YearRange { min: i32, max: i32 },
    /// One or more `criteria` in strictly increasing order, concatenated,
    /// or one of the `extras`.
    CriteriaCombination {
        criteria: Vec<String>,
        extras: BTreeSet<String>,
    },
}

impl ValueSet {
    pub fn text<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ValueSet::Text {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn numeric(values: &[f64]) -> Self {
        ValueSet::Numeric {
            values: values.to_vec(),
        }
    }

    pub fn years(min: i32, max: i32) -> Self {
        ValueSet::YearRange { min, max }
    }

    pub fn criteria<I, S, J, T>(criteria: I, extras: J) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        J: IntoIterator<Item = T>,
        T: Into<String>,
    {
        ValueSet::CriteriaCombination {
            criteria: criteria.into_iter().map(Into::into).collect(),
            extras: extras.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true when values are compared as numbers.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ValueSet::Numeric { .. } | ValueSet::YearRange { .. })
    }

    pub fn is_empty(&self) -> bool {
        match self {
            ValueSet::Text { values } => values.is_empty(),
            ValueSet::Numeric { values } => values.is_empty(),
            ValueSet::YearRange { min, max } => min > max,
            ValueSet::CriteriaCombination { criteria, extras } => {
                criteria.is_empty() && extras.is_empty()
            }
        }
    }

    /// Returns true when the set can be applied to a field of `kind`.
    pub fn fits(&self, kind: FieldKind) -> bool {
        match self {
            ValueSet::Text { .. } => !kind.is_numeric(),
            ValueSet::Numeric { .. } => kind.is_numeric(),
            ValueSet::YearRange { .. } => kind == FieldKind::Year,
            ValueSet::CriteriaCombination { .. } => kind == FieldKind::Categorical,
        }
    }

    /// Short description of what [`ValueSet::fits`] accepts.
    pub fn expected_kind(&self) -> &'static str {
        match self {
            ValueSet::Text { .. } => "a text field",
            ValueSet::Numeric { .. } => "a numeric field",
            ValueSet::YearRange { .. } => "a year field",
            ValueSet::CriteriaCombination { .. } => "a categorical field",
        }
    }

    /// Membership of a text value; `None` is null.
    pub fn contains_text(&self, value: Option<&str>) -> bool {
        match self {
            ValueSet::Text { values } => values.contains(value.unwrap_or("")),
            ValueSet::CriteriaCombination { criteria, extras } => match value {
                Some(value) => extras.contains(value) || is_combination(value, criteria),
                None => false,
            },
            ValueSet::Numeric { .. } | ValueSet::YearRange { .. } => false,
        }
    }

    /// Membership of a numeric value; `None` is null or unparseable.
    pub fn contains_number(&self, value: Option<f64>) -> bool {
        let Some(value) = value else {
            return false;
        };
        match self {
            ValueSet::Numeric { values } => values.iter().any(|allowed| *allowed == value),
            ValueSet::YearRange { min, max } => {
                value == 0.0
                    || (value.fract() == 0.0
                        && value >= f64::from(*min)
                        && value <= f64::from(*max))
            }
            ValueSet::Text { .. } | ValueSet::CriteriaCombination { .. } => false,
        }
    }
}

/// Parses `value` as consecutive criteria with strictly increasing positions.
fn is_combination(value: &str, criteria: &[String]) -> bool {
    let mut rest = value;
    let mut last: Option<usize> = None;
    while !rest.is_empty() {
        let Some(position) = criteria
            .iter()
            .enumerate()
            .filter(|(idx, _)| last.is_none_or(|last| *idx > last))
            .find(|(_, criterion)| rest.starts_with(criterion.as_str()))
            .map(|(idx, _)| idx)
        else {
            return false;
        };
        rest = &rest[criteria[position].len()..];
        last = Some(position);
    }
    last.is_some()
}

/// How a condition's set gates a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionMode {
    /// The rule applies where the condition field is in the set.
    Is,
    /// The rule applies where the condition field is not in the set.
    IsNot,
}

/// Restricts a rule to the records where another field matches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Condition {
    pub field: wdpa_model::Field,
    pub values: ValueSet,
    pub mode: ConditionMode,
}

impl Condition {
    pub fn is(field: wdpa_model::Field, values: ValueSet) -> Self {
        Self {
            field,
            values,
            mode: ConditionMode::Is,
        }
    }

    pub fn is_not(field: wdpa_model::Field, values: ValueSet) -> Self {
        Self {
            field,
            values,
            mode: ConditionMode::IsNot,
        }
    }

    /// Applies the mode to a membership result.
    pub fn gates_in(&self, member: bool) -> bool {
        match self.mode {
            ConditionMode::Is => member,
            ConditionMode::IsNot => !member,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int_crit() -> ValueSet {
        ValueSet::criteria(
            ["(i)", "(ii)", "(iii)", "(iv)", "(v)", "(vi)", "(vii)", "(viii)", "(ix)", "(x)"],
            ["Not Reported"],
        )
    }

    #[test]
    fn criteria_combinations() {
        let set = int_crit();
        assert!(set.contains_text(Some("(i)")));
        assert!(set.contains_text(Some("(i)(iii)(x)")));
        assert!(set.contains_text(Some("(viii)(ix)")));
        assert!(set.contains_text(Some("Not Reported")));
        assert!(!set.contains_text(Some("(iii)(i)")));
        assert!(!set.contains_text(Some("(i)(i)")));
        assert!(!set.contains_text(Some("(i) (ii)")));
        assert!(!set.contains_text(Some("(xi)")));
        assert!(!set.contains_text(Some("")));
        assert!(!set.contains_text(None));
    }

    #[test]
    fn all_ten_criteria_in_order() {
        let set = int_crit();
        assert!(set.contains_text(Some(
            "(i)(ii)(iii)(iv)(v)(vi)(vii)(viii)(ix)(x)"
        )));
    }

    #[test]
    fn text_null_needs_empty_marker() {
        assert!(!ValueSet::text(["A"]).contains_text(None));
        assert!(ValueSet::text(["A", ""]).contains_text(None));
        assert!(!ValueSet::text(["A"]).contains_text(Some("a")));
    }

    #[test]
    fn year_range() {
        let set = ValueSet::years(1750, 2024);
        assert!(set.contains_number(Some(0.0)));
        assert!(set.contains_number(Some(1750.0)));
        assert!(set.contains_number(Some(2024.0)));
        assert!(!set.contains_number(Some(2025.0)));
        assert!(!set.contains_number(Some(1749.0)));
        assert!(!set.contains_number(Some(1999.5)));
        assert!(!set.contains_number(None));
    }

    #[test]
    fn kinds_fit() {
        assert!(ValueSet::text(["1"]).fits(FieldKind::Categorical));
        assert!(!ValueSet::text(["0"]).fits(FieldKind::Area));
        assert!(ValueSet::numeric(&[0.0]).fits(FieldKind::Area));
        assert!(!ValueSet::years(1750, 2024).fits(FieldKind::Area));
        assert!(!int_crit().fits(FieldKind::FreeText));
    }

    #[test]
    fn condition_modes() {
        let condition = Condition::is_not(wdpa_model::Field::Marine, ValueSet::text(["0"]));
        assert!(condition.gates_in(false));
        assert!(!condition.gates_in(true));
    }
}
