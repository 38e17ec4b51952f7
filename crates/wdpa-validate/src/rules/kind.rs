//! Rule descriptors: a kind tag plus the parameters its evaluator needs.

use serde::Serialize;
use wdpa_model::Field;

use super::value_set::{Condition, ValueSet};
use crate::config::{MarineBands, PlausibilityParams};

/// Which field of an area pair divides `A + B`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Denominator {
    Reported,
    Gis,
}

/// What a catalog entry checks.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleKind {
    /// Values of `field` that occur more than once.
    DuplicateKey { field: Field },
    /// Values of `field` outside `allowed`, where the condition holds.
    Membership {
        field: Field,
        allowed: ValueSet,
        condition: Option<Condition>,
    },
    /// Values of `field` at or below `min_exclusive`, where the condition holds.
    Threshold {
        field: Field,
        min_exclusive: f64,
        condition: Option<Condition>,
    },
    /// Records where `left` and `right` differ, where the condition holds.
    FieldEquality {
        left: Field,
        right: Field,
        condition: Option<Condition>,
    },
    /// Records where `smaller > larger * (1 + tolerance)`.
    AreaRatio {
        smaller: Field,
        larger: Field,
        tolerance: f64,
    },
    /// Reported and GIS areas whose ratio is out of line with the dataset.
    AreaPlausibility {
        reported: Field,
        gis: Field,
        denominator: Denominator,
        params: PlausibilityParams,
    },
    /// `MARINE` disagreeing with the band derived from the GIS areas.
    MarineClassification { bands: MarineBands },
    /// Groups of one `WDPAID` holding more than one value of `field`.
    Consistency { field: Field },
    /// Values of `field` containing any of `characters`.
    ForbiddenCharacter { field: Field, characters: Vec<char> },
    /// Null values of `field`.
    NullPresence { field: Field },
    /// Code lists with a component missing from the reference codes.
    CountryCodes { field: Field },
    /// Values of `field` absent from the source table.
    SourceTableReference { field: Field },
}

impl RuleKind {
    /// Every field the rule reads, target first.
    pub fn fields(&self) -> Vec<Field> {
        let mut fields = match self {
            RuleKind::DuplicateKey { field }
            | RuleKind::ForbiddenCharacter { field, .. }
            | RuleKind::NullPresence { field }
            | RuleKind::CountryCodes { field }
            | RuleKind::SourceTableReference { field } => vec![*field],
            RuleKind::Consistency { field } => vec![*field, Field::WdpaId],
            RuleKind::Membership { field, .. } | RuleKind::Threshold { field, .. } => {
                vec![*field]
            }
            RuleKind::FieldEquality { left, right, .. } => vec![*left, *right],
            RuleKind::AreaRatio {
                smaller, larger, ..
            } => vec![*smaller, *larger],
            RuleKind::AreaPlausibility { reported, gis, .. } => vec![*reported, *gis],
            RuleKind::MarineClassification { .. } => {
                vec![Field::Marine, Field::GisMArea, Field::GisArea]
            }
        };
        if let Some(condition) = self.condition() {
            fields.push(condition.field);
        }
        fields
    }

    pub fn condition(&self) -> Option<&Condition> {
        match self {
            RuleKind::Membership { condition, .. }
            | RuleKind::Threshold { condition, .. }
            | RuleKind::FieldEquality { condition, .. } => condition.as_ref(),
            _ => None,
        }
    }

    /// Name of the evaluator, for listings.
    pub fn label(&self) -> &'static str {
        match self {
            RuleKind::DuplicateKey { .. } => "duplicate key",
            RuleKind::Membership {
                condition: None, ..
            } => "membership",
            RuleKind::Membership { .. } => "conditional membership",
            RuleKind::Threshold { .. } => "threshold",
            RuleKind::FieldEquality { .. } => "field equality",
            RuleKind::AreaRatio { .. } => "area ratio",
            RuleKind::AreaPlausibility { .. } => "area plausibility",
            RuleKind::MarineClassification { .. } => "marine classification",
            RuleKind::Consistency { .. } => "consistency",
            RuleKind::ForbiddenCharacter { .. } => "forbidden character",
            RuleKind::NullPresence { .. } => "null presence",
            RuleKind::CountryCodes { .. } => "country codes",
            RuleKind::SourceTableReference { .. } => "source table reference",
        }
    }
}
