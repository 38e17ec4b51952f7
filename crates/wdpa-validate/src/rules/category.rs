use serde::{Deserialize, Serialize};

/// Report grouping of catalog rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleCategory {
    Duplicate,
    Inconsistent,
    Invalid,
    AreaInvalid,
    ForbiddenCharacter,
    MissingValue,
    CrossReference,
}

impl RuleCategory {
    /// Get all rule categories, in report order.
    pub const fn all() -> &'static [Self] {
        &[
            Self::Duplicate,
            Self::Inconsistent,
            Self::Invalid,
            Self::AreaInvalid,
            Self::ForbiddenCharacter,
            Self::MissingValue,
            Self::CrossReference,
        ]
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Duplicate => "Duplicate",
            Self::Inconsistent => "Inconsistent",
            Self::Invalid => "Invalid",
            Self::AreaInvalid => "Area",
            Self::ForbiddenCharacter => "Forbidden Character",
            Self::MissingValue => "Missing Value",
            Self::CrossReference => "Cross Reference",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Duplicate => "Record identifiers used more than once",
            Self::Inconsistent => "Records of one protected area that disagree",
            Self::Invalid => "Values outside the allowed vocabulary",
            Self::AreaInvalid => "Implausible or contradictory areas",
            Self::ForbiddenCharacter => "Free text containing disallowed characters",
            Self::MissingValue => "Free text fields left empty",
            Self::CrossReference => "References to the source table",
        }
    }
}

impl std::fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
