use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Semantic type of a WDPA attribute.
///
/// The kind decides how a rule compares values: area and year fields are
/// compared numerically, everything else as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Record, grouping or metadata identifier.
    Identifier,
    /// Value drawn from a closed vocabulary.
    Categorical,
    /// Names, designations and other free text.
    FreeText,
    /// Area in km².
    Area,
    /// Calendar year.
    Year,
    /// Zero or more codes separated by `;`.
    CodeList,
}

impl FieldKind {
    /// Returns true for kinds whose values are read as numbers.
    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldKind::Area | FieldKind::Year)
    }
}

/// An attribute of the WDPA polygon or point table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Field {
    #[serde(rename = "WDPAID")]
    WdpaId,
    WdpaPid,
    PaDef,
    Name,
    OrigName,
    Desig,
    DesigEng,
    DesigType,
    IucnCat,
    IntCrit,
    Marine,
    RepMArea,
    GisMArea,
    RepArea,
    GisArea,
    NoTake,
    NoTkArea,
    Status,
    StatusYr,
    GovType,
    OwnType,
    MangAuth,
    MangPlan,
    Verif,
    #[serde(rename = "METADATAID")]
    MetadataId,
    SubLoc,
    ParentIso3,
    Iso3,
}

impl Field {
    /// Every field, in the column order of the polygon table.
    pub const ALL: [Field; 28] = [
        Field::WdpaId,
        Field::WdpaPid,
        Field::PaDef,
        Field::Name,
        Field::OrigName,
        Field::Desig,
        Field::DesigEng,
        Field::DesigType,
        Field::IucnCat,
        Field::IntCrit,
        Field::Marine,
        Field::RepMArea,
        Field::GisMArea,
        Field::RepArea,
        Field::GisArea,
        Field::NoTake,
        Field::NoTkArea,
        Field::Status,
        Field::StatusYr,
        Field::GovType,
        Field::OwnType,
        Field::MangAuth,
        Field::MangPlan,
        Field::Verif,
        Field::MetadataId,
        Field::SubLoc,
        Field::ParentIso3,
        Field::Iso3,
    ];

    /// Column name as it appears in the source table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::WdpaId => "WDPAID",
            Field::WdpaPid => "WDPA_PID",
            Field::PaDef => "PA_DEF",
            Field::Name => "NAME",
            Field::OrigName => "ORIG_NAME",
            Field::Desig => "DESIG",
            Field::DesigEng => "DESIG_ENG",
            Field::DesigType => "DESIG_TYPE",
            Field::IucnCat => "IUCN_CAT",
            Field::IntCrit => "INT_CRIT",
            Field::Marine => "MARINE",
            Field::RepMArea => "REP_M_AREA",
            Field::GisMArea => "GIS_M_AREA",
            Field::RepArea => "REP_AREA",
            Field::GisArea => "GIS_AREA",
            Field::NoTake => "NO_TAKE",
            Field::NoTkArea => "NO_TK_AREA",
            Field::Status => "STATUS",
            Field::StatusYr => "STATUS_YR",
            Field::GovType => "GOV_TYPE",
            Field::OwnType => "OWN_TYPE",
            Field::MangAuth => "MANG_AUTH",
            Field::MangPlan => "MANG_PLAN",
            Field::Verif => "VERIF",
            Field::MetadataId => "METADATAID",
            Field::SubLoc => "SUB_LOC",
            Field::ParentIso3 => "PARENT_ISO3",
            Field::Iso3 => "ISO3",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Field::WdpaId | Field::WdpaPid | Field::MetadataId => FieldKind::Identifier,
            Field::PaDef
            | Field::DesigType
            | Field::IucnCat
            | Field::IntCrit
            | Field::Marine
            | Field::NoTake
            | Field::Status
            | Field::GovType
            | Field::OwnType
            | Field::Verif => FieldKind::Categorical,
            Field::Name
            | Field::OrigName
            | Field::Desig
            | Field::DesigEng
            | Field::MangAuth
            | Field::MangPlan
            | Field::SubLoc => FieldKind::FreeText,
            Field::RepMArea | Field::GisMArea | Field::RepArea | Field::GisArea | Field::NoTkArea => {
                FieldKind::Area
            }
            Field::StatusYr => FieldKind::Year,
            Field::ParentIso3 | Field::Iso3 => FieldKind::CodeList,
        }
    }

    /// Returns true when the text form of a value is normalized as a number,
    /// so that `2000.0` and `2000` compare equal.
    pub fn has_numeric_text(&self) -> bool {
        self.kind().is_numeric() || matches!(self, Field::WdpaId | Field::MetadataId)
    }

    /// Returns true for the two areas computed from geometry.
    pub fn is_gis_derived(&self) -> bool {
        matches!(self, Field::GisArea | Field::GisMArea)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = String;

    /// Parse a column name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == normalized)
            .ok_or_else(|| format!("unknown WDPA field: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(field.as_str().parse::<Field>(), Ok(field));
        }
        assert_eq!("wdpa_pid".parse::<Field>(), Ok(Field::WdpaPid));
        assert!("GIS_AREA_2".parse::<Field>().is_err());
    }

    #[test]
    fn serde_uses_column_names() {
        let json = serde_json::to_string(&[Field::WdpaId, Field::MetadataId, Field::NoTkArea])
            .expect("serialize fields");
        assert_eq!(json, r#"["WDPAID","METADATAID","NO_TK_AREA"]"#);
    }

    #[test]
    fn numeric_kinds() {
        assert!(Field::RepArea.kind().is_numeric());
        assert!(Field::StatusYr.kind().is_numeric());
        assert!(!Field::Marine.kind().is_numeric());
        assert!(!Field::WdpaId.kind().is_numeric());
    }
}
