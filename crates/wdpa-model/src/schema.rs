use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::field::Field;

/// Columns of the per-source metadata table, keyed by `METADATAID`.
pub const SOURCE_TABLE_FIELDS: [&str; 13] = [
    "METADATAID",
    "DATA_TITLE",
    "RESP_PARTY",
    "VERIFIER",
    "YEAR",
    "UPDATE_YR",
    "LANGUAGE",
    "CHAR_SET",
    "REF_SYSTEM",
    "SCALE",
    "LINEAGE",
    "CITATION",
    "DISCLAIMER",
];

/// The two shapes a WDPA release table comes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaVariant {
    /// Polygon features, carrying the GIS-derived area fields.
    Polygon,
    /// Point features, without GIS-derived areas.
    Point,
}

impl SchemaVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaVariant::Polygon => "polygon",
            SchemaVariant::Point => "point",
        }
    }

    /// Fields every record of this variant carries, in table order.
    pub fn fields(&self) -> Vec<Field> {
        match self {
            SchemaVariant::Polygon => Field::ALL.to_vec(),
            SchemaVariant::Point => Field::ALL
                .iter()
                .copied()
                .filter(|field| !field.is_gis_derived())
                .collect(),
        }
    }

    pub fn contains(&self, field: Field) -> bool {
        match self {
            SchemaVariant::Polygon => true,
            SchemaVariant::Point => !field.is_gis_derived(),
        }
    }

    /// Returns true when the GIS-derived area checks apply.
    pub fn has_gis_areas(&self) -> bool {
        matches!(self, SchemaVariant::Polygon)
    }
}

impl fmt::Display for SchemaVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "polygon" | "poly" => Ok(SchemaVariant::Polygon),
            "point" | "pt" => Ok(SchemaVariant::Point),
            other => Err(format!("unknown schema variant: {other}")),
        }
    }
}
