#![allow(dead_code)]

use polars::prelude::{Column, DataFrame};
use wdpa_model::{Dataset, Field, ReferenceCodes, SchemaVariant};

/// Value of a record that passes every rule, for row `idx`.
pub fn clean_value(field: Field, idx: usize) -> String {
    let value = match field {
        Field::WdpaId | Field::WdpaPid => return (idx + 1).to_string(),
        Field::PaDef => "1",
        Field::Name | Field::OrigName => "Yellowstone",
        Field::Desig | Field::DesigEng => "National Park",
        Field::DesigType => "National",
        Field::IucnCat => "II",
        Field::IntCrit => "Not Applicable",
        Field::Marine => "0",
        Field::RepMArea | Field::GisMArea | Field::NoTkArea => "0",
        Field::RepArea | Field::GisArea => "100",
        Field::NoTake => "Not Applicable",
        Field::Status => "Designated",
        Field::StatusYr => "1872",
        Field::GovType => "Federal or national ministry or agency",
        Field::OwnType => "State",
        Field::MangAuth => "National Park Service",
        Field::MangPlan => "Not Reported",
        Field::Verif => "State Verified",
        Field::MetadataId => "1",
        Field::SubLoc => "US-WY",
        Field::ParentIso3 | Field::Iso3 => "USA",
    };
    value.to_string()
}

/// Builds a dataset of clean records with per-row overrides. `""` is null.
pub fn dataset<S: AsRef<str>>(variant: SchemaVariant, rows: &[Vec<(Field, S)>]) -> Dataset {
    let columns = variant
        .fields()
        .into_iter()
        .map(|field| {
            let values: Vec<String> = rows
                .iter()
                .enumerate()
                .map(|(idx, row)| {
                    row.iter()
                        .find(|(name, _)| *name == field)
                        .map(|(_, value)| value.as_ref().to_string())
                        .unwrap_or_else(|| clean_value(field, idx))
                })
                .collect();
            Column::new(field.as_str().into(), values)
        })
        .collect();
    let frame = DataFrame::new(columns).expect("frame");
    Dataset::new(variant, frame).expect("dataset")
}

pub fn clean_rows(n: usize) -> Vec<Vec<(Field, &'static str)>> {
    vec![Vec::new(); n]
}

pub fn codes() -> ReferenceCodes {
    ReferenceCodes::new(["USA", "CAN", "FRA", "GBR", "NCL"])
}
