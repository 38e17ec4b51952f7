//! Read-only view of a WDPA table.

use std::collections::{BTreeMap, BTreeSet};

use polars::prelude::{AnyValue, BooleanChunked, Column, DataFrame, NewChunkedArray};
use wdpa_common::{any_to_f64, any_to_text, canonical_text};

use crate::error::{ModelError, Result};
use crate::field::Field;
use crate::lookup::CaseInsensitiveSet;
use crate::schema::SchemaVariant;

/// Prefix used to identify a record whose `WDPA_PID` is missing.
pub const ROW_ID_PREFIX: &str = "row:";

/// A loaded WDPA table bound to a schema variant.
///
/// The frame is never modified after construction. Rules read typed columns
/// through [`Dataset::text_values`] and [`Dataset::numeric_values`] and keep
/// anything they derive in their own buffers.
#[derive(Debug, Clone)]
pub struct Dataset {
    variant: SchemaVariant,
    frame: DataFrame,
    columns: BTreeMap<Field, String>,
}

impl Dataset {
    /// Bind a frame to a variant, resolving every field's column.
    ///
    /// Column names are matched ignoring case. Extra columns are allowed.
    pub fn new(variant: SchemaVariant, frame: DataFrame) -> Result<Self> {
        let lookup = CaseInsensitiveSet::new(
            frame
                .get_column_names()
                .iter()
                .map(|name| name.as_str()),
        );
        let mut columns = BTreeMap::new();
        for field in variant.fields() {
            let column = lookup
                .get(field.as_str())
                .ok_or(ModelError::MissingColumn { field, variant })?;
            columns.insert(field, column.to_string());
        }
        Ok(Self {
            variant,
            frame,
            columns,
        })
    }

    pub fn variant(&self) -> SchemaVariant {
        self.variant
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    /// Number of records.
    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    fn column(&self, field: Field) -> Result<&Column> {
        let name = self
            .columns
            .get(&field)
            .ok_or(ModelError::FieldNotInSchema {
                field,
                variant: self.variant,
            })?;
        Ok(self.frame.column(name)?)
    }

    /// Text form of every cell of `field`, `None` for null cells.
    ///
    /// Area, year and numeric identifier values are canonicalized so that
    /// `2000.0` and `2000` read the same.
    pub fn text_values(&self, field: Field) -> Result<Vec<Option<String>>> {
        let column = self.column(field)?;
        let numeric = field.has_numeric_text();
        let values = (0..self.height())
            .map(|idx| {
                let value = column.get(idx).unwrap_or(AnyValue::Null);
                any_to_text(value).map(|text| {
                    if numeric {
                        canonical_text(&text)
                    } else {
                        text
                    }
                })
            })
            .collect();
        Ok(values)
    }

    /// Numeric reading of every cell of `field`; unparseable cells are `None`.
    pub fn numeric_values(&self, field: Field) -> Result<Vec<Option<f64>>> {
        let column = self.column(field)?;
        let values = (0..self.height())
            .map(|idx| any_to_f64(column.get(idx).unwrap_or(AnyValue::Null)))
            .collect();
        Ok(values)
    }

    /// Record identifier per row: the `WDPA_PID`, or `row:<index>` when null.
    pub fn record_ids(&self) -> Result<Vec<String>> {
        let values = self.text_values(Field::WdpaPid)?;
        Ok(values
            .into_iter()
            .enumerate()
            .map(|(idx, value)| value.unwrap_or_else(|| format!("{ROW_ID_PREFIX}{idx}")))
            .collect())
    }

    /// Grouping identifier (`WDPAID`) per row.
    pub fn group_ids(&self) -> Result<Vec<Option<String>>> {
        self.text_values(Field::WdpaId)
    }

    /// Rows whose record identifier is in `ids`, in table order.
    pub fn select_records(&self, ids: &BTreeSet<String>) -> Result<DataFrame> {
        let record_ids = self.record_ids()?;
        let keep: Vec<bool> = record_ids.iter().map(|id| ids.contains(id)).collect();
        let mask = BooleanChunked::from_slice("select".into(), &keep);
        Ok(self.frame.filter(&mask)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point_frame() -> DataFrame {
        let columns = SchemaVariant::Point
            .fields()
            .into_iter()
            .map(|field| {
                let name = field.as_str().to_ascii_lowercase();
                let values = match field {
                    Field::WdpaPid => ["10", ""],
                    Field::WdpaId => ["10.0", "11"],
                    Field::StatusYr => ["2000.0", "abc"],
                    _ => ["x", "y"],
                };
                Column::new(name.into(), values)
            })
            .collect();
        DataFrame::new(columns).expect("frame")
    }

    #[test]
    fn resolves_columns_ignoring_case() {
        let dataset = Dataset::new(SchemaVariant::Point, point_frame()).expect("dataset");
        assert_eq!(dataset.height(), 2);
        assert_eq!(
            dataset.text_values(Field::Name).expect("names"),
            vec![Some("x".to_string()), Some("y".to_string())]
        );
    }

    #[test]
    fn polygon_requires_gis_columns() {
        let error = Dataset::new(SchemaVariant::Polygon, point_frame()).unwrap_err();
        assert!(matches!(
            error,
            ModelError::MissingColumn {
                field: Field::GisMArea | Field::GisArea,
                variant: SchemaVariant::Polygon,
            }
        ));
    }

    #[test]
    fn reading_absent_field_is_an_error() {
        let dataset = Dataset::new(SchemaVariant::Point, point_frame()).expect("dataset");
        assert!(matches!(
            dataset.numeric_values(Field::GisArea),
            Err(ModelError::FieldNotInSchema { .. })
        ));
    }

    #[test]
    fn numeric_text_is_canonical() {
        let dataset = Dataset::new(SchemaVariant::Point, point_frame()).expect("dataset");
        assert_eq!(
            dataset.text_values(Field::StatusYr).expect("years"),
            vec![Some("2000".to_string()), Some("abc".to_string())]
        );
        assert_eq!(
            dataset.numeric_values(Field::StatusYr).expect("years"),
            vec![Some(2000.0), None]
        );
        assert_eq!(
            dataset.group_ids().expect("groups"),
            vec![Some("10".to_string()), Some("11".to_string())]
        );
    }

    #[test]
    fn missing_pid_uses_row_index() {
        let dataset = Dataset::new(SchemaVariant::Point, point_frame()).expect("dataset");
        assert_eq!(dataset.record_ids().expect("ids"), vec!["10", "row:1"]);
    }

    #[test]
    fn select_records_filters_rows() {
        let dataset = Dataset::new(SchemaVariant::Point, point_frame()).expect("dataset");
        let ids = BTreeSet::from(["row:1".to_string()]);
        let selected = dataset.select_records(&ids).expect("select");
        assert_eq!(selected.height(), 1);
        assert_eq!(dataset.height(), 2);
    }
}
