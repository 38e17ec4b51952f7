use std::collections::BTreeSet;

use polars::prelude::{AnyValue, DataFrame};
use wdpa_common::{any_to_text, canonical_text};

use crate::error::{ModelError, Result};
use crate::lookup::CaseInsensitiveSet;
use crate::schema::SOURCE_TABLE_FIELDS;

/// Metadata identifiers present in the per-source metadata table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceTable {
    metadata_ids: BTreeSet<String>,
}

impl SourceTable {
    pub fn new<I, S>(metadata_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            metadata_ids: metadata_ids
                .into_iter()
                .map(|id| canonical_text(id.as_ref()))
                .collect(),
        }
    }

    /// Collect the `METADATAID` column of a source table frame.
    pub fn from_frame(frame: &DataFrame) -> Result<Self> {
        let lookup = CaseInsensitiveSet::new(
            frame
                .get_column_names()
                .iter()
                .map(|name| name.as_str()),
        );
        let name = lookup
            .get("METADATAID")
            .ok_or_else(|| ModelError::MissingSourceColumn {
                column: "METADATAID".to_string(),
            })?;
        let column = frame.column(name)?;
        let ids = (0..frame.height())
            .filter_map(|idx| any_to_text(column.get(idx).unwrap_or(AnyValue::Null)))
            .collect::<Vec<_>>();
        Ok(Self::new(ids))
    }

    /// Standard source-table columns absent from `frame`, in header order.
    ///
    /// Names match case-insensitively. Only `METADATAID` is required for
    /// loading; the rest are reported so an incomplete table can be noticed.
    pub fn missing_columns(frame: &DataFrame) -> Vec<&'static str> {
        let lookup = CaseInsensitiveSet::new(
            frame
                .get_column_names()
                .iter()
                .map(|name| name.as_str()),
        );
        SOURCE_TABLE_FIELDS
            .iter()
            .copied()
            .filter(|column| !lookup.contains(column))
            .collect()
    }

    /// Returns true when `id` is a known metadata identifier.
    pub fn contains(&self, id: &str) -> bool {
        self.metadata_ids.contains(&canonical_text(id))
    }

    pub fn len(&self) -> usize {
        self.metadata_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metadata_ids.is_empty()
    }
}
