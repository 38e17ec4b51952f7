use std::path::PathBuf;

use wdpa_model::{Dataset, SchemaVariant};
use wdpa_validate::ValidationReport;

/// Inputs of one `poly` or `point` run.
#[derive(Debug, Clone)]
pub struct CheckRequest {
    pub variant: SchemaVariant,
    pub dataset: PathBuf,
    /// Country code list with an `alpha-3` column.
    pub reference_codes: Option<PathBuf>,
    /// Source table; enables the cross-reference rules.
    pub source_table: Option<PathBuf>,
    /// JSON document overriding [`wdpa_validate::ValidationConfig`] defaults.
    pub config: Option<PathBuf>,
}

#[derive(Debug)]
pub struct CheckRun {
    pub dataset_path: PathBuf,
    pub dataset: Dataset,
    pub report: ValidationReport,
}
