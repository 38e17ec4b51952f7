//! WDPA and source table loading through polars.

use std::path::Path;
use std::time::Instant;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};
use tracing::{debug, info, warn};

use wdpa_model::{Dataset, SchemaVariant, SourceTable};

use crate::error::{IngestError, Result};

fn not_found_or_read(path: &Path, error: std::io::Error) -> IngestError {
    if error.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: error,
        }
    }
}

/// Reads a CSV file into a frame where every column is a string.
///
/// Types are not inferred so that codes such as `001` and text such as
/// `Not Reported` reach the rules exactly as written.
pub fn read_csv_frame(path: &Path) -> Result<DataFrame> {
    std::fs::metadata(path).map_err(|error| not_found_or_read(path, error))?;

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    if df.height() == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    Ok(df)
}

/// Loads a WDPA table and binds it to `variant`.
pub fn load_dataset(path: &Path, variant: SchemaVariant) -> Result<Dataset> {
    let started = Instant::now();
    let df = read_csv_frame(path)?;
    let extra = df.width().saturating_sub(variant.fields().len());
    if extra > 0 {
        debug!(
            path = %path.display(),
            extra_columns = extra,
            "ignoring columns outside the schema"
        );
    }
    let dataset = Dataset::new(variant, df).map_err(|source| IngestError::Schema {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        path = %path.display(),
        variant = %variant,
        records = dataset.height(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "loaded dataset"
    );
    Ok(dataset)
}

/// Loads the per-source metadata table.
pub fn load_source_table(path: &Path) -> Result<SourceTable> {
    let df = read_csv_frame(path)?;
    let table = SourceTable::from_frame(&df).map_err(|source| IngestError::Schema {
        path: path.to_path_buf(),
        source,
    })?;
    let missing = SourceTable::missing_columns(&df);
    if !missing.is_empty() {
        warn!(
            path = %path.display(),
            missing = %missing.join(", "),
            "source table lacks standard columns"
        );
    }
    if table.len() < df.height() {
        warn!(
            path = %path.display(),
            rows = df.height(),
            metadata_ids = table.len(),
            "source table has blank or repeated METADATAID values"
        );
    }
    info!(path = %path.display(), metadata_ids = table.len(), "loaded source table");
    Ok(table)
}
