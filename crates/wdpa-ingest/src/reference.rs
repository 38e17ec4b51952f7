//! Reference country codes from a local CSV file.

use std::path::Path;

use tracing::info;

use wdpa_model::ReferenceCodes;

use crate::error::{IngestError, Result};

/// Column holding the ISO 3166-1 alpha-3 codes.
pub const ALPHA3_COLUMN: &str = "alpha-3";

/// Reads the `alpha-3` column of a country code list.
///
/// The header is matched ignoring case; blank cells are skipped.
pub fn load_reference_codes(path: &Path) -> Result<ReferenceCodes> {
    let map_err = |source: csv::Error| {
        if let csv::ErrorKind::Io(io) = source.kind()
            && io.kind() == std::io::ErrorKind::NotFound
        {
            return IngestError::FileNotFound {
                path: path.to_path_buf(),
            };
        }
        IngestError::ReferenceRead {
            path: path.to_path_buf(),
            source,
        }
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(map_err)?;
    let headers = reader.headers().map_err(map_err)?.clone();
    let index = headers
        .iter()
        .position(|name| name.trim().eq_ignore_ascii_case(ALPHA3_COLUMN))
        .ok_or_else(|| IngestError::MissingColumn {
            column: ALPHA3_COLUMN.to_string(),
            path: path.to_path_buf(),
        })?;

    let mut codes = Vec::new();
    for record in reader.records() {
        let record = record.map_err(map_err)?;
        if let Some(code) = record.get(index).map(str::trim)
            && !code.is_empty()
        {
            codes.push(code.to_string());
        }
    }
    if codes.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let codes = ReferenceCodes::new(codes);
    info!(path = %path.display(), codes = codes.len(), "loaded reference codes");
    Ok(codes)
}
