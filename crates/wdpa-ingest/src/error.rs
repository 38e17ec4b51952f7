//! Error types for loading WDPA inputs.

use std::path::PathBuf;
use thiserror::Error;

use wdpa_model::ModelError;

/// Errors that can occur while loading a dataset or its reference data.
#[derive(Debug, Error)]
pub enum IngestError {
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Reference code list could not be read.
    #[error("failed to read reference codes {path}: {source}")]
    ReferenceRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// CSV file has a header but no rows.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// Required column not found.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// The frame does not fit the WDPA schema.
    #[error("{path} does not match the WDPA schema: {source}")]
    Schema {
        path: PathBuf,
        #[source]
        source: ModelError,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
