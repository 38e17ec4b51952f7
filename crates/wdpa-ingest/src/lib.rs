//! Loading WDPA inputs.
//!
//! - **Dataset**: a polygon or point table read with polars, every column as text
//! - **Reference codes**: the `alpha-3` column of a country code list
//! - **Source table**: the `METADATAID`s of the per-source metadata table

mod error;
mod reference;
mod table;

pub use error::{IngestError, Result};
pub use reference::{ALPHA3_COLUMN, load_reference_codes};
pub use table::{load_dataset, load_source_table, read_csv_frame};
