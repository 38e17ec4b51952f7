//! Data model for WDPA quality assurance.
//!
//! Fields and schema variants, the read-only [`Dataset`] the rules run
//! against, the reference data some rules need, and [`RuleOutcome`].

pub mod dataset;
pub mod error;
pub mod field;
pub mod lookup;
pub mod outcome;
pub mod reference;
pub mod schema;
pub mod source;

pub use dataset::{Dataset, ROW_ID_PREFIX};
pub use error::{ModelError, Result};
pub use field::{Field, FieldKind};
pub use lookup::CaseInsensitiveSet;
pub use outcome::RuleOutcome;
pub use reference::{ABNJ, ReferenceCodes};
pub use schema::{SOURCE_TABLE_FIELDS, SchemaVariant};
pub use source::SourceTable;
