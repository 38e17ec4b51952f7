use thiserror::Error;

use crate::field::Field;
use crate::schema::SchemaVariant;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("dataset is missing column {field} required by the {variant} schema")]
    MissingColumn {
        field: Field,
        variant: SchemaVariant,
    },
    #[error("field {field} is not part of the {variant} schema")]
    FieldNotInSchema {
        field: Field,
        variant: SchemaVariant,
    },
    #[error("source table has no {column} column")]
    MissingSourceColumn { column: String },
    #[error("polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),
}

pub type Result<T> = std::result::Result<T, ModelError>;
