use thiserror::Error;

use wdpa_model::{Field, FieldKind, ModelError, SchemaVariant};

/// A catalog that cannot be evaluated. Raised while the catalog is built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("rule name is empty")]
    EmptyName,
    #[error("rule {name} is defined more than once")]
    DuplicateName { name: String },
    #[error("rule {rule}: value set for {field} is empty")]
    EmptyValueSet { rule: String, field: Field },
    #[error("rule {rule}: {field} is a {kind:?} field, expected {expected}")]
    KindMismatch {
        rule: String,
        field: Field,
        kind: FieldKind,
        expected: &'static str,
    },
    #[error("rule {rule}: field {field} is not part of the {variant} schema")]
    FieldNotInVariant {
        rule: String,
        field: Field,
        variant: SchemaVariant,
    },
    #[error("rule {rule}: {message}")]
    InvalidParameter { rule: String, message: String },
}

/// Why one rule could not be evaluated against a dataset.
#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error("no reference country codes were supplied")]
    MissingReferenceCodes,
    #[error("no source table was supplied")]
    MissingSourceTable,
}
