//! WDPA quality assurance rules.
//!
//! The catalog is data: every entry pairs a stable name with a
//! [`RuleKind`] descriptor, and a handful of generic evaluators in
//! [`checks`] interpret those descriptors.
//!
//! ```ignore
//! use wdpa_validate::{Catalog, ValidationConfig, Validator};
//!
//! let catalog = Catalog::resolve(dataset.variant(), &ValidationConfig::default())?;
//! let report = Validator::new(&catalog)
//!     .with_reference_codes(&codes)
//!     .validate(&dataset);
//! ```

pub mod catalog;
pub mod checks;
pub mod config;
mod error;
pub mod report;
pub mod rules;
pub mod stats;
mod validator;

pub use catalog::{Catalog, CatalogEntry, area_entries, core_entries, cross_reference_entries};
pub use config::{MarineBands, PlausibilityParams, ValidationConfig};
pub use error::{CatalogError, EvaluationError};
pub use report::{RuleResult, ValidationReport};
pub use rules::{Condition, ConditionMode, Denominator, RuleCategory, RuleKind, ValueSet};
pub use validator::Validator;
