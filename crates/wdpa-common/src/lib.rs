//! Shared utilities for the WDPA quality assurance crates.
//!
//! This crate provides the polars `AnyValue` conversions every other crate
//! relies on when it reads cells out of a `DataFrame`.

pub mod polars;

pub use crate::polars::{
    any_to_f64, any_to_string, any_to_text, canonical_text, format_numeric, is_null_value,
    parse_f64,
};
