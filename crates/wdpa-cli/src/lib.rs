//! CLI library components for the WDPA quality assurance tool.

pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
