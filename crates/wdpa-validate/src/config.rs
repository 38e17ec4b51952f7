//! Tunable parameters of the rule catalog.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// Parameters of the statistical area plausibility rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlausibilityParams {
    /// Absolute difference in km² below which a mismatch is ignored.
    pub tolerance_km2: f64,
    /// Ratios above this are left out of the statistics.
    pub outlier_max: f64,
    /// Ratios below this are left out of the statistics.
    pub outlier_min: f64,
    /// Number of standard deviations above the mean that is still accepted.
    pub sigma: f64,
}

impl Default for PlausibilityParams {
    fn default() -> Self {
        Self {
            tolerance_km2: 50.0,
            outlier_max: 100.0,
            outlier_min: 0.0,
            sigma: 2.0,
        }
    }
}

/// Bounds of the three marine bands derived from `GIS_M_AREA / GIS_AREA`.
///
/// `ratio <= terrestrial_max` is band 0, `ratio >= marine_min` is band 2,
/// anything strictly between is band 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarineBands {
    pub terrestrial_max: f64,
    pub marine_min: f64,
}

impl Default for MarineBands {
    fn default() -> Self {
        Self {
            terrestrial_max: 0.1,
            marine_min: 0.9,
        }
    }
}

/// Configuration consumed when the catalog is built.
///
/// Every field has a default, so a partial JSON document is enough to
/// override one value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Latest acceptable `STATUS_YR`.
    pub current_year: i32,
    pub plausibility: PlausibilityParams,
    /// Relative tolerance of the area containment checks.
    pub area_ratio_tolerance: f64,
    pub marine_band_bounds: MarineBands,
    /// Areas at or below this size in km² are reported as too small.
    pub tiny_area_km2: f64,
    pub forbidden_characters: Vec<char>,
    /// Adds the rules that need the source table.
    pub include_cross_reference: bool,
}

/// Characters that may not appear in free-text fields.
pub const DEFAULT_FORBIDDEN_CHARACTERS: [char; 6] = ['<', '>', '?', '*', '\r', '\n'];

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            current_year: chrono::Local::now().year(),
            plausibility: PlausibilityParams::default(),
            area_ratio_tolerance: 0.0001,
            marine_band_bounds: MarineBands::default(),
            tiny_area_km2: 0.0001,
            forbidden_characters: DEFAULT_FORBIDDEN_CHARACTERS.to_vec(),
            include_cross_reference: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config: ValidationConfig =
            serde_json::from_str(r#"{"current_year": 2020, "plausibility": {"sigma": 3.0}}"#)
                .expect("config");
        assert_eq!(config.current_year, 2020);
        assert_eq!(config.plausibility.sigma, 3.0);
        assert_eq!(config.plausibility.tolerance_km2, 50.0);
        assert_eq!(config.marine_band_bounds, MarineBands::default());
        assert_eq!(config.forbidden_characters.len(), 6);
        assert!(!config.include_cross_reference);
    }

    #[test]
    fn default_year_is_current() {
        assert!(ValidationConfig::default().current_year >= 2024);
    }
}
