//! Statistical plausibility of reported against GIS-derived areas.
//!
//! For every record the ratio `(A + B) / D` is computed, where `D` is one of
//! the two areas. Ratios inside `[outlier_min, outlier_max]` form the
//! reference distribution, and the acceptance threshold is its mean plus
//! `sigma` sample standard deviations. A record is flagged when its ratio
//! is above the threshold (or unbounded because `D` is zero) and the two
//! areas differ by more than `tolerance_km2`.

use std::collections::BTreeSet;

use super::offending_ids;
use crate::config::PlausibilityParams;
use crate::rules::Denominator;
use crate::stats::RatioStatistics;

/// Ratio of one record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ratio {
    Defined(f64),
    /// Positive numerator over a zero denominator.
    Unbounded,
    /// A null operand, or a non-positive numerator over zero.
    Undefined,
}

/// `(reported + gis) / denominator`.
pub fn area_ratio(reported: Option<f64>, gis: Option<f64>, denominator: Denominator) -> Ratio {
    let (Some(reported), Some(gis)) = (reported, gis) else {
        return Ratio::Undefined;
    };
    let numerator = reported + gis;
    let divisor = match denominator {
        Denominator::Reported => reported,
        Denominator::Gis => gis,
    };
    if divisor == 0.0 {
        return if numerator > 0.0 {
            Ratio::Unbounded
        } else {
            Ratio::Undefined
        };
    }
    Ratio::Defined(numerator / divisor)
}

/// Threshold statistics for a ratio population.
pub fn ratio_statistics(ratios: &[Ratio], params: &PlausibilityParams) -> Option<RatioStatistics> {
    let defined: Vec<f64> = ratios
        .iter()
        .filter_map(|ratio| match ratio {
            Ratio::Defined(value) => Some(*value),
            Ratio::Unbounded | Ratio::Undefined => None,
        })
        .collect();
    RatioStatistics::from_ratios(
        &defined,
        params.outlier_min,
        params.outlier_max,
        params.sigma,
    )
}

/// Records whose area pair is implausible.
pub fn implausible_areas(
    ids: &[String],
    reported: &[Option<f64>],
    gis: &[Option<f64>],
    denominator: Denominator,
    params: &PlausibilityParams,
) -> BTreeSet<String> {
    let ratios: Vec<Ratio> = reported
        .iter()
        .zip(gis)
        .map(|(reported, gis)| area_ratio(*reported, *gis, denominator))
        .collect();
    let Some(stats) = ratio_statistics(&ratios, params) else {
        tracing::debug!(
            records = ratios.len(),
            "too few usable ratios, area plausibility skipped"
        );
        return BTreeSet::new();
    };
    tracing::trace!(
        sample_size = stats.sample_size,
        mean = stats.mean,
        std_dev = stats.std_dev,
        max_ratio = stats.max_ratio,
        "area ratio distribution"
    );

    offending_ids(ids, |idx| {
        let above = match ratios[idx] {
            Ratio::Defined(value) => value > stats.max_ratio,
            Ratio::Unbounded => true,
            Ratio::Undefined => false,
        };
        above
            && match (reported[idx], gis[idx]) {
                (Some(reported), Some(gis)) => (reported - gis).abs() > params.tolerance_km2,
                _ => false,
            }
    })
}
