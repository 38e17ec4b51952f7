mod common;

use std::collections::BTreeSet;

use approx::assert_relative_eq;
use common::{codes, dataset};
use wdpa_model::{Field, RuleOutcome, SchemaVariant};
use wdpa_validate::checks::plausibility::{Ratio, area_ratio, ratio_statistics};
use wdpa_validate::{Catalog, Denominator, PlausibilityParams, ValidationConfig, Validator};

fn area_rows(pairs: &[(f64, f64)]) -> Vec<Vec<(Field, String)>> {
    pairs
        .iter()
        .map(|(reported, gis)| {
            vec![
                (Field::RepArea, reported.to_string()),
                (Field::GisArea, gis.to_string()),
            ]
        })
        .collect()
}

fn outcome(report: &wdpa_validate::ValidationReport, name: &str) -> BTreeSet<String> {
    report
        .outcome(name)
        .and_then(RuleOutcome::offenders)
        .cloned()
        .expect("evaluated rule")
}

#[test]
fn equal_areas_are_never_flagged() {
    let pairs: Vec<(f64, f64)> = (1..=50).map(|idx| (idx as f64 * 37.0, idx as f64 * 37.0)).collect();
    let data = dataset(SchemaVariant::Polygon, &area_rows(&pairs));
    let catalog = Catalog::resolve(SchemaVariant::Polygon, &ValidationConfig::default())
        .expect("catalog");
    let codes = codes();
    let report = Validator::new(&catalog)
        .with_reference_codes(&codes)
        .validate(&data);
    assert!(outcome(&report, "gis_area_gt_rep_area").is_empty());
    assert!(outcome(&report, "rep_area_gt_gis_area").is_empty());
}

#[test]
fn single_gross_mismatch_is_the_only_offender() {
    let mut pairs: Vec<(f64, f64)> = (0..100)
        .map(|idx| {
            let reported = 100.0 + idx as f64;
            (reported, reported + (idx % 5) as f64 * 0.1)
        })
        .collect();
    pairs.push((1000.0, 1.0));
    let data = dataset(SchemaVariant::Polygon, &area_rows(&pairs));
    let catalog = Catalog::resolve(SchemaVariant::Polygon, &ValidationConfig::default())
        .expect("catalog");
    let codes = codes();
    let report = Validator::new(&catalog)
        .with_reference_codes(&codes)
        .validate(&data);

    assert_eq!(
        outcome(&report, "rep_area_gt_gis_area"),
        BTreeSet::from(["101".to_string()])
    );
    assert!(outcome(&report, "gis_area_gt_rep_area").is_empty());
}

#[test]
fn small_absolute_differences_are_tolerated() {
    // Ratio far above the distribution but only 9 km² apart.
    let mut pairs: Vec<(f64, f64)> = (0..20).map(|idx| (500.0 + idx as f64, 500.0 + idx as f64)).collect();
    pairs.push((10.0, 1.0));
    let data = dataset(SchemaVariant::Polygon, &area_rows(&pairs));
    let catalog = Catalog::resolve(SchemaVariant::Polygon, &ValidationConfig::default())
        .expect("catalog");
    let codes = codes();
    let report = Validator::new(&catalog)
        .with_reference_codes(&codes)
        .validate(&data);
    assert!(outcome(&report, "rep_area_gt_gis_area").is_empty());
}

#[test]
fn tolerance_is_configurable() {
    let mut pairs: Vec<(f64, f64)> = (0..20).map(|idx| (500.0 + idx as f64, 500.0 + idx as f64)).collect();
    pairs.push((10.0, 1.0));
    let data = dataset(SchemaVariant::Polygon, &area_rows(&pairs));
    let config = ValidationConfig {
        plausibility: PlausibilityParams {
            tolerance_km2: 5.0,
            ..PlausibilityParams::default()
        },
        ..ValidationConfig::default()
    };
    let catalog = Catalog::resolve(SchemaVariant::Polygon, &config).expect("catalog");
    let codes = codes();
    let report = Validator::new(&catalog)
        .with_reference_codes(&codes)
        .validate(&data);
    assert_eq!(
        outcome(&report, "rep_area_gt_gis_area"),
        BTreeSet::from(["21".to_string()])
    );
}

#[test]
fn statistics_exclude_outliers() {
    let ratios = [
        area_ratio(Some(10.0), Some(10.0), Denominator::Gis),
        area_ratio(Some(10.0), Some(30.0), Denominator::Gis),
        area_ratio(Some(10.0), Some(20.0), Denominator::Gis),
        area_ratio(Some(1000.0), Some(1.0), Denominator::Gis),
        area_ratio(Some(-50.0), Some(10.0), Denominator::Gis),
        area_ratio(None, Some(10.0), Denominator::Gis),
    ];
    assert_eq!(ratios[3], Ratio::Defined(1001.0));
    assert_eq!(ratios[5], Ratio::Undefined);

    let stats = ratio_statistics(&ratios, &PlausibilityParams::default()).expect("stats");
    assert_eq!(stats.sample_size, 3);
    let expected_mean = (2.0 + 40.0 / 30.0 + 1.5) / 3.0;
    assert_relative_eq!(stats.mean, expected_mean, epsilon = 1e-12);
    let variance = [2.0, 40.0 / 30.0, 1.5]
        .iter()
        .map(|ratio: &f64| (ratio - expected_mean).powi(2))
        .sum::<f64>()
        / 2.0;
    assert_relative_eq!(stats.std_dev, variance.sqrt(), epsilon = 1e-12);
    assert_relative_eq!(stats.max_ratio, expected_mean + 2.0 * variance.sqrt(), epsilon = 1e-12);
}
