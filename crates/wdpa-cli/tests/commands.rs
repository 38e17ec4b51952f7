use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;

use wdpa_cli::commands::{load_config, render_json, rules_table, run_check};
use wdpa_cli::summary::summary_table;
use wdpa_cli::types::CheckRequest;
use wdpa_model::{Field, SchemaVariant};
use wdpa_validate::{Catalog, ValidationConfig};

fn create_temp_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    write!(file, "{content}").expect("write file");
    file
}

fn clean_value(field: Field, idx: usize) -> String {
    let value = match field {
        Field::WdpaId | Field::WdpaPid => return (idx + 1).to_string(),
        Field::PaDef | Field::MetadataId => "1",
        Field::Name | Field::OrigName => "Yellowstone",
        Field::Desig | Field::DesigEng => "National Park",
        Field::DesigType => "National",
        Field::IucnCat => "II",
        Field::IntCrit | Field::NoTake => "Not Applicable",
        Field::Marine | Field::RepMArea | Field::GisMArea | Field::NoTkArea => "0",
        Field::RepArea | Field::GisArea => "100",
        Field::Status => "Designated",
        Field::StatusYr => "1872",
        Field::GovType => "Federal or national ministry or agency",
        Field::OwnType => "State",
        Field::MangAuth => "National Park Service",
        Field::MangPlan => "Not Reported",
        Field::Verif => "State Verified",
        Field::SubLoc => "US-WY",
        Field::ParentIso3 | Field::Iso3 => "USA",
    };
    value.to_string()
}

/// Point table CSV of `rows` clean records with per-row overrides.
fn point_csv(rows: usize, overrides: &[(usize, Field, &str)]) -> NamedTempFile {
    let fields = SchemaVariant::Point.fields();
    let mut out = fields
        .iter()
        .map(|field| field.as_str())
        .collect::<Vec<_>>()
        .join(",");
    out.push('\n');
    for idx in 0..rows {
        let line = fields
            .iter()
            .map(|field| {
                overrides
                    .iter()
                    .find(|(row, name, _)| *row == idx && name == field)
                    .map_or_else(|| clean_value(*field, idx), |(_, _, value)| value.to_string())
            })
            .collect::<Vec<_>>()
            .join(",");
        out.push_str(&line);
        out.push('\n');
    }
    create_temp_file(&out)
}

fn request(dataset: &NamedTempFile, codes: Option<&NamedTempFile>) -> CheckRequest {
    CheckRequest {
        variant: SchemaVariant::Point,
        dataset: dataset.path().to_path_buf(),
        reference_codes: codes.map(|file| file.path().to_path_buf()),
        source_table: None,
        config: None,
    }
}

fn codes_file() -> NamedTempFile {
    create_temp_file("name,alpha-2,alpha-3\nUnited States,US,USA\nFrance,FR,FRA\n")
}

#[test]
fn reports_only_the_broken_rule() {
    let dataset = point_csv(3, &[(1, Field::Marine, "3")]);
    let codes = codes_file();
    let run = run_check(&request(&dataset, Some(&codes))).expect("run");
    assert_eq!(run.report.record_count, 3);
    let violated: Vec<&str> = run
        .report
        .violated()
        .map(|result| result.name.as_str())
        .collect();
    assert_eq!(violated, vec!["ivd_marine"]);
    assert!(!run.report.has_failures());
    assert_eq!(summary_table(&run.report).row_iter().count(), 1);
}

#[test]
fn missing_codes_fail_only_the_country_rules() {
    let dataset = point_csv(2, &[]);
    let run = run_check(&request(&dataset, None)).expect("run");
    let failed: Vec<&str> = run
        .report
        .failed()
        .map(|result| result.name.as_str())
        .collect();
    assert_eq!(failed, vec!["check_parent_iso3", "check_iso3"]);
    assert!(!run.report.has_violations());
    assert!(!run.report.is_clean());
}

#[test]
fn config_file_overrides_defaults() {
    let dataset = point_csv(2, &[]);
    let codes = codes_file();
    let config = create_temp_file(r#"{ "tiny_area_km2": 500.0 }"#);
    let request = CheckRequest {
        config: Some(config.path().to_path_buf()),
        ..request(&dataset, Some(&codes))
    };
    let run = run_check(&request).expect("run");
    let offenders = run
        .report
        .outcome("tiny_rep_area")
        .and_then(|outcome| outcome.offenders())
        .expect("evaluated");
    assert_eq!(offenders.len(), 2);
}

#[test]
fn partial_config_keeps_other_defaults() {
    let config = create_temp_file(r#"{ "plausibility": { "sigma": 3.0 } }"#);
    let loaded = load_config(Some(config.path())).expect("config");
    let defaults = ValidationConfig::default();
    assert_eq!(loaded.plausibility.sigma, 3.0);
    assert_eq!(
        loaded.plausibility.tolerance_km2,
        defaults.plausibility.tolerance_km2
    );
    assert_eq!(loaded.forbidden_characters, defaults.forbidden_characters);
}

#[test]
fn malformed_config_is_an_error() {
    let config = create_temp_file("{ not json");
    assert!(load_config(Some(config.path())).is_err());
}

#[test]
fn source_table_enables_cross_reference() {
    let dataset = point_csv(2, &[(1, Field::MetadataId, "7")]);
    let codes = codes_file();
    let source = create_temp_file("METADATAID,DATA_TITLE\n1,National parks\n");
    let request = CheckRequest {
        source_table: Some(source.path().to_path_buf()),
        ..request(&dataset, Some(&codes))
    };
    let run = run_check(&request).expect("run");
    let outcome = run
        .report
        .outcome("ivd_metadataid_not_in_source_table")
        .expect("cross reference rule");
    assert_eq!(outcome.offenders().map(|ids| ids.len()), Some(1));
    assert!(outcome.offenders().is_some_and(|ids| ids.contains("2")));
}

#[test]
fn missing_dataset_is_an_error() {
    let request = CheckRequest {
        variant: SchemaVariant::Point,
        dataset: PathBuf::from("/nonexistent/wdpa.csv"),
        reference_codes: None,
        source_table: None,
        config: None,
    };
    let error = run_check(&request).unwrap_err();
    assert!(format!("{error:#}").contains("/nonexistent/wdpa.csv"));
}

#[test]
fn json_maps_rule_names_to_outcomes() {
    let dataset = point_csv(2, &[(0, Field::Marine, "9")]);
    let codes = codes_file();
    let run = run_check(&request(&dataset, Some(&codes))).expect("run");
    let json: serde_json::Value =
        serde_json::from_str(&render_json(&run.report).expect("render")).expect("parse");
    assert_eq!(json.as_object().map(serde_json::Map::len), Some(65));
    assert_eq!(
        json["ivd_marine"],
        serde_json::json!({ "status": "evaluated", "offenders": ["1"] })
    );
}

#[test]
fn rules_table_lists_every_entry() {
    let catalog =
        Catalog::resolve(SchemaVariant::Polygon, &ValidationConfig::default()).expect("catalog");
    assert_eq!(rules_table(&catalog).row_iter().count(), 74);
}

#[test]
fn rules_table_shows_rule_kind() {
    let catalog =
        Catalog::resolve(SchemaVariant::Polygon, &ValidationConfig::default()).expect("catalog");
    let table = rules_table(&catalog);
    let kinds: Vec<String> = table
        .row_iter()
        .filter_map(|row| row.cell_iter().nth(2).map(comfy_table::Cell::content))
        .collect();
    assert_eq!(kinds.len(), 74);
    assert!(kinds.iter().any(|kind| kind == "duplicate key"));
    assert!(kinds.iter().any(|kind| kind == "area plausibility"));
    assert!(kinds.iter().any(|kind| kind == "marine classification"));
}
