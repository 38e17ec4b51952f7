use wdpa_model::{Field, SchemaVariant};
use wdpa_validate::{
    Catalog, CatalogEntry, CatalogError, Condition, MarineBands, RuleCategory, RuleKind,
    ValidationConfig, ValueSet, area_entries, core_entries,
};

#[test]
fn area_rule_names() {
    let names: Vec<String> = area_entries(&ValidationConfig::default())
        .into_iter()
        .map(|entry| entry.name)
        .collect();
    insta::assert_snapshot!(names.join("\n"), @r"
    gis_area_gt_rep_area
    rep_area_gt_gis_area
    gis_m_area_gt_rep_m_area
    rep_m_area_gt_gis_m_area
    tiny_gis_area
    no_tk_area_gt_gis_m_area
    ivd_gis_m_area_gt_gis_area
    zero_gis_m_area_marine12
    ivd_marine_designation
    ");
}

#[test]
fn core_rules_per_category() {
    let entries = core_entries(&ValidationConfig::default());
    let count = |category: RuleCategory| {
        entries
            .iter()
            .filter(|entry| entry.category == category)
            .count()
    };
    assert_eq!(entries.len(), 65);
    assert_eq!(count(RuleCategory::Duplicate), 1);
    assert_eq!(count(RuleCategory::Inconsistent), 18);
    assert_eq!(count(RuleCategory::ForbiddenCharacter), 7);
    assert_eq!(count(RuleCategory::MissingValue), 8);
    assert_eq!(count(RuleCategory::AreaInvalid), 4);
    assert_eq!(count(RuleCategory::Invalid), 27);
}

#[test]
fn marine_entry_serializes_as_data() {
    let catalog =
        Catalog::resolve(SchemaVariant::Point, &ValidationConfig::default()).expect("catalog");
    let entry = catalog.get("ivd_marine").expect("ivd_marine");
    insta::assert_json_snapshot!(entry, @r#"
    {
      "name": "ivd_marine",
      "category": "invalid",
      "description": "MARINE is not 0, 1 or 2",
      "provisional": false,
      "kind": {
        "kind": "membership",
        "field": "MARINE",
        "allowed": {
          "type": "text",
          "values": [
            "0",
            "1",
            "2"
          ]
        },
        "condition": null
      }
    }
    "#);
}

#[test]
fn cross_reference_is_opt_in() {
    let config = ValidationConfig {
        include_cross_reference: true,
        ..ValidationConfig::default()
    };
    let catalog = Catalog::resolve(SchemaVariant::Point, &config).expect("catalog");
    assert_eq!(catalog.len(), 66);
    assert_eq!(
        catalog.names().last(),
        Some("ivd_metadataid_not_in_source_table")
    );
}

#[test]
fn duplicate_names_are_rejected() {
    let entry = CatalogEntry::new(
        "ivd_pa_def",
        RuleCategory::Invalid,
        "PA_DEF is not 1",
        RuleKind::Membership {
            field: Field::PaDef,
            allowed: ValueSet::text(["1"]),
            condition: None,
        },
    );
    let error = Catalog::from_entries(SchemaVariant::Point, vec![entry.clone(), entry]).unwrap_err();
    assert_eq!(
        error,
        CatalogError::DuplicateName {
            name: "ivd_pa_def".to_string()
        }
    );
}

#[test]
fn empty_allowed_set_is_rejected() {
    let entry = CatalogEntry::new(
        "ivd_verif",
        RuleCategory::Invalid,
        "VERIF",
        RuleKind::Membership {
            field: Field::Verif,
            allowed: ValueSet::text(Vec::<String>::new()),
            condition: None,
        },
    );
    assert!(matches!(
        Catalog::from_entries(SchemaVariant::Point, vec![entry]),
        Err(CatalogError::EmptyValueSet {
            field: Field::Verif,
            ..
        })
    ));
}

#[test]
fn text_set_on_numeric_field_is_rejected() {
    let entry = CatalogEntry::new(
        "ivd_no_tk_area_no_take",
        RuleCategory::Invalid,
        "NO_TK_AREA",
        RuleKind::Membership {
            field: Field::NoTkArea,
            allowed: ValueSet::text(["0"]),
            condition: Some(Condition::is(
                Field::NoTake,
                ValueSet::text(["Not Applicable"]),
            )),
        },
    );
    assert!(matches!(
        Catalog::from_entries(SchemaVariant::Point, vec![entry]),
        Err(CatalogError::KindMismatch {
            field: Field::NoTkArea,
            ..
        })
    ));
}

#[test]
fn inverted_marine_bands_are_rejected() {
    let config = ValidationConfig {
        marine_band_bounds: MarineBands {
            terrestrial_max: 0.9,
            marine_min: 0.1,
        },
        ..ValidationConfig::default()
    };
    assert!(matches!(
        Catalog::resolve(SchemaVariant::Polygon, &config),
        Err(CatalogError::InvalidParameter { ref rule, .. }) if rule == "ivd_marine_designation"
    ));
    // Points never resolve the marine designation rule.
    assert!(Catalog::resolve(SchemaVariant::Point, &config).is_ok());
}

#[test]
fn empty_forbidden_characters_are_rejected() {
    let config = ValidationConfig {
        forbidden_characters: Vec::new(),
        ..ValidationConfig::default()
    };
    assert!(matches!(
        Catalog::resolve(SchemaVariant::Point, &config),
        Err(CatalogError::InvalidParameter { .. })
    ));
}
