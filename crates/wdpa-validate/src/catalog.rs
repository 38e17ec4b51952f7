//! The WDPA rule catalog.
//!
//! Entries are plain data: a stable name, a report category and a
//! [`RuleKind`] descriptor. The core list applies to every variant; the
//! area list reads the GIS-derived areas and is only resolved for polygons.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::Serialize;
use wdpa_model::{Field, FieldKind, SchemaVariant};

use crate::config::ValidationConfig;
use crate::error::CatalogError;
use crate::rules::{Condition, Denominator, RuleCategory, RuleKind, ValueSet};

const RAMSAR: &str = "Ramsar Site, Wetland of International Importance";
const UNESCO_MAB: &str = "UNESCO-MAB Biosphere Reserve";
const WORLD_HERITAGE: &str = "World Heritage Site (natural or mixed)";
const BARCELONA: &str =
    "Specially Protected Areas of Mediterranean Importance (Barcelona Convention)";

const INTERNATIONAL_DESIGNATIONS: [&str; 3] = [RAMSAR, UNESCO_MAB, WORLD_HERITAGE];

const REGIONAL_DESIGNATIONS: [&str; 7] = [
    "Baltic Sea Protected Area (HELCOM)",
    "Specially Protected Area (Cartagena Convention)",
    "Marine Protected Area (CCAMLR)",
    "Marine Protected Area (OSPAR)",
    "Site of Community Importance (Habitats Directive)",
    "Special Protection Area (Birds Directive)",
    BARCELONA,
];

const INT_CRIT_CRITERIA: [&str; 10] = [
    "(i)", "(ii)", "(iii)", "(iv)", "(v)", "(vi)", "(vii)", "(viii)", "(ix)", "(x)",
];

const IUCN_CATEGORIES: [&str; 7] = ["Ia", "Ib", "II", "III", "IV", "V", "VI"];

const GOV_TYPES: [&str; 12] = [
    "Federal or national ministry or agency",
    "Sub-national ministry or agency",
    "Government-delegated management",
    "Transboundary governance",
    "Collaborative governance",
    "Joint governance",
    "Individual landowners",
    "Non-profit organisations",
    "For-profit organisations",
    "Indigenous peoples",
    "Local communities",
    "Not Reported",
];

const OWN_TYPES: [&str; 9] = [
    "State",
    "Communal",
    "Individual landowners",
    "For-profit organisations",
    "Non-profit organisations",
    "Joint ownership",
    "Multiple ownership",
    "Contested",
    "Not Reported",
];

/// Earliest acceptable non-zero `STATUS_YR`.
pub const FIRST_STATUS_YEAR: i32 = 1750;

/// Fields whose values must agree across the records of one `WDPAID`.
const CONSISTENT_FIELDS: [(&str, Field); 18] = [
    ("dif_name_same_id", Field::Name),
    ("dif_orig_name_same_id", Field::OrigName),
    ("ivd_dif_desig_same_id", Field::Desig),
    ("ivd_dif_desig_eng_same_id", Field::DesigEng),
    ("dif_desig_type_same_id", Field::DesigType),
    ("dif_int_crit_same_id", Field::IntCrit),
    ("dif_no_take_same_id", Field::NoTake),
    ("dif_status_same_id", Field::Status),
    ("dif_status_yr_same_id", Field::StatusYr),
    ("dif_gov_type_same_id", Field::GovType),
    ("dif_own_type_same_id", Field::OwnType),
    ("dif_mang_auth_same_id", Field::MangAuth),
    ("dif_mang_plan_same_id", Field::MangPlan),
    ("ivd_dif_verif_same_id", Field::Verif),
    ("ivd_dif_metadataid_same_id", Field::MetadataId),
    ("ivd_dif_sub_loc_same_id", Field::SubLoc),
    ("ivd_dif_parent_iso3_same_id", Field::ParentIso3),
    ("ivd_dif_iso3_same_id", Field::Iso3),
];

const FREE_TEXT_FIELDS: [Field; 7] = [
    Field::Name,
    Field::OrigName,
    Field::Desig,
    Field::DesigEng,
    Field::MangAuth,
    Field::MangPlan,
    Field::SubLoc,
];

/// One named rule of the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogEntry {
    pub name: String,
    pub category: RuleCategory,
    pub description: String,
    /// The allowed values are not settled and may change.
    pub provisional: bool,
    pub kind: RuleKind,
}

impl CatalogEntry {
    pub fn new(
        name: impl Into<String>,
        category: RuleCategory,
        description: impl Into<String>,
        kind: RuleKind,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            description: description.into(),
            provisional: false,
            kind,
        }
    }

    fn provisional(mut self) -> Self {
        self.provisional = true;
        self
    }

    /// Checks the entry's parameters against the field kinds and the variant.
    pub fn validate(&self, variant: SchemaVariant) -> Result<(), CatalogError> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::EmptyName);
        }
        for field in self.kind.fields() {
            if !variant.contains(field) {
                return Err(CatalogError::FieldNotInVariant {
                    rule: self.name.clone(),
                    field,
                    variant,
                });
            }
        }
        if let Some(condition) = self.kind.condition() {
            self.check_value_set(condition.field, &condition.values)?;
        }
        match &self.kind {
            RuleKind::Membership { field, allowed, .. } => self.check_value_set(*field, allowed),
            RuleKind::Threshold {
                field,
                min_exclusive,
                ..
            } => {
                self.check_kind(*field, FieldKind::Area)?;
                self.check_finite("threshold", *min_exclusive)
            }
            RuleKind::FieldEquality { left, right, .. } => {
                self.check_kind(*left, FieldKind::Area)?;
                self.check_kind(*right, FieldKind::Area)
            }
            RuleKind::AreaRatio {
                smaller,
                larger,
                tolerance,
            } => {
                self.check_kind(*smaller, FieldKind::Area)?;
                self.check_kind(*larger, FieldKind::Area)?;
                self.check_finite("tolerance", *tolerance)?;
                if *tolerance < 0.0 {
                    return Err(self.invalid("tolerance must not be negative"));
                }
                Ok(())
            }
            RuleKind::AreaPlausibility {
                reported,
                gis,
                params,
                ..
            } => {
                self.check_kind(*reported, FieldKind::Area)?;
                self.check_kind(*gis, FieldKind::Area)?;
                self.check_finite("tolerance", params.tolerance_km2)?;
                self.check_finite("sigma", params.sigma)?;
                if params.sigma < 0.0 {
                    return Err(self.invalid("sigma must not be negative"));
                }
                if params.outlier_min.partial_cmp(&params.outlier_max) != Some(Ordering::Less) {
                    return Err(self.invalid("outlier_min must be below outlier_max"));
                }
                Ok(())
            }
            RuleKind::MarineClassification { bands } => {
                let ordered = 0.0 <= bands.terrestrial_max
                    && bands.terrestrial_max < bands.marine_min
                    && bands.marine_min <= 1.0;
                if !ordered {
                    return Err(self.invalid("marine bands must satisfy 0 <= low < high <= 1"));
                }
                Ok(())
            }
            RuleKind::ForbiddenCharacter { characters, .. } => {
                if characters.is_empty() {
                    return Err(self.invalid("no forbidden characters"));
                }
                Ok(())
            }
            RuleKind::CountryCodes { field } => self.check_kind(*field, FieldKind::CodeList),
            RuleKind::DuplicateKey { .. }
            | RuleKind::Consistency { .. }
            | RuleKind::NullPresence { .. }
            | RuleKind::SourceTableReference { .. } => Ok(()),
        }
    }

    fn check_value_set(&self, field: Field, set: &ValueSet) -> Result<(), CatalogError> {
        if set.is_empty() {
            return Err(CatalogError::EmptyValueSet {
                rule: self.name.clone(),
                field,
            });
        }
        if !set.fits(field.kind()) {
            return Err(CatalogError::KindMismatch {
                rule: self.name.clone(),
                field,
                kind: field.kind(),
                expected: set.expected_kind(),
            });
        }
        Ok(())
    }

    fn check_kind(&self, field: Field, expected: FieldKind) -> Result<(), CatalogError> {
        if field.kind() == expected {
            return Ok(());
        }
        Err(CatalogError::KindMismatch {
            rule: self.name.clone(),
            field,
            kind: field.kind(),
            expected: match expected {
                FieldKind::Area => "an area field",
                FieldKind::CodeList => "a code list field",
                _ => "another field kind",
            },
        })
    }

    fn check_finite(&self, what: &str, value: f64) -> Result<(), CatalogError> {
        if value.is_finite() {
            return Ok(());
        }
        Err(self.invalid(&format!("{what} must be a finite number")))
    }

    fn invalid(&self, message: &str) -> CatalogError {
        CatalogError::InvalidParameter {
            rule: self.name.clone(),
            message: message.to_string(),
        }
    }
}

/// The validated, ordered rule list for one schema variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    variant: SchemaVariant,
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Builds the catalog for `variant`: core rules, area rules for
    /// polygons, then the cross-reference rules when enabled.
    pub fn resolve(variant: SchemaVariant, config: &ValidationConfig) -> Result<Self, CatalogError> {
        let mut entries = core_entries(config);
        if variant.has_gis_areas() {
            entries.extend(area_entries(config));
        }
        if config.include_cross_reference {
            entries.extend(cross_reference_entries());
        }
        let catalog = Self::from_entries(variant, entries)?;
        tracing::debug!(
            variant = %variant,
            rules = catalog.len(),
            "resolved rule catalog"
        );
        Ok(catalog)
    }

    /// Validates `entries` eagerly and wraps them.
    pub fn from_entries(
        variant: SchemaVariant,
        entries: Vec<CatalogEntry>,
    ) -> Result<Self, CatalogError> {
        let mut names = BTreeSet::new();
        for entry in &entries {
            entry.validate(variant)?;
            if !names.insert(entry.name.as_str()) {
                return Err(CatalogError::DuplicateName {
                    name: entry.name.clone(),
                });
            }
        }
        Ok(Self { variant, entries })
    }

    pub fn variant(&self) -> SchemaVariant {
        self.variant
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn membership(field: Field, allowed: ValueSet) -> RuleKind {
    RuleKind::Membership {
        field,
        allowed,
        condition: None,
    }
}

fn membership_when(field: Field, allowed: ValueSet, condition: Condition) -> RuleKind {
    RuleKind::Membership {
        field,
        allowed,
        condition: Some(condition),
    }
}

fn marine_is(values: &[&str]) -> Condition {
    Condition::is(Field::Marine, ValueSet::text(values.iter().copied()))
}

fn invalid(name: &str, description: &str, kind: RuleKind) -> CatalogEntry {
    CatalogEntry::new(name, RuleCategory::Invalid, description, kind)
}

fn area_invalid(name: &str, description: &str, kind: RuleKind) -> CatalogEntry {
    CatalogEntry::new(name, RuleCategory::AreaInvalid, description, kind)
}

fn field_slug(field: Field) -> String {
    field.as_str().to_ascii_lowercase()
}

/// Rules that apply to both polygon and point tables, in report order.
pub fn core_entries(config: &ValidationConfig) -> Vec<CatalogEntry> {
    let mut entries = vec![
        CatalogEntry::new(
            "duplicate_wdpa_pid",
            RuleCategory::Duplicate,
            "WDPA_PID values used by more than one record, or missing",
            RuleKind::DuplicateKey {
                field: Field::WdpaPid,
            },
        ),
        area_invalid(
            "tiny_rep_area",
            "REP_AREA is at or below the minimum area",
            RuleKind::Threshold {
                field: Field::RepArea,
                min_exclusive: config.tiny_area_km2,
                condition: None,
            },
        ),
        area_invalid(
            "zero_rep_m_area_marine12",
            "REP_M_AREA is zero or negative for a marine or coastal site",
            RuleKind::Threshold {
                field: Field::RepMArea,
                min_exclusive: 0.0,
                condition: Some(marine_is(&["1", "2"])),
            },
        ),
        area_invalid(
            "ivd_rep_m_area_gt_rep_area",
            "REP_M_AREA is larger than REP_AREA",
            RuleKind::AreaRatio {
                smaller: Field::RepMArea,
                larger: Field::RepArea,
                tolerance: config.area_ratio_tolerance,
            },
        ),
        area_invalid(
            "ivd_no_tk_area_gt_rep_m_area",
            "NO_TK_AREA is larger than REP_M_AREA",
            RuleKind::AreaRatio {
                smaller: Field::NoTkArea,
                larger: Field::RepMArea,
                tolerance: config.area_ratio_tolerance,
            },
        ),
        invalid(
            "ivd_no_tk_area_rep_m_area",
            "NO_TAKE is 'All' but NO_TK_AREA differs from REP_M_AREA",
            RuleKind::FieldEquality {
                left: Field::RepMArea,
                right: Field::NoTkArea,
                condition: Some(Condition::is(Field::NoTake, ValueSet::text(["All"]))),
            },
        ),
        invalid(
            "ivd_int_crit_desig_eng_other",
            "INT_CRIT is set for a designation other than Ramsar or World Heritage",
            membership_when(
                Field::DesigEng,
                ValueSet::text([RAMSAR, WORLD_HERITAGE]),
                Condition::is_not(Field::IntCrit, ValueSet::text(["Not Applicable"])),
            ),
        ),
        invalid(
            "ivd_desig_eng_iucn_cat_other",
            "IUCN_CAT is invalid for a site that is not UNESCO-MAB or World Heritage",
            membership_when(
                Field::IucnCat,
                ValueSet::text(IUCN_CATEGORIES.into_iter().chain(["Not Reported", "Not Assigned"])),
                Condition::is_not(Field::DesigEng, ValueSet::text([UNESCO_MAB, WORLD_HERITAGE])),
            ),
        ),
    ];

    entries.extend(CONSISTENT_FIELDS.iter().map(|(name, field)| {
        CatalogEntry::new(
            *name,
            RuleCategory::Inconsistent,
            format!("records sharing a WDPAID disagree on {field}"),
            RuleKind::Consistency { field: *field },
        )
    }));

    entries.extend([
        invalid(
            "ivd_pa_def",
            "PA_DEF is not 1",
            membership(Field::PaDef, ValueSet::text(["1"])),
        ),
        invalid(
            "ivd_desig_eng_international",
            "DESIG_ENG is not an international designation while DESIG_TYPE is 'International'",
            membership_when(
                Field::DesigEng,
                ValueSet::text(INTERNATIONAL_DESIGNATIONS),
                Condition::is(Field::DesigType, ValueSet::text(["International"])),
            ),
        ),
        invalid(
            "ivd_desig_type_international",
            "DESIG_TYPE is not 'International' for an international designation",
            membership_when(
                Field::DesigType,
                ValueSet::text(["International"]),
                Condition::is(Field::DesigEng, ValueSet::text(INTERNATIONAL_DESIGNATIONS)),
            ),
        ),
        invalid(
            "ivd_desig_eng_regional",
            "DESIG_ENG is not a regional designation while DESIG_TYPE is 'Regional'",
            membership_when(
                Field::DesigEng,
                ValueSet::text(REGIONAL_DESIGNATIONS),
                Condition::is(Field::DesigType, ValueSet::text(["Regional"])),
            ),
        ),
        invalid(
            "ivd_desig_type_regional",
            "DESIG_TYPE is not 'Regional' for a regional designation",
            membership_when(
                Field::DesigType,
                ValueSet::text(["Regional"]),
                Condition::is(Field::DesigEng, ValueSet::text(REGIONAL_DESIGNATIONS)),
            ),
        ),
        invalid(
            "ivd_int_crit",
            "INT_CRIT is not a combination of criteria (i) to (x) for a Ramsar or World Heritage site",
            membership_when(
                Field::IntCrit,
                ValueSet::criteria(INT_CRIT_CRITERIA, ["Not Reported"]),
                Condition::is(Field::DesigEng, ValueSet::text([RAMSAR, WORLD_HERITAGE])),
            ),
        ),
        invalid(
            "ivd_desig_type",
            "DESIG_TYPE is not an allowed value",
            membership(
                Field::DesigType,
                ValueSet::text(["National", "Regional", "International", "Not Applicable"]),
            ),
        ),
        invalid(
            "ivd_iucn_cat",
            "IUCN_CAT is not an allowed value",
            membership(
                Field::IucnCat,
                ValueSet::text(IUCN_CATEGORIES.into_iter().chain([
                    "Not Reported",
                    "Not Applicable",
                    "Not Assigned",
                ])),
            ),
        ),
        invalid(
            "ivd_iucn_cat_unesco_whs",
            "IUCN_CAT is not 'Not Applicable' for a UNESCO-MAB or World Heritage site",
            membership_when(
                Field::IucnCat,
                ValueSet::text(["Not Applicable"]),
                Condition::is(Field::DesigEng, ValueSet::text([UNESCO_MAB, WORLD_HERITAGE])),
            ),
        ),
        invalid(
            "ivd_marine",
            "MARINE is not 0, 1 or 2",
            membership(Field::Marine, ValueSet::text(["0", "1", "2"])),
        ),
        invalid(
            "check_no_take_marine0",
            "NO_TAKE is not 'Not Applicable' for a terrestrial site",
            membership_when(
                Field::NoTake,
                ValueSet::text(["Not Applicable"]),
                marine_is(&["0"]),
            ),
        ),
        invalid(
            "ivd_no_take_marine12",
            "NO_TAKE is not an allowed value for a marine or coastal site",
            membership_when(
                Field::NoTake,
                ValueSet::text(["All", "Part", "None", "Not Reported"]),
                marine_is(&["1", "2"]),
            ),
        ),
        invalid(
            "check_no_tk_area_marine0",
            "NO_TK_AREA is not 0 for a terrestrial site",
            membership_when(Field::NoTkArea, ValueSet::numeric(&[0.0]), marine_is(&["0"])),
        ),
        invalid(
            "ivd_no_tk_area_no_take",
            "NO_TK_AREA is not 0 while NO_TAKE is 'Not Applicable'",
            membership_when(
                Field::NoTkArea,
                ValueSet::numeric(&[0.0]),
                Condition::is(Field::NoTake, ValueSet::text(["Not Applicable"])),
            ),
        ),
        invalid(
            "ivd_status",
            "STATUS is not an allowed value",
            membership_when(
                Field::Status,
                ValueSet::text(["Proposed", "Designated", "Established"]),
                Condition::is_not(Field::DesigEng, ValueSet::text([WORLD_HERITAGE, BARCELONA])),
            ),
        )
        .provisional(),
        invalid(
            "ivd_status_WH",
            "STATUS is not an allowed value for a World Heritage site",
            membership_when(
                Field::Status,
                ValueSet::text(["Proposed", "Inscribed"]),
                Condition::is(Field::DesigEng, ValueSet::text([WORLD_HERITAGE])),
            ),
        )
        .provisional(),
        invalid(
            "ivd_status_BarcelonaConv",
            "STATUS is not an allowed value for a Barcelona Convention site",
            membership_when(
                Field::Status,
                ValueSet::text(["Proposed", "Adopted"]),
                Condition::is(Field::DesigEng, ValueSet::text([BARCELONA])),
            ),
        )
        .provisional(),
        invalid(
            "ivd_status_yr",
            "STATUS_YR is neither 0 nor a year between 1750 and the current year",
            membership(
                Field::StatusYr,
                ValueSet::years(FIRST_STATUS_YEAR, config.current_year),
            ),
        ),
        invalid(
            "ivd_gov_type",
            "GOV_TYPE is not an allowed value",
            membership(Field::GovType, ValueSet::text(GOV_TYPES)),
        ),
        invalid(
            "ivd_own_type",
            "OWN_TYPE is not an allowed value",
            membership(Field::OwnType, ValueSet::text(OWN_TYPES)),
        ),
        invalid(
            "ivd_verif",
            "VERIF is not an allowed value",
            membership(
                Field::Verif,
                ValueSet::text(["State Verified", "Expert Verified", "Not Reported"]),
            ),
        ),
        invalid(
            "check_parent_iso3",
            "PARENT_ISO3 holds a code that is not ISO 3166-1 alpha-3",
            RuleKind::CountryCodes {
                field: Field::ParentIso3,
            },
        ),
        invalid(
            "check_iso3",
            "ISO3 holds a code that is not ISO 3166-1 alpha-3",
            RuleKind::CountryCodes { field: Field::Iso3 },
        ),
        invalid(
            "ivd_status_desig_type",
            "STATUS is not 'Established' while DESIG_TYPE is 'Not Applicable'",
            membership_when(
                Field::Status,
                ValueSet::text(["Established"]),
                Condition::is(Field::DesigType, ValueSet::text(["Not Applicable"])),
            ),
        ),
    ]);

    entries.extend(FREE_TEXT_FIELDS.iter().map(|field| {
        CatalogEntry::new(
            format!("ivd_character_{}", field_slug(*field)),
            RuleCategory::ForbiddenCharacter,
            format!("{field} contains a forbidden character"),
            RuleKind::ForbiddenCharacter {
                field: *field,
                characters: config.forbidden_characters.clone(),
            },
        )
    }));

    entries.extend(
        FREE_TEXT_FIELDS
            .iter()
            .chain([Field::MetadataId].iter())
            .map(|field| {
                CatalogEntry::new(
                    format!("ivd_nan_present_{}", field_slug(*field)),
                    RuleCategory::MissingValue,
                    format!("{field} is empty"),
                    RuleKind::NullPresence { field: *field },
                )
            }),
    );

    entries
}

/// Rules that need `GIS_AREA` and `GIS_M_AREA`.
pub fn area_entries(config: &ValidationConfig) -> Vec<CatalogEntry> {
    let plausibility = |reported: Field, gis: Field, denominator: Denominator| {
        RuleKind::AreaPlausibility {
            reported,
            gis,
            denominator,
            params: config.plausibility,
        }
    };
    vec![
        area_invalid(
            "gis_area_gt_rep_area",
            "GIS_AREA is implausibly larger than REP_AREA",
            plausibility(Field::RepArea, Field::GisArea, Denominator::Reported),
        ),
        area_invalid(
            "rep_area_gt_gis_area",
            "REP_AREA is implausibly larger than GIS_AREA",
            plausibility(Field::RepArea, Field::GisArea, Denominator::Gis),
        ),
        area_invalid(
            "gis_m_area_gt_rep_m_area",
            "GIS_M_AREA is implausibly larger than REP_M_AREA",
            plausibility(Field::RepMArea, Field::GisMArea, Denominator::Reported),
        ),
        area_invalid(
            "rep_m_area_gt_gis_m_area",
            "REP_M_AREA is implausibly larger than GIS_M_AREA",
            plausibility(Field::RepMArea, Field::GisMArea, Denominator::Gis),
        ),
        area_invalid(
            "tiny_gis_area",
            "GIS_AREA is at or below the minimum area",
            RuleKind::Threshold {
                field: Field::GisArea,
                min_exclusive: config.tiny_area_km2,
                condition: None,
            },
        ),
        area_invalid(
            "no_tk_area_gt_gis_m_area",
            "NO_TK_AREA is larger than GIS_M_AREA",
            RuleKind::AreaRatio {
                smaller: Field::NoTkArea,
                larger: Field::GisMArea,
                tolerance: config.area_ratio_tolerance,
            },
        ),
        area_invalid(
            "ivd_gis_m_area_gt_gis_area",
            "GIS_M_AREA is larger than GIS_AREA",
            RuleKind::AreaRatio {
                smaller: Field::GisMArea,
                larger: Field::GisArea,
                tolerance: config.area_ratio_tolerance,
            },
        ),
        area_invalid(
            "zero_gis_m_area_marine12",
            "GIS_M_AREA is zero or negative for a marine or coastal site",
            RuleKind::Threshold {
                field: Field::GisMArea,
                min_exclusive: 0.0,
                condition: Some(marine_is(&["1", "2"])),
            },
        ),
        invalid(
            "ivd_marine_designation",
            "MARINE disagrees with the share of GIS_M_AREA in GIS_AREA",
            RuleKind::MarineClassification {
                bands: config.marine_band_bounds,
            },
        ),
    ]
}

/// Rules that need the source table.
pub fn cross_reference_entries() -> Vec<CatalogEntry> {
    vec![CatalogEntry::new(
        "ivd_metadataid_not_in_source_table",
        RuleCategory::CrossReference,
        "METADATAID is not listed in the source table",
        RuleKind::SourceTableReference {
            field: Field::MetadataId,
        },
    )]
}
