//! Parallel evaluation of a catalog against one dataset.

use std::collections::BTreeSet;
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info, info_span, warn};
use wdpa_model::{Dataset, Field, ReferenceCodes, RuleOutcome, SourceTable};

use crate::catalog::{Catalog, CatalogEntry};
use crate::checks::membership::{Cells, condition_mask, invalid_values};
use crate::checks::{area, codes, consistency, marine, plausibility, text};
use crate::error::EvaluationError;
use crate::report::{RuleResult, ValidationReport};
use crate::rules::{Condition, RuleKind, ValueSet};

/// Runs a [`Catalog`] over datasets.
///
/// Entries are independent: they only read the dataset and keep derived
/// values in local buffers, so they are evaluated on the rayon pool and
/// collected back in catalog order.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'a> {
    catalog: &'a Catalog,
    reference_codes: Option<&'a ReferenceCodes>,
    source_table: Option<&'a SourceTable>,
}

impl<'a> Validator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            reference_codes: None,
            source_table: None,
        }
    }

    /// Codes used by the country code rules.
    pub fn with_reference_codes(mut self, codes: &'a ReferenceCodes) -> Self {
        self.reference_codes = Some(codes);
        self
    }

    /// Table used by the source table reference rule.
    pub fn with_source_table(mut self, table: &'a SourceTable) -> Self {
        self.source_table = Some(table);
        self
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Evaluates every entry of the catalog.
    pub fn validate(&self, dataset: &Dataset) -> ValidationReport {
        let span = info_span!(
            "validate",
            variant = %dataset.variant(),
            records = dataset.height(),
            rules = self.catalog.len()
        );
        let _guard = span.enter();
        let started = Instant::now();

        if dataset.variant() != self.catalog.variant() {
            warn!(
                dataset = %dataset.variant(),
                catalog = %self.catalog.variant(),
                "catalog was resolved for another schema variant"
            );
        }

        let ids = dataset.record_ids().map_err(|error| error.to_string());
        let results: Vec<RuleResult> = self
            .catalog
            .entries()
            .par_iter()
            .map(|entry| {
                // Worker threads do not inherit the entered span.
                let outcome = span.in_scope(|| match &ids {
                    Ok(ids) => self.timed(entry, dataset, ids),
                    Err(reason) => RuleOutcome::failed(reason.clone()),
                });
                RuleResult {
                    name: entry.name.clone(),
                    category: entry.category,
                    description: entry.description.clone(),
                    provisional: entry.provisional,
                    outcome,
                }
            })
            .collect();

        let report = ValidationReport {
            variant: dataset.variant(),
            record_count: dataset.height(),
            results,
        };
        info!(
            violated = report.violated().count(),
            failed = report.failed().count(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "validation finished"
        );
        report
    }

    /// Evaluates a single entry.
    ///
    /// Callers that want to stop early can dispatch entries one at a time;
    /// each outcome is final on its own.
    pub fn evaluate_entry(&self, entry: &CatalogEntry, dataset: &Dataset) -> RuleOutcome {
        match dataset.record_ids() {
            Ok(ids) => self.timed(entry, dataset, &ids),
            Err(error) => RuleOutcome::failed(error.to_string()),
        }
    }

    fn timed(&self, entry: &CatalogEntry, dataset: &Dataset, ids: &[String]) -> RuleOutcome {
        let started = Instant::now();
        match self.evaluate(&entry.kind, dataset, ids) {
            Ok(offenders) => {
                debug!(
                    rule = %entry.name,
                    offenders = offenders.len(),
                    elapsed_us = started.elapsed().as_micros() as u64,
                    "rule evaluated"
                );
                RuleOutcome::Evaluated { offenders }
            }
            Err(error) => {
                warn!(rule = %entry.name, %error, "rule failed");
                RuleOutcome::failed(error.to_string())
            }
        }
    }

    fn evaluate(
        &self,
        kind: &RuleKind,
        dataset: &Dataset,
        ids: &[String],
    ) -> Result<BTreeSet<String>, EvaluationError> {
        let offenders = match kind {
            RuleKind::DuplicateKey { field } => {
                consistency::duplicate_keys(ids, &dataset.text_values(*field)?)
            }
            RuleKind::Membership {
                field,
                allowed,
                condition,
            } => {
                let scope = scope(dataset, condition.as_ref())?;
                let cells = read_cells(dataset, *field, allowed)?;
                invalid_values(ids, &cells, allowed, &scope)
            }
            RuleKind::Threshold {
                field,
                min_exclusive,
                condition,
            } => {
                let scope = scope(dataset, condition.as_ref())?;
                area::at_or_below(ids, &dataset.numeric_values(*field)?, *min_exclusive, &scope)
            }
            RuleKind::FieldEquality {
                left,
                right,
                condition,
            } => {
                let scope = scope(dataset, condition.as_ref())?;
                area::unequal(
                    ids,
                    &dataset.numeric_values(*left)?,
                    &dataset.numeric_values(*right)?,
                    &scope,
                )
            }
            RuleKind::AreaRatio {
                smaller,
                larger,
                tolerance,
            } => area::exceeds_container(
                ids,
                &dataset.numeric_values(*smaller)?,
                &dataset.numeric_values(*larger)?,
                *tolerance,
            ),
            RuleKind::AreaPlausibility {
                reported,
                gis,
                denominator,
                params,
            } => plausibility::implausible_areas(
                ids,
                &dataset.numeric_values(*reported)?,
                &dataset.numeric_values(*gis)?,
                *denominator,
                params,
            ),
            RuleKind::MarineClassification { bands } => marine::misclassified(
                ids,
                &dataset.text_values(Field::Marine)?,
                &dataset.numeric_values(Field::GisMArea)?,
                &dataset.numeric_values(Field::GisArea)?,
                bands,
            ),
            RuleKind::Consistency { field } => consistency::inconsistent_groups(
                ids,
                &dataset.group_ids()?,
                &dataset.text_values(*field)?,
            ),
            RuleKind::ForbiddenCharacter { field, characters } => {
                text::forbidden_characters(ids, &dataset.text_values(*field)?, characters)
            }
            RuleKind::NullPresence { field } => {
                text::null_values(ids, &dataset.text_values(*field)?)
            }
            RuleKind::CountryCodes { field } => {
                let reference = self
                    .reference_codes
                    .ok_or(EvaluationError::MissingReferenceCodes)?;
                codes::invalid_code_lists(ids, &dataset.text_values(*field)?, reference)
            }
            RuleKind::SourceTableReference { field } => {
                let table = self
                    .source_table
                    .ok_or(EvaluationError::MissingSourceTable)?;
                codes::unknown_sources(ids, &dataset.text_values(*field)?, table)
            }
        };
        Ok(offenders)
    }
}

/// Reads `field` as text or numbers, whichever `set` compares.
fn read_cells(dataset: &Dataset, field: Field, set: &ValueSet) -> Result<Cells, EvaluationError> {
    Ok(if set.is_numeric() {
        Cells::Numbers(dataset.numeric_values(field)?)
    } else {
        Cells::Text(dataset.text_values(field)?)
    })
}

fn scope(dataset: &Dataset, condition: Option<&Condition>) -> Result<Vec<bool>, EvaluationError> {
    let Some(condition) = condition else {
        return Ok(condition_mask(None, dataset.height()));
    };
    let cells = read_cells(dataset, condition.field, &condition.values)?;
    Ok(condition_mask(Some((condition, &cells)), dataset.height()))
}
