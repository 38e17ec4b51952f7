use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, anyhow, bail};
use comfy_table::Table;
use tracing::{info, info_span};

use wdpa_ingest::{load_dataset, load_reference_codes, load_source_table};
use wdpa_model::{RuleOutcome, SchemaVariant};
use wdpa_validate::{Catalog, ValidationConfig, ValidationReport, Validator};

use crate::summary::apply_table_style;
use crate::types::{CheckRequest, CheckRun};

/// Reads a JSON configuration file; defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<ValidationConfig> {
    let Some(path) = path else {
        return Ok(ValidationConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let config = serde_json::from_str(&text)
        .with_context(|| format!("parse config {}", path.display()))?;
    Ok(config)
}

pub fn run_check(request: &CheckRequest) -> Result<CheckRun> {
    let span = info_span!(
        "check",
        variant = %request.variant,
        dataset = %request.dataset.display()
    );
    let _guard = span.enter();
    let start = Instant::now();

    let mut config = load_config(request.config.as_deref())?;
    if request.source_table.is_some() {
        config.include_cross_reference = true;
    }
    let catalog = Catalog::resolve(request.variant, &config).context("build rule catalog")?;

    let dataset = load_dataset(&request.dataset, request.variant)
        .with_context(|| format!("load {}", request.dataset.display()))?;
    let reference_codes = request
        .reference_codes
        .as_deref()
        .map(|path| {
            load_reference_codes(path).with_context(|| format!("load {}", path.display()))
        })
        .transpose()?;
    let source_table = request
        .source_table
        .as_deref()
        .map(|path| load_source_table(path).with_context(|| format!("load {}", path.display())))
        .transpose()?;

    let mut validator = Validator::new(&catalog);
    if let Some(codes) = &reference_codes {
        validator = validator.with_reference_codes(codes);
    }
    if let Some(table) = &source_table {
        validator = validator.with_source_table(table);
    }
    let report = validator.validate(&dataset);
    info!(
        violated = report.violated().count(),
        failed = report.failed().count(),
        duration_ms = start.elapsed().as_millis(),
        "check complete"
    );
    Ok(CheckRun {
        dataset_path: request.dataset.clone(),
        dataset,
        report,
    })
}

/// Lists the resolved catalog of one variant, or of both.
pub fn run_rules(variant: Option<SchemaVariant>, config: Option<&Path>) -> Result<()> {
    let config = load_config(config)?;
    let variants = match variant {
        Some(variant) => vec![variant],
        None => vec![SchemaVariant::Polygon, SchemaVariant::Point],
    };
    for variant in variants {
        let catalog = Catalog::resolve(variant, &config).context("build rule catalog")?;
        println!("{} ({} rules)", variant, catalog.len());
        println!("{}", rules_table(&catalog));
    }
    Ok(())
}

pub fn rules_table(catalog: &Catalog) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Rule", "Category", "Kind", "Description"]);
    apply_table_style(&mut table);
    for entry in catalog.entries() {
        let name = if entry.provisional {
            format!("{} (provisional)", entry.name)
        } else {
            entry.name.clone()
        };
        table.add_row(vec![
            name,
            entry.category.label().to_string(),
            entry.kind.label().to_string(),
            entry.description.clone(),
        ]);
    }
    table
}

/// The rule-name to outcome mapping as pretty JSON.
pub fn render_json(report: &ValidationReport) -> Result<String> {
    serde_json::to_string_pretty(&report.to_map()).context("serialize outcomes")
}

/// Prints the rows that violate `rule`.
pub fn print_records(run: &CheckRun, rule: &str) -> Result<()> {
    let result = run
        .report
        .get(rule)
        .ok_or_else(|| anyhow!("unknown rule: {rule}"))?;
    match &result.outcome {
        RuleOutcome::Failed { reason } => bail!("{rule} could not be evaluated: {reason}"),
        RuleOutcome::Evaluated { offenders } if offenders.is_empty() => {
            println!("{rule}: no offending records");
        }
        RuleOutcome::Evaluated { offenders } => {
            let frame = run
                .dataset
                .select_records(offenders)
                .context("select offending records")?;
            println!("{rule}: {} offending records", frame.height());
            println!("{frame}");
        }
    }
    Ok(())
}
