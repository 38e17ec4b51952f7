use std::collections::BTreeSet;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use wdpa_model::RuleOutcome;
use wdpa_validate::{RuleCategory, RuleResult, ValidationReport};

use crate::types::CheckRun;

/// Identifiers shown per rule before the rest are counted.
pub const EXAMPLE_LIMIT: usize = 5;

pub fn print_summary(run: &CheckRun) {
    let report = &run.report;
    println!("Dataset: {}", run.dataset_path.display());
    println!("Variant: {}", report.variant);
    println!("Records: {}", report.record_count);
    let passed = report
        .results
        .iter()
        .filter(|result| result.outcome.flag() == Some(false))
        .count();
    if report.is_clean() {
        println!("All {} rules passed.", report.results.len());
        return;
    }
    println!("{table}", table = summary_table(report));
    println!("{table}", table = category_table(report));
    println!("{passed} of {} rules passed.", report.results.len());
}

/// One row per rule that found violations or could not run.
pub fn summary_table(report: &ValidationReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rule"),
        header_cell("Category"),
        header_cell("Status"),
        header_cell("Count"),
        header_cell("Examples"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);
    for result in report
        .results
        .iter()
        .filter(|result| result.outcome.flag() != Some(false))
    {
        table.add_row(vec![
            rule_cell(result),
            Cell::new(result.category.label()),
            status_cell(&result.outcome),
            count_cell(&result.outcome),
            detail_cell(&result.outcome),
        ]);
    }
    table
}

/// Violated rule counts per category, every category listed.
pub fn category_table(report: &ValidationReport) -> Table {
    let counts = report.violations_by_category();
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Description"),
        header_cell("Violated rules"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for category in RuleCategory::all() {
        let count = counts.get(category).copied().unwrap_or(0);
        let count = if count > 0 {
            Cell::new(count).fg(Color::Red).add_attribute(Attribute::Bold)
        } else {
            dim_cell(count)
        };
        table.add_row(vec![
            Cell::new(category.label())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(category.description()),
            count,
        ]);
    }
    table
}

/// Up to `limit` identifiers joined by commas, then the number left out.
pub fn example_ids(offenders: &BTreeSet<String>, limit: usize) -> String {
    if offenders.is_empty() {
        return "-".to_string();
    }
    let shown: Vec<&str> = offenders.iter().take(limit).map(String::as_str).collect();
    let rest = offenders.len().saturating_sub(limit);
    if rest == 0 {
        shown.join(", ")
    } else {
        format!("{} (+{rest} more)", shown.join(", "))
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(40)),
            ColumnConstraint::UpperBoundary(Width::Fixed(20)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::UpperBoundary(Width::Percentage(50)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn rule_cell(result: &RuleResult) -> Cell {
    if result.provisional {
        Cell::new(format!("{} *", result.name)).fg(Color::Yellow)
    } else {
        Cell::new(&result.name)
    }
}

fn status_cell(outcome: &RuleOutcome) -> Cell {
    match outcome.flag() {
        Some(true) => Cell::new("FAIL").fg(Color::Red).add_attribute(Attribute::Bold),
        Some(false) => Cell::new("PASS").fg(Color::Green),
        None => Cell::new("ERROR")
            .fg(Color::Magenta)
            .add_attribute(Attribute::Bold),
    }
}

fn count_cell(outcome: &RuleOutcome) -> Cell {
    match outcome {
        RuleOutcome::Evaluated { offenders } => Cell::new(offenders.len()).fg(Color::Red),
        RuleOutcome::Failed { .. } => dim_cell("-"),
    }
}

fn detail_cell(outcome: &RuleOutcome) -> Cell {
    match outcome {
        RuleOutcome::Evaluated { offenders } => Cell::new(example_ids(offenders, EXAMPLE_LIMIT)),
        RuleOutcome::Failed { reason } => Cell::new(reason).fg(Color::Magenta),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
