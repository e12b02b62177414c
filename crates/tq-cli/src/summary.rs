//! Console scorecard and per-check result table.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use tq_ingest::format_numeric;
use tq_model::{CHECKS_TOTAL, Detail, QualityStatus, Severity};

use crate::commands::AnalyzeResult;

pub fn print_summary(result: &AnalyzeResult) {
    let run = &result.run;
    println!("Dataset: {}", result.source);
    if let Some(path) = &result.report_path {
        println!("Report: {}", path.display());
    }

    let mut scorecard = Table::new();
    scorecard.set_header(vec![
        header_cell("Score"),
        header_cell("Status"),
        header_cell("Rows"),
        header_cell("Columns"),
        header_cell("Checks OK"),
        header_cell("Elapsed"),
    ]);
    apply_scorecard_style(&mut scorecard);
    scorecard.add_row(vec![
        score_cell(run.score()),
        status_cell(run.status()),
        Cell::new(run.row_count()),
        Cell::new(result.column_count),
        Cell::new(format!("{}/{}", run.checks_passed(), CHECKS_TOTAL)),
        Cell::new(format!("{:.2}s", result.elapsed_seconds)),
    ]);
    println!("{scorecard}");

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Check"),
        header_cell("Result"),
        header_cell("Severity"),
        header_cell("Details"),
    ]);
    apply_result_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Center);
    for (check, result) in run.results() {
        table.add_row(vec![
            Cell::new(check.label())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            passed_cell(result.passed),
            severity_cell(result.severity),
            details_cell(&result.details),
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_scorecard_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_result_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    if table.column_count() >= 4 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(24)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::LowerBoundary(Width::Fixed(10)),
            ColumnConstraint::UpperBoundary(Width::Percentage(60)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn score_cell(score: u8) -> Cell {
    let color = match QualityStatus::from_score(score) {
        QualityStatus::Excellent => Color::Green,
        QualityStatus::Good => Color::Yellow,
        QualityStatus::Poor => Color::Red,
    };
    Cell::new(format!("{score}%"))
        .fg(color)
        .add_attribute(Attribute::Bold)
}

fn status_cell(status: QualityStatus) -> Cell {
    let color = match status {
        QualityStatus::Excellent => Color::Green,
        QualityStatus::Good => Color::Yellow,
        QualityStatus::Poor => Color::Red,
    };
    Cell::new(status.as_str()).fg(color)
}

fn passed_cell(passed: bool) -> Cell {
    if passed {
        Cell::new("PASS")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("FAIL")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    }
}

fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::Ok => Cell::new("OK").fg(Color::Green),
        Severity::Info => Cell::new("INFO").fg(Color::Blue),
        Severity::Warning => Cell::new("WARN").fg(Color::Yellow),
        Severity::Critical => Cell::new("CRITICAL")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

fn details_cell(details: &tq_model::Details) -> Cell {
    if details.is_empty() {
        return Cell::new("-").fg(Color::DarkGrey);
    }
    let rendered: Vec<String> = details
        .iter()
        .map(|(key, value)| format!("{key}: {}", render_detail(value)))
        .collect();
    Cell::new(rendered.join("\n"))
}

fn render_detail(detail: &Detail) -> String {
    match detail {
        Detail::Flag(flag) => flag.to_string(),
        Detail::Count(count) => count.to_string(),
        Detail::Number(value) => format_numeric((value * 100.0).round() / 100.0),
        Detail::Text(text) => text.clone(),
        Detail::Columns(names) => {
            if names.is_empty() {
                "none".to_string()
            } else {
                names.join(", ")
            }
        }
        Detail::CountByColumn(map) => map
            .iter()
            .map(|(name, count)| format!("{name}={count}"))
            .collect::<Vec<_>>()
            .join(", "),
        Detail::NumberByColumn(map) => map
            .iter()
            .map(|(name, value)| {
                format!("{name}={}", format_numeric((value * 100.0).round() / 100.0))
            })
            .collect::<Vec<_>>()
            .join(", "),
    }
}
