//! Rendering of a header comparison.

use std::borrow::Cow;
use std::path::Path;

use anyhow::Result;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use colcheck_model::{ColumnSequence, HeaderComparison, Verdict};

pub const SAME_COLUMNS: &str = "The columns are the same.";
pub const SAME_ORDER: &str = "The order is the same!";
pub const DIFFERENT_ORDER: &str = "Not in the same order!";

/// Report output styles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Fixed message lines.
    #[default]
    Text,
    /// Summary and differences as tables.
    Table,
    /// Machine-readable JSON document.
    Json,
}

/// Everything a rendered report shows.
#[derive(Debug, Serialize)]
pub struct ComparisonReport<'a> {
    pub model_file: &'a Path,
    pub new_file: &'a Path,
    pub model_columns: &'a ColumnSequence,
    pub new_columns: &'a ColumnSequence,
    pub verdict: Verdict,
    #[serde(flatten)]
    pub comparison: &'a HeaderComparison,
}

pub fn render(report: &ComparisonReport<'_>, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(report.comparison)),
        ReportFormat::Table => Ok(render_table(report)),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

/// Renders the fixed message lines, one per line.
pub fn render_text(comparison: &HeaderComparison) -> String {
    let mut lines = Vec::new();
    if comparison.same_columns {
        lines.push(SAME_COLUMNS.to_string());
        lines.push(if comparison.same_order { SAME_ORDER } else { DIFFERENT_ORDER }.to_string());
    } else {
        if !comparison.removed.is_empty() {
            lines.push(format!(
                "Columns missing from the new source: {}",
                name_set(&comparison.removed)
            ));
        }
        if !comparison.added.is_empty() {
            lines.push(format!(
                "Columns added in the new source: {}",
                name_set(&comparison.added)
            ));
        }
    }
    if !comparison.model_duplicates.is_empty() {
        lines.push(format!(
            "Duplicate column names in the model file: {}",
            name_set(&comparison.model_duplicates)
        ));
    }
    if !comparison.new_duplicates.is_empty() {
        lines.push(format!(
            "Duplicate column names in the new file: {}",
            name_set(&comparison.new_duplicates)
        ));
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn name_set(names: &[String]) -> String {
    let names: Vec<Cow<'_, str>> = names.iter().map(|name| display_name(name)).collect();
    format!("{{{}}}", names.join(", "))
}

/// Quotes a name that would be unreadable bare inside `{A, B}`: empty,
/// padded with whitespace, or holding a separator, brace or quote.
fn display_name(name: &str) -> Cow<'_, str> {
    let ambiguous = name.is_empty()
        || name.trim() != name
        || name.contains([',', '{', '}', '"'])
        || name.chars().any(char::is_control);
    if ambiguous {
        Cow::Owned(format!("{name:?}"))
    } else {
        Cow::Borrowed(name)
    }
}

/// Renders a summary table, followed by a table of added and removed
/// columns when the sets differ.
pub fn render_table(report: &ComparisonReport<'_>) -> String {
    let comparison = report.comparison;
    let mut summary = Table::new();
    summary.set_header(vec![header_cell("Check"), header_cell("Result")]);
    apply_table_style(&mut summary);
    summary.add_row(vec![
        Cell::new("Model file"),
        Cell::new(format!(
            "{} ({} columns)",
            report.model_file.display(),
            report.model_columns.len()
        )),
    ]);
    summary.add_row(vec![
        Cell::new("New file"),
        Cell::new(format!(
            "{} ({} columns)",
            report.new_file.display(),
            report.new_columns.len()
        )),
    ]);
    summary.add_row(vec![Cell::new("Columns"), match_cell(comparison.same_columns)]);
    summary.add_row(vec![
        Cell::new("Order"),
        if comparison.same_columns {
            match_cell(comparison.same_order)
        } else {
            dim_cell("-")
        },
    ]);
    let mut rendered = summary.to_string();

    let changes: Vec<(&String, Change)> = comparison
        .removed
        .iter()
        .map(|name| (name, Change::Removed))
        .chain(comparison.added.iter().map(|name| (name, Change::Added)))
        .collect();
    if !changes.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![header_cell("Column"), header_cell("Change")]);
        apply_table_style(&mut table);
        if let Some(column) = table.column_mut(1) {
            column.set_cell_alignment(CellAlignment::Center);
        }
        for (name, change) in changes {
            table.add_row(vec![Cell::new(display_name(name)), change.cell()]);
        }
        rendered.push('\n');
        rendered.push_str(&table.to_string());
    }

    rendered.push('\n');
    rendered
}

#[derive(Clone, Copy)]
enum Change {
    Removed,
    Added,
}

impl Change {
    fn cell(self) -> Cell {
        match self {
            Self::Removed => Cell::new("removed").fg(Color::Red),
            Self::Added => Cell::new("added").fg(Color::Green),
        }
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn match_cell(matches: bool) -> Cell {
    if matches {
        Cell::new("same")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("different")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
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
