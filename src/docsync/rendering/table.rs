//! Table renderer
//!
//! Decodes a comma-separated source with a header row and renders a
//! markdown-style pipe table: one header row, one dash separator row, one
//! row per record. Column order follows the source; each column is padded
//! to its widest cell; cells missing from short rows render empty.

use super::registry::{RenderError, Renderer};

/// Renders a CSV source as a padded pipe table
pub struct TableRenderer;

impl Renderer for TableRenderer {
    fn name(&self) -> &str {
        "table"
    }

    fn render(&self, source: &str) -> Result<String, RenderError> {
        // flexible: short rows are legal and render as empty cells
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(source.as_bytes());

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| RenderError::MalformedSource(e.to_string()))?
            .iter()
            .map(escape_cell)
            .collect();

        let mut rows: Vec<Vec<String>> = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| RenderError::MalformedSource(e.to_string()))?;
            rows.push(record.iter().map(escape_cell).collect());
        }

        Ok(render_table(&headers, &rows))
    }

    fn description(&self) -> &str {
        "CSV rendered as a padded pipe table"
    }
}

/// Escape pipe characters so cell content cannot break the table
fn escape_cell(cell: &str) -> String {
    cell.replace('|', "\\|")
}

fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (idx, cell) in row.iter().enumerate() {
            if idx < widths.len() {
                widths[idx] = widths[idx].max(cell.chars().count());
            }
        }
    }

    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(headers, &widths));
    lines.push(format_row(&separator, &widths));
    for row in rows {
        lines.push(format_row(row, &widths));
    }
    lines.join("\n")
}

/// Format one table row, padding every cell to its column width. Cells
/// beyond the header count are dropped; absent cells render empty.
fn format_row(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(idx, &width)| {
            let cell = cells.get(idx).map(String::as_str).unwrap_or("");
            format!("{cell:<width$}")
        })
        .collect();
    format!("| {} |", padded.join(" | "))
}
