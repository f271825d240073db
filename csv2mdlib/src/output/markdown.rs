//! Markdown pipe tables with left-justified, padded cells.

use std::fmt;

use serde::Serialize;

use crate::table::Table;

/// A rendered Markdown table.
///
/// `lines` holds the header line, the separator line and one line per row,
/// without trailing newlines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkdownTable {
    /// Display width of each column
    pub widths: Vec<usize>,
    /// Rendered lines
    pub lines: Vec<String>,
}

impl MarkdownTable {
    pub fn from_table(table: &Table) -> Self {
        let widths = column_widths(table);

        let mut lines = Vec::with_capacity(table.row_count() + 2);
        lines.push(format_row(table.headers(), &widths));
        lines.push(format_separator(&widths));
        lines.extend(table.rows().iter().map(|row| format_row(row, &widths)));

        MarkdownTable { widths, lines }
    }
}

impl fmt::Display for MarkdownTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Widest of the header and every cell, per column, in characters.
pub fn column_widths(table: &Table) -> Vec<usize> {
    let mut widths: Vec<usize> = table.headers().iter().map(|h| display_len(h)).collect();
    for row in table.rows() {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(display_len(cell));
        }
    }
    widths
}

fn display_len(s: &str) -> usize {
    s.chars().count()
}

fn format_row<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    let cells: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell.as_ref(), width = width))
        .collect();
    format!("| {} |", cells.join(" | "))
}

fn format_separator(widths: &[usize]) -> String {
    let dashes: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    format!("| {} |", dashes.join(" | "))
}
