//! Output formatting: present a normalized table as text.
//!
//! This module handles the final stage of the pipeline. It provides:
//!
//! - **MarkdownTable**: padded pipe-table lines with per-column widths
//! - **render**: dispatch on [`OutputFormat`]
//!
//! Rendering is a pure presentation layer. All normalization and ordering
//! happens before a table reaches this module.
//!
//! ## Example
//!
//! ```rust
//! use csv2mdlib::output::MarkdownTable;
//! use csv2mdlib::Table;
//!
//! let table = Table::new(
//!     vec!["id".into(), "name".into()],
//!     vec![vec!["1".into(), "alpha".into()]],
//! ).unwrap();
//! let md = MarkdownTable::from_table(&table);
//! assert_eq!(md.widths, vec![2, 5]);
//! assert_eq!(md.to_string(), "| id | name  |\n| -- | ----- |\n| 1  | alpha |\n");
//! ```

pub mod markdown;

pub use markdown::{column_widths, MarkdownTable};

use crate::options::OutputFormat;
use crate::table::Table;
use crate::Result;

/// Render `table` in the requested format.
pub fn render(table: &Table, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Markdown => Ok(MarkdownTable::from_table(table).to_string()),
        OutputFormat::Json => render_json(table),
    }
}

/// Pretty JSON with `headers` and `rows`, newline terminated.
pub fn render_json(table: &Table) -> Result<String> {
    let mut json = serde_json::to_string_pretty(table)?;
    json.push('\n');
    Ok(json)
}
