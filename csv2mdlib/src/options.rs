//! Input options for the conversion pipeline.
//!
//! This module contains all configuration types that control how a
//! delimited table is read, ordered and rendered.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::Csv2mdError;

/// Default sort key columns.
pub const DEFAULT_PRIMARY_KEY: &str = "S2";
pub const DEFAULT_SECONDARY_KEY: &str = "P2";

/// Decimal places kept for floating point columns.
pub const DEFAULT_PRECISION: u32 = 3;

/// The two columns rows are ordered by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKeys {
    /// Compared first
    pub primary: String,
    /// Breaks ties on the primary column
    pub secondary: String,
}

impl SortKeys {
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }
}

impl Default for SortKeys {
    fn default() -> Self {
        Self::new(DEFAULT_PRIMARY_KEY, DEFAULT_SECONDARY_KEY)
    }
}

/// Output format for the converted table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pipe table with padded columns (default)
    #[default]
    Markdown,
    /// Normalized headers and rows as JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Unknown output format: '{}'. Valid options: markdown, json",
                s
            )),
        }
    }
}

/// Parse a user supplied delimiter.
///
/// Accepts a single ASCII character, or `\t` / `tab` for tab.
pub fn parse_delimiter(s: &str) -> Result<u8, Csv2mdError> {
    if matches!(s, "\\t" | "tab") {
        return Ok(b'\t');
    }
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c as u8),
        _ => Err(Csv2mdError::InvalidDelimiter(s.to_string())),
    }
}

/// Options for [`convert`](crate::convert::convert).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertOptions {
    /// Field separator
    pub delimiter: u8,
    /// Whether to order rows by the sort keys
    pub sort: bool,
    /// Columns used when sorting
    pub sort_keys: SortKeys,
    /// Decimal places kept for floating point columns
    pub precision: u32,
    /// Rendered format
    pub format: OutputFormat,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            sort: true,
            sort_keys: SortKeys::default(),
            precision: DEFAULT_PRECISION,
            format: OutputFormat::default(),
        }
    }
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the field separator
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder: enable or disable sorting
    pub fn sort(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    /// Builder: set the sort key columns
    pub fn sort_keys(mut self, keys: SortKeys) -> Self {
        self.sort_keys = keys;
        self
    }

    /// Builder: set decimal places for floating point columns
    pub fn precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Builder: set the output format
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}
