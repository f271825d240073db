//! Column type inference and display normalization.
//!
//! Each column is probed once: if every present value is an integer it is an
//! [`ColumnKind::Integer`] column, if every present value is a finite float it
//! is [`ColumnKind::Float`], otherwise [`ColumnKind::Text`]. Empty cells are
//! missing values and never affect the probe.
//!
//! Numeric columns are re-rendered in canonical form, floats rounded to a
//! fixed number of decimals. Text columns are left exactly as read.

use serde::{Deserialize, Serialize};

use crate::table::Table;

/// Inferred type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnKind {
    Integer,
    Float,
    Text,
}

impl ColumnKind {
    /// Infer the kind of a column from its cells.
    pub fn probe<'a>(values: impl IntoIterator<Item = &'a str>) -> Self {
        let mut kind = None;
        for value in values.into_iter().map(str::trim).filter(|v| !v.is_empty()) {
            let cell = if value.parse::<i64>().is_ok() {
                ColumnKind::Integer
            } else if parse_finite(value).is_some() {
                ColumnKind::Float
            } else {
                return ColumnKind::Text;
            };
            kind = match (kind, cell) {
                (Some(ColumnKind::Float), _) | (_, ColumnKind::Float) => Some(ColumnKind::Float),
                _ => Some(ColumnKind::Integer),
            };
        }
        kind.unwrap_or(ColumnKind::Text)
    }

    pub fn is_numeric(&self) -> bool {
        !matches!(self, ColumnKind::Text)
    }
}

/// Normalize every column in place and return the inferred kinds.
pub fn normalize(table: &mut Table, precision: u32) -> Vec<ColumnKind> {
    let kinds: Vec<ColumnKind> = (0..table.column_count())
        .map(|idx| ColumnKind::probe(table.column(idx)))
        .collect();

    for row in table.rows_mut() {
        for (cell, kind) in row.iter_mut().zip(&kinds) {
            if let Some(rendered) = render_cell(cell, *kind, precision) {
                *cell = rendered;
            }
        }
    }

    tracing::debug!(?kinds, "normalized columns");
    kinds
}

/// New display text for a cell, or `None` to keep it unchanged.
fn render_cell(cell: &str, kind: ColumnKind, precision: u32) -> Option<String> {
    let value = cell.trim();
    if value.is_empty() {
        return kind.is_numeric().then(String::new);
    }
    match kind {
        ColumnKind::Integer => value.parse::<i64>().ok().map(|v| v.to_string()),
        ColumnKind::Float => {
            let v = parse_finite(value)?;
            Some(format_float(round_to(v, precision)))
        }
        ColumnKind::Text => None,
    }
}

fn parse_finite(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Round half to even at `precision` decimal places.
pub fn round_to(value: f64, precision: u32) -> f64 {
    let scale = 10f64.powi(precision as i32);
    let scaled = value * scale;
    // beyond 2^52 every f64 is integral, so there is nothing to round
    if !scaled.is_finite() || scaled.abs() >= 2f64.powi(52) {
        return value;
    }
    scaled.round_ties_even() / scale
}

/// Shortest round-trip text for a float, always with a fractional part.
///
/// Magnitudes outside `[1e-4, 1e16)` use scientific notation with a signed,
/// two digit minimum exponent (`1e+16`, `2.5e-05`).
pub fn format_float(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let sci = format!("{:e}", value);
        return match sci.split_once('e') {
            Some((mantissa, exp)) => match exp.strip_prefix('-') {
                Some(digits) => format!("{mantissa}e-{digits:0>2}"),
                None => format!("{mantissa}e+{exp:0>2}"),
            },
            None => sci,
        };
    }
    let text = value.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{text}.0")
    }
}
