//! Best-effort ordering of rows by two integer key columns.
//!
//! Sorting is all or nothing: every value in both key columns must coerce to
//! an integer. Otherwise the rows keep their input order and the reason is
//! returned as [`SortOutcome::Unsorted`] for the caller to report.

use crate::error::SortSkipped;
use crate::options::SortKeys;
use crate::table::Table;

/// Result of a sort attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortOutcome {
    /// Rows are ascending by (primary, secondary)
    Sorted,
    /// Rows are in input order
    Unsorted(SortSkipped),
}

impl SortOutcome {
    pub fn is_sorted(&self) -> bool {
        matches!(self, SortOutcome::Sorted)
    }
}

/// Stable ascending sort by the two key columns.
///
/// Leaves `table` untouched when a key column is missing or holds a value
/// that is not an integer.
pub fn sort_rows(table: &mut Table, keys: &SortKeys) -> SortOutcome {
    match sort_keys(table, keys) {
        Ok(pairs) => {
            table.sort_rows_by_keys(pairs);
            SortOutcome::Sorted
        }
        Err(reason) => SortOutcome::Unsorted(reason),
    }
}

/// Coerce both key columns, row by row.
fn sort_keys(table: &Table, keys: &SortKeys) -> Result<Vec<(i64, i64)>, SortSkipped> {
    let primary = key_column(table, &keys.primary)?;
    let secondary = key_column(table, &keys.secondary)?;
    Ok(primary.into_iter().zip(secondary).collect())
}

fn key_column(table: &Table, name: &str) -> Result<Vec<i64>, SortSkipped> {
    let idx = table
        .column_index(name)
        .ok_or_else(|| SortSkipped::MissingColumn(name.to_string()))?;
    table
        .column(idx)
        .enumerate()
        .map(|(row, value)| {
            coerce_int(value).ok_or_else(|| SortSkipped::NotInteger {
                column: name.to_string(),
                row: row + 1,
                value: value.to_string(),
            })
        })
        .collect()
}

/// Integer value of a cell, accepting integral floats such as `2.0`.
pub fn coerce_int(value: &str) -> Option<i64> {
    let value = value.trim();
    if let Ok(v) = value.parse::<i64>() {
        return Some(v);
    }
    let v = value.parse::<f64>().ok()?;
    // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound
    if v.is_finite() && v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
        Some(v as i64)
    } else {
        None
    }
}
