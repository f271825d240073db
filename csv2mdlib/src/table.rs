//! The in-memory table shared by every pipeline stage.

use serde::{Deserialize, Serialize};

use crate::error::Csv2mdError;

/// Ordered column names plus rows of string cells.
///
/// Every row holds exactly one cell per column. [`Table::new`] and
/// deserialization check it; the mutators never change a row's length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTable")]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

/// Unchecked serde shape of [`Table`]
#[derive(Deserialize)]
struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TryFrom<RawTable> for Table {
    type Error = Csv2mdError;

    fn try_from(raw: RawTable) -> crate::Result<Self> {
        Table::new(raw.headers, raw.rows)
    }
}

impl Table {
    /// Build a table, rejecting rows whose length differs from the header.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> crate::Result<Self> {
        if let Some((idx, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != headers.len())
        {
            return Err(Csv2mdError::RaggedRow {
                // header occupies line 1
                line: idx as u64 + 2,
                expected: headers.len(),
                found: row.len(),
            });
        }
        Ok(Self { headers, rows })
    }

    /// Column names, in input order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows, positionally aligned to the headers
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Mutable cells of each row
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [String]> + '_ {
        self.rows.iter_mut().map(Vec::as_mut_slice)
    }

    /// Stable reorder of the rows by one key per row.
    ///
    /// `keys` must hold exactly [`row_count`](Self::row_count) entries.
    pub fn sort_rows_by_keys<K: Ord>(&mut self, keys: Vec<K>) {
        debug_assert_eq!(keys.len(), self.rows.len());
        let mut keyed: Vec<(K, Vec<String>)> =
            keys.into_iter().zip(self.rows.drain(..)).collect();
        keyed.sort_by(|a, b| a.0.cmp(&b.0));
        self.rows = keyed.into_iter().map(|(_, row)| row).collect();
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of the first column with the given name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cells of column `idx`, top to bottom. Panics if `idx` is not a column.
    pub fn column(&self, idx: usize) -> impl Iterator<Item = &str> + '_ {
        self.rows.iter().map(move |row| row[idx].as_str())
    }
}
