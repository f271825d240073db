//! Error types for csv2mdlib

use thiserror::Error;

/// Errors that abort a conversion
#[derive(Error, Debug)]
pub enum Csv2mdError {
    /// The input has a header but no data rows (or nothing at all)
    #[error("No data found.")]
    EmptyInput,

    /// A data row does not have as many fields as the header
    #[error("line {line}: expected {expected} fields, found {found}")]
    RaggedRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    /// Delimiter is not a single ASCII character
    #[error("invalid delimiter '{0}': expected a single ASCII character")]
    InvalidDelimiter(String),

    /// Failed to tokenize the delimited input
    #[error("failed to parse input: {0}")]
    Csv(#[from] csv::Error),

    /// Failed to serialize the table as JSON
    #[error("failed to serialize table: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why the sort step was skipped.
///
/// This never aborts a conversion: it is carried in
/// [`SortOutcome::Unsorted`](crate::SortOutcome) and reported as a warning.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortSkipped {
    /// A sort key column is not in the header
    #[error("missing column '{0}'")]
    MissingColumn(String),

    /// A sort key value is not an integer
    #[error("column '{column}' has non-integer value '{value}' in row {row}")]
    NotInteger {
        column: String,
        /// 1-based data row number
        row: usize,
        value: String,
    },
}
