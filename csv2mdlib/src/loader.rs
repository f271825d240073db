//! Reading delimited text into a [`Table`].
//!
//! Tokenizing (quoting, escapes, blank lines) is delegated to the `csv`
//! crate. The reader runs in flexible mode so that row-length checks happen
//! here and can report the offending line.

use std::io;

use csv::ReaderBuilder;

use crate::error::Csv2mdError;
use crate::table::Table;
use crate::Result;

/// Load a table from any reader.
///
/// The first record is the header; header names are trimmed. Fails with
/// [`Csv2mdError::EmptyInput`] when there are no data rows and with
/// [`Csv2mdError::RaggedRow`] when a row's length differs from the header's.
pub fn load_reader<R: io::Read>(reader: R, delimiter: u8) -> Result<Table> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        // whitespace-only lines tokenize as one blank field
        if record.len() == 1 && record[0].trim().is_empty() {
            continue;
        }
        if record.len() != headers.len() {
            return Err(Csv2mdError::RaggedRow {
                line: record.position().map(|p| p.line()).unwrap_or_default(),
                expected: headers.len(),
                found: record.len(),
            });
        }
        rows.push(record.iter().map(str::to_string).collect());
    }

    if rows.is_empty() {
        return Err(Csv2mdError::EmptyInput);
    }

    tracing::debug!(columns = headers.len(), rows = rows.len(), "loaded table");
    Table::new(headers, rows)
}

/// Load a table from an in-memory string.
pub fn load_str(input: &str, delimiter: u8) -> Result<Table> {
    load_reader(input.as_bytes(), delimiter)
}
