//! The full conversion pipeline: load, normalize, sort, render.

use std::io;

use crate::loader::load_reader;
use crate::normalize::normalize;
use crate::options::ConvertOptions;
use crate::output::render;
use crate::sort::{sort_rows, SortOutcome};
use crate::Result;

/// Output of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Rendered table, newline terminated
    pub output: String,
    /// Result of the sort step, `None` when sorting was disabled
    pub sort: Option<SortOutcome>,
}

/// Convert delimited text read from `reader` into the configured format.
///
/// Only loading can fail. A sort that cannot be applied is reported in
/// [`Conversion::sort`] and the rows keep their input order.
pub fn convert<R: io::Read>(reader: R, options: &ConvertOptions) -> Result<Conversion> {
    let mut table = load_reader(reader, options.delimiter)?;
    normalize(&mut table, options.precision);

    let keys = &options.sort_keys;
    let sort = options.sort.then(|| sort_rows(&mut table, keys));
    if let Some(outcome) = &sort {
        tracing::debug!(?outcome, "sort step finished");
    }

    let output = render(&table, options.format)?;
    Ok(Conversion { output, sort })
}

/// Convenience wrapper over [`convert`] for in-memory input.
pub fn convert_str(input: &str, options: &ConvertOptions) -> Result<Conversion> {
    convert(input.as_bytes(), options)
}
