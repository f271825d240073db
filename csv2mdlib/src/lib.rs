//! # csv2mdlib
//!
//! Convert delimited tabular text (CSV, TSV, ...) into aligned Markdown tables.
//!
//! ## Overview
//!
//! A conversion is a single in-memory pass through four stages:
//!
//! - **Load**: parse the input with the `csv` crate; the first record is the
//!   header (names trimmed), every other record must match its length
//! - **Normalize**: probe each column as integer, float or text; integers are
//!   rendered canonically and floats are rounded to 3 decimal places
//! - **Sort** (optional): order rows ascending by the `S2` and `P2` columns
//!   when both hold integers only, otherwise keep the input order
//! - **Render**: pad every cell to its column width and emit a pipe table
//!
//! Loading is the only stage that can fail. An empty table is an error
//! ([`Csv2mdError::EmptyInput`]); a sort that cannot be applied is not, it is
//! reported through [`SortOutcome::Unsorted`].
//!
//! ## Example
//!
//! ```rust
//! use csv2mdlib::{convert_str, ConvertOptions, SortOutcome};
//!
//! let input = "S2,P2,Val\n2,1,x\n1,3,y\n1,1,z\n";
//! let result = convert_str(input, &ConvertOptions::new()).unwrap();
//!
//! assert_eq!(result.sort, Some(SortOutcome::Sorted));
//! assert_eq!(
//!     result.output,
//!     "| S2 | P2 | Val |\n\
//!      | -- | -- | --- |\n\
//!      | 1  | 1  | z   |\n\
//!      | 1  | 3  | y   |\n\
//!      | 2  | 1  | x   |\n"
//! );
//!
//! // Tab separated, unsorted
//! let options = ConvertOptions::new().delimiter(b'\t').sort(false);
//! let result = convert_str("name\tscore\nbob\t0.12345\n", &options).unwrap();
//! assert!(result.output.contains("| bob  | 0.123 |"));
//! ```

pub mod convert;
pub mod error;
pub mod loader;
pub mod normalize;
pub mod options;
pub mod output;
pub mod sort;
pub mod table;

pub use convert::{convert, convert_str, Conversion};
pub use error::{Csv2mdError, SortSkipped};
pub use loader::{load_reader, load_str};
pub use normalize::{normalize, ColumnKind};
pub use options::{parse_delimiter, ConvertOptions, OutputFormat, SortKeys};
pub use output::{render, MarkdownTable};
pub use sort::{sort_rows, SortOutcome};
pub use table::Table;

/// Result type for csv2mdlib operations
pub type Result<T> = std::result::Result<T, Csv2mdError>;
