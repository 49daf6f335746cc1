//! # Tabular Filter
//!
//! Reads rows and columns of test-data tables back as label → value
//! mappings, for test scripts that keep their fixtures in spreadsheets.
//!
//! ## Features
//!
//! - **Content lookup**: locate a row or column by the exact content of one of its cells
//! - **Index lookup**: locate a data row by its number below the header
//! - **Secondary filters**: narrow a mapping to the labels holding a value, or the value of a label
//! - **Typed cells**: booleans, numbers, dates and times compare by their string form
//! - **Soft failures**: bad input is reported to a [`TextSink`] and yields an empty result
//! - **Caller-owned caching**: repeated lookups can be answered from a [`LookupCache`]
//!
//! ## Example
//!
//! ```rust
//! use tabular_filter::{filter, FilterOutput, Table};
//!
//! let table = Table::from_rows([
//!     vec!["PageName", "PageValidation"],
//!     vec!["Showcase", "Auto"],
//! ]);
//!
//! let output = filter(&table, "Showcase", true, "", "");
//! let mapping = output.into_mapping().unwrap();
//! assert_eq!(mapping["PageValidation"], "Auto");
//! ```
pub mod cache;
pub mod error;
pub mod filter;
pub mod sink;
pub mod source;
pub mod table;

pub use crate::cache::LookupCache;
pub use crate::error::{Error, FilterError, SourceError};
pub use crate::filter::{Axis, FilterOptions, FilterOutput, Lookup, Mapping, Mode, Narrow, Query, TabularFilter};
pub use crate::sink::{Level, MemorySink, TextSink, TracingSink};
pub use crate::source::{filter_source, load_table, lookup_source, InMemorySource, TabularDataSource};
pub use crate::table::{Cell, CellReference, Table};

/// Looks up `match_content` in `table` with default options, reporting
/// failures through `tracing`.
///
/// # Arguments
///
/// * `table` - The test-data table, header row first
/// * `match_content` - Content of the anchor cell; ignored in `index` mode
/// * `filter_by_row` - Read the anchor's row (true) or its column (false)
/// * `index_or_value` - Data row number in `index` mode, operand in `value`/`key` mode
/// * `mode` - `""`, `"index"`, `"value"` or `"key"`
///
/// # Returns
///
/// * `FilterOutput` - A mapping for `""`/`index`, a list for `value`/`key`;
///   empty when the lookup fails
pub fn filter(
    table: &Table,
    match_content: &str,
    filter_by_row: bool,
    index_or_value: &str,
    mode: &str,
) -> FilterOutput {
    TabularFilter::default().filter(table, match_content, filter_by_row, index_or_value, mode)
}
