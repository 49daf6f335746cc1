//! # Filter Module
//!
//! Reads one row or column of a test-data table back as a label → value
//! mapping. The anchor cell is found by content (first exact match,
//! row-major) or by data row number; the anchor's line is then paired with
//! the header axis:
//!
//! ```text
//!   PageName    | PageValidation        filter "Showcase"            -> {PageValidation: Auto}
//!   Showcase    | Auto                  filter "PageValidation" (col) -> {Showcase: Auto}
//! ```
//!
//! Failures never reach the caller of [`TabularFilter::apply`] or
//! [`TabularFilter::filter`]: they are written to the configured sink and an
//! empty result is returned instead.
use crate::cache::LookupCache;
use crate::error::FilterError;
use crate::sink::{Level, TextSink, TracingSink};
use crate::table::{CellReference, Table};

pub mod options;
pub mod output;
pub mod query;

pub use options::FilterOptions;
pub use output::{FilterOutput, Mapping};
pub use query::{Axis, Lookup, Mode, Narrow, Query};

/// Looks up rows and columns of tables, reporting failures to a sink.
#[derive(Copy, Clone)]
pub struct TabularFilter<'a> {
    options: FilterOptions,
    sink: &'a dyn TextSink,
}

impl Default for TabularFilter<'static> {
    fn default() -> Self {
        Self::new(FilterOptions::default())
    }
}

impl TabularFilter<'static> {
    /// Creates a filter reporting through [`TracingSink`].
    pub fn new(options: FilterOptions) -> Self {
        Self {
            options,
            sink: &TracingSink,
        }
    }
}

impl<'a> TabularFilter<'a> {
    /// Replaces the sink diagnostics are written to.
    pub fn with_sink<'b>(self, sink: &'b dyn TextSink) -> TabularFilter<'b> {
        TabularFilter {
            options: self.options,
            sink,
        }
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn sink(&self) -> &'a dyn TextSink {
        self.sink
    }

    /// Runs `query` against `table`, returning the failure as an error.
    pub fn run(&self, table: &Table, query: &Query) -> Result<FilterOutput, FilterError> {
        if table.is_empty() {
            return Err(FilterError::EmptyInput);
        }

        // Index lookups always read a row.
        let axis = match query.lookup {
            Lookup::Index(_) => Axis::Row,
            Lookup::Content(_) => query.axis,
        };
        let anchor = locate(table, &query.lookup)?;
        self.debug(|| format!("Anchor for {:?} at {}", query.lookup, anchor));

        let selected = select(table, anchor, axis);
        self.debug(|| format!("Selected {} cells around {}", selected.len(), anchor));

        let mapping = pair(selected, axis);
        self.debug(|| format!("Mapping has {} entries", mapping.len()));

        Ok(match &query.narrow {
            None => FilterOutput::Mapping(mapping),
            Some(Narrow::Value(operand)) => FilterOutput::List(
                mapping
                    .into_iter()
                    .filter(|(_, value)| value == operand)
                    .map(|(label, _)| label)
                    .collect(),
            ),
            Some(Narrow::Key(operand)) => FilterOutput::List(
                mapping
                    .into_iter()
                    .filter(|(label, _)| label == operand)
                    .map(|(_, value)| value)
                    .collect(),
            ),
        })
    }

    /// Runs `query`, reporting any failure and returning the empty result.
    pub fn apply(&self, table: &Table, query: &Query) -> FilterOutput {
        self.run(table, query)
            .unwrap_or_else(|error| self.report(&error, query.mode()))
    }

    /// Like [`apply`](Self::apply), answering repeated lookups from `cache`.
    /// Failures are not cached.
    pub fn apply_cached(&self, table: &Table, query: &Query, cache: &mut LookupCache) -> FilterOutput {
        if let Some(output) = cache.get(table, query) {
            if self.options.verbose {
                self.sink.write(Level::Info, &format!("Cached result for {:?}", query.lookup));
            }
            return output.clone();
        }
        match self.run(table, query) {
            Ok(output) => {
                cache.insert(table, query.clone(), output.clone());
                output
            }
            Err(error) => self.report(&error, query.mode()),
        }
    }

    /// Loose entry point taking the arguments as plain strings.
    ///
    /// * `match_content` - content of the anchor cell, ignored in `index` mode
    /// * `filter_by_row` - read the anchor's row (true) or column (false)
    /// * `index_or_value` - data row number in `index` mode, operand in `value`/`key` mode
    /// * `mode` - one of `""`, `"index"`, `"value"`, `"key"`
    pub fn filter(
        &self,
        table: &Table,
        match_content: &str,
        filter_by_row: bool,
        index_or_value: &str,
        mode: &str,
    ) -> FilterOutput {
        let parsed_mode = Mode::parse(mode).unwrap_or_default();
        if table.is_empty() {
            return self.report(&FilterError::EmptyInput, parsed_mode);
        }
        let default_index = || {
            self.sink.write(
                Level::Warn,
                &format!("Missing row index, using {}", self.options.default_index),
            );
            self.options.default_index
        };
        match Query::parse(match_content, filter_by_row, index_or_value, mode, default_index) {
            Ok(query) => self.apply(table, &query),
            Err(error) => self.report(&error, parsed_mode),
        }
    }

    fn report(&self, error: &FilterError, mode: Mode) -> FilterOutput {
        self.sink.write(error.level(), &error.to_string());
        FilterOutput::empty(mode)
    }

    fn debug<F>(&self, message: F)
    where
        F: FnOnce() -> String,
    {
        if self.options.verbose {
            self.sink.write(Level::Debug, &message());
        }
    }
}

/// Finds the anchor cell. Index lookups anchor on the first cell of the row.
fn locate(table: &Table, lookup: &Lookup) -> Result<CellReference, FilterError> {
    match lookup {
        Lookup::Content(content) => table.find(content).ok_or_else(|| FilterError::NotFound {
            content: content.to_owned(),
        }),
        // Data rows start below the header, so index 0 names no data row.
        Lookup::Index(index) => match index.checked_add(1).filter(|_| *index > 0) {
            Some(row) if table.row(row).is_some() => Ok(CellReference::new(row, 1)),
            _ => Err(FilterError::IndexOutOfRange {
                index: *index,
                rows: table.row_count().saturating_sub(1),
            }),
        },
    }
}

/// Collects, row-major, the header axis and the anchor's line,
/// minus the corner cell and the anchor itself.
fn select(table: &Table, anchor: CellReference, axis: Axis) -> Vec<String> {
    let corner = CellReference::new(1, 1);
    table
        .cells()
        .filter(|(reference, _)| match axis {
            Axis::Row => reference.row == 1 || reference.row == anchor.row,
            Axis::Column => reference.column == 1 || reference.column == anchor.column,
        })
        .filter(|(reference, _)| *reference != corner && *reference != anchor)
        .map(|(_, cell)| cell.to_string())
        .collect()
}

/// Pairs selected values into a mapping.
///
/// Rows split the selection in two halves (labels first, values second);
/// columns alternate label and value. Unpaired leftovers are dropped.
fn pair(selected: Vec<String>, axis: Axis) -> Mapping {
    match axis {
        Axis::Row => {
            let mut values = selected;
            let labels: Vec<String> = values.drain(..values.len().div_ceil(2)).collect();
            labels.into_iter().zip(values).collect()
        }
        Axis::Column => selected
            .chunks_exact(2)
            .map(|chunk| (chunk[0].to_owned(), chunk[1].to_owned()))
            .collect(),
    }
}
