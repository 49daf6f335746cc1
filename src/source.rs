//! Tabular data sources.
//!
//! Spreadsheet and CSV loaders live outside this crate; they plug in by
//! implementing [`TabularDataSource`]. The in-crate implementations only hand
//! over tables that already live in memory.
use crate::error::{Error, ResultMessage, SourceError};
use crate::filter::{FilterOutput, Query, TabularFilter};
use crate::sink::Level;
use crate::table::Table;

/// Anything that can produce a [`Table`] on demand.
pub trait TabularDataSource {
    /// Name used in diagnostics (file name, sheet name, fixture name).
    fn name(&self) -> &str;

    /// Produces a fresh table.
    fn load(&self) -> anyhow::Result<Table>;
}

impl TabularDataSource for Table {
    fn name(&self) -> &str {
        "table"
    }

    fn load(&self) -> anyhow::Result<Table> {
        Ok(self.clone())
    }
}

/// A named table held in memory.
#[derive(Clone, Debug)]
pub struct InMemorySource {
    name: String,
    table: Table,
}

impl InMemorySource {
    pub fn new(name: impl Into<String>, table: Table) -> Self {
        Self {
            name: name.into(),
            table,
        }
    }
}

impl TabularDataSource for InMemorySource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> anyhow::Result<Table> {
        Ok(self.table.clone())
    }
}

/// Loads `source`, failing if it produced no cells.
pub fn load_table(source: &dyn TabularDataSource) -> Result<Table, Error> {
    let table = source
        .load()
        .map_err(Error::from)
        .with_prefix(&format!("Failed to load data source '{}'", source.name()))?;
    if table.is_empty() {
        return Err(SourceError::EmptySource(source.name().to_owned()).into());
    }
    Ok(table)
}

/// Loads `source` and runs `query`, returning load and lookup failures alike.
pub fn lookup_source(source: &dyn TabularDataSource, filter: &TabularFilter, query: &Query) -> Result<FilterOutput, Error> {
    let table = load_table(source)?;
    Ok(filter.run(&table, query)?)
}

/// Loads `source` and applies `query`, reporting load failures like lookup failures.
pub fn filter_source(source: &dyn TabularDataSource, filter: &TabularFilter, query: &Query) -> FilterOutput {
    match lookup_source(source, filter, query) {
        Ok(output) => output,
        Err(error) => {
            let level = match &error {
                Error::FilterError(error) => error.level(),
                _ => Level::Error,
            };
            filter.sink().write(level, &error.to_string());
            FilterOutput::empty(query.mode())
        }
    }
}
