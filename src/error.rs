use crate::sink::Level;
use thiserror::Error;

/// Reasons a lookup produced nothing.
/// The soft-fail entry points report these to a sink instead of returning them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("Table is empty or not a two-dimensional block")]
    EmptyInput,

    #[error("Missing content to search for")]
    MissingFilterKey,

    #[error("Missing operand for '{mode}' filter")]
    MissingSecondaryFilter { mode: String },

    #[error("Content '{content}' not found in table")]
    NotFound { content: String },

    #[error("Invalid row index '{value}'")]
    InvalidIndex { value: String },

    #[error("Row index {index} out of range, table has {rows} data rows")]
    IndexOutOfRange { index: usize, rows: usize },

    #[error("Unknown filter mode '{mode}'")]
    UnknownMode { mode: String },
}

impl FilterError {
    /// Severity used when the error is reported to a sink.
    pub fn level(&self) -> Level {
        match self {
            FilterError::NotFound { .. } | FilterError::IndexOutOfRange { .. } => Level::Warn,
            _ => Level::Error,
        }
    }
}

/// Errors raised by tabular data sources.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Data source '{0}' produced no rows")]
    EmptySource(String),
}

/// Main error type for the crate.
/// Aggregates errors from the internal modules.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    WithContextError(String),

    #[error("{0}")]
    AnyhowError(#[from] anyhow::Error),

    #[error("{0}")]
    FilterError(#[from] FilterError),

    #[error("{0}")]
    ReferenceError(#[from] crate::table::reference::ReferenceError),

    #[error("{0}")]
    SourceError(#[from] SourceError),
}

pub trait ResultMessage {
    fn with_prefix(self, message: &str) -> Self;
}

impl<T> ResultMessage for Result<T, Error> {
    fn with_prefix(self, message: &str) -> Self {
        self.map_err(|e| Error::WithContextError(format!("{}: {}", message, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_levels() {
        assert_eq!(FilterError::EmptyInput.level(), Level::Error);
        assert_eq!(FilterError::NotFound { content: "x".into() }.level(), Level::Warn);
        assert_eq!(FilterError::IndexOutOfRange { index: 3, rows: 1 }.level(), Level::Warn);
    }

    #[test]
    fn error_with_prefix() {
        let result: Result<(), Error> = Err(FilterError::MissingFilterKey.into());
        let message = result.with_prefix("lookup 'pages'").unwrap_err().to_string();
        assert_eq!(message, "lookup 'pages': Missing content to search for");
    }
}
