//! Line-oriented diagnostics.
//!
//! The filter never raises to its caller; whatever went wrong is written to a
//! [`TextSink`] instead. [`TracingSink`] forwards to `tracing`, [`MemorySink`]
//! keeps the lines for later inspection, and any `Fn(Level, &str)` closure can
//! be used directly.
use std::cell::RefCell;
use std::fmt::Display;

/// Severity of a diagnostic line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Fatal,
    Error,
    Warn,
    Info,
    Debug,
}

impl Level {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Level::Fatal => "FATAL",
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receiver of diagnostic lines.
pub trait TextSink {
    fn write(&self, level: Level, message: &str);
}

impl<F> TextSink for F
where
    F: Fn(Level, &str),
{
    fn write(&self, level: Level, message: &str) {
        self(level, message)
    }
}

/// Forwards diagnostics to the `tracing` subscriber installed by the caller.
#[derive(Copy, Clone, Debug, Default)]
pub struct TracingSink;

impl TextSink for TracingSink {
    fn write(&self, level: Level, message: &str) {
        match level {
            Level::Fatal => tracing::error!(target: "tabular_filter", fatal = true, "{}", message),
            Level::Error => tracing::error!(target: "tabular_filter", "{}", message),
            Level::Warn => tracing::warn!(target: "tabular_filter", "{}", message),
            Level::Info => tracing::info!(target: "tabular_filter", "{}", message),
            Level::Debug => tracing::debug!(target: "tabular_filter", "{}", message),
        }
    }
}

/// Keeps every line in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: RefCell<Vec<(Level, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the lines written so far.
    pub fn lines(&self) -> Vec<(Level, String)> {
        self.lines.borrow().clone()
    }

    /// Lines written at exactly `level`.
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.lines
            .borrow()
            .iter()
            .filter(|(line_level, _)| *line_level == level)
            .map(|(_, message)| message.to_owned())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.lines.borrow_mut().clear()
    }
}

impl TextSink for MemorySink {
    fn write(&self, level: Level, message: &str) {
        self.lines.borrow_mut().push((level, message.to_owned()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names() {
        assert_eq!(Level::Debug.to_string(), "DEBUG");
        assert!(Level::Fatal < Level::Debug);
    }

    #[test]
    fn memory_sink_collects() {
        let sink = MemorySink::new();
        sink.write(Level::Warn, "first");
        sink.write(Level::Error, "second");
        sink.write(Level::Warn, "third");
        assert_eq!(sink.messages(Level::Warn), vec!["first", "third"]);
        assert_eq!(sink.lines().len(), 3);
        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn closure_sink() {
        let seen = RefCell::new(Vec::new());
        let sink = |level: Level, message: &str| seen.borrow_mut().push(format!("{level} {message}"));
        sink.write(Level::Info, "hello");
        assert_eq!(seen.into_inner(), vec!["INFO hello"]);
    }

    #[test]
    fn tracing_sink_without_subscriber() {
        TracingSink.write(Level::Fatal, "nobody listens");
    }
}
