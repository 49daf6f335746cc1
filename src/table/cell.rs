use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::NaiveTime;
use chrono::Timelike;
use std::fmt::Display;

/// A single value of a test-data table.
///
/// Loaders hand cells over already typed; the filter only ever compares their
/// string form, so every variant has a stable `Display`.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Cell {
    #[default]
    Empty,
    /// Boolean values (true/false)
    Bool(bool),
    /// Integral numbers
    Int(i64),
    /// Floating point numbers
    Float(f64),
    /// Text values
    String(String),
    /// Date and time without offset
    DateTime(NaiveDateTime),
    /// Date without time component
    Date(NaiveDate),
    /// Time without date component
    Time(NaiveTime),
}

impl Cell {
    /// Compares the string form of the cell with `text`.
    /// String cells are compared in place, other kinds are rendered first.
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Cell::String(value) => value == text,
            Cell::Empty => text.is_empty(),
            _ => self.to_string() == text,
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Bool(value) => write!(f, "{}", value),
            Cell::Int(value) => write!(f, "{}", value),
            Cell::Float(value) => write!(f, "{}", to_number_string(*value)),
            Cell::String(value) => write!(f, "{}", value),
            Cell::DateTime(value) => {
                write!(f, "{} {}", value.date().format("%Y-%m-%d"), to_time_string(&value.time()))
            }
            Cell::Date(value) => write!(f, "{}", value.format("%Y-%m-%d")),
            Cell::Time(value) => write!(f, "{}", to_time_string(value)),
        }
    }
}

/// Integral floats print without a fraction, spreadsheets store `3` as `3.0`.
fn to_number_string(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Formats a time as `HH:MM:SS`, appending milliseconds only when present.
fn to_time_string(time: &NaiveTime) -> String {
    let milliseconds = time.nanosecond() / 1_000_000;
    if milliseconds > 0 {
        format!("{}.{milliseconds:03}", time.format("%H:%M:%S"))
    } else {
        time.format("%H:%M:%S").to_string()
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::String(value.to_owned())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::String(value)
    }
}

impl From<&String> for Cell {
    fn from(value: &String) -> Self {
        Cell::String(value.to_owned())
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Cell::Bool(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Int(value)
    }
}

impl From<i32> for Cell {
    fn from(value: i32) -> Self {
        Cell::Int(value as i64)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Float(value)
    }
}

impl From<NaiveDateTime> for Cell {
    fn from(value: NaiveDateTime) -> Self {
        Cell::DateTime(value)
    }
}

impl From<NaiveDate> for Cell {
    fn from(value: NaiveDate) -> Self {
        Cell::Date(value)
    }
}

impl From<NaiveTime> for Cell {
    fn from(value: NaiveTime) -> Self {
        Cell::Time(value)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}
