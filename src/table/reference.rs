use regex::Regex;
use std::fmt::Display;
use std::sync::OnceLock;
use thiserror::Error;

/// Errors related to Excel-style cell reference parsing.
#[derive(Error, Debug, PartialEq)]
pub enum ReferenceError {
    #[error("Invalid cell reference '{0}'")]
    Format(String),
}

/// 1-based coordinate of a cell, printed Excel-style (`A1`, `AB12`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CellReference {
    /// Row number (1-based)
    pub row: usize,
    /// Column number (1-based)
    pub column: usize,
}

impl CellReference {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

fn pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^([A-Z]+)([1-9]\d*)$").expect("Hardcode regex pattern"))
}

/// Converts column letters to a 1-based column number:
/// A = 1, ..., Z = 26, AA = 27, ..., AZ = 52, BA = 53.
pub(crate) fn column_number(letters: &str) -> Option<usize> {
    letters
        .chars()
        .map(|letter| letter as usize - 'A' as usize + 1)
        .try_fold(0usize, |number, digit| number.checked_mul(26)?.checked_add(digit))
        .filter(|number| *number > 0)
}

/// Converts a 1-based column number to column letters.
pub(crate) fn column_letters(column: usize) -> String {
    let mut column = column;
    let mut letters = String::new();
    while column > 0 {
        column -= 1;
        let digit = char::from_u32(65 + (column % 26) as u32).expect("Hardcode letters");
        column /= 26;
        letters.insert(0, digit);
    }
    letters
}

impl TryFrom<&str> for CellReference {
    type Error = ReferenceError;

    /// Parses an Excel-style reference such as `A1` or `ab12` (case-insensitive).
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let upper = value.trim().to_ascii_uppercase();
        let captures = pattern()
            .captures(upper.as_str())
            .ok_or_else(|| ReferenceError::Format(value.to_owned()))?;
        let column = captures
            .get(1)
            .and_then(|matcher| column_number(matcher.as_str()))
            .ok_or_else(|| ReferenceError::Format(value.to_owned()))?;
        let row = captures
            .get(2)
            .and_then(|matcher| matcher.as_str().parse::<usize>().ok())
            .ok_or_else(|| ReferenceError::Format(value.to_owned()))?;
        Ok(CellReference { row, column })
    }
}

impl Display for CellReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", column_letters(self.column), self.row)
    }
}
