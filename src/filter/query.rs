use crate::error::FilterError;
use std::fmt::Display;

/// Which line of the table the anchor cell selects.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The anchor's row; labels come from the header row.
    #[default]
    Row,
    /// The anchor's column; labels come from the first column.
    Column,
}

impl Axis {
    pub fn from_filter_by_row(filter_by_row: bool) -> Self {
        if filter_by_row {
            Axis::Row
        } else {
            Axis::Column
        }
    }
}

/// How the anchor cell is located.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Lookup {
    /// First cell, row-major, whose string form equals the content.
    Content(String),
    /// Data row number; 1 is the first row below the header. 0 matches no row.
    Index(usize),
}

/// Secondary filter applied to the resulting mapping.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Narrow {
    /// Keep labels whose value equals the operand.
    Value(String),
    /// Keep values whose label equals the operand.
    Key(String),
}

/// Shape of the call, as named by the loose string contract.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// `""`: return the whole mapping.
    #[default]
    Mapping,
    /// `"index"`: locate by data row number.
    Index,
    /// `"value"`: return labels whose value matches.
    Value,
    /// `"key"`: return values whose label matches.
    Key,
}

impl Mode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Mode::Mapping => "",
            Mode::Index => "index",
            Mode::Value => "value",
            Mode::Key => "key",
        }
    }

    /// Parses a mode name (case-insensitive, blank means [`Mode::Mapping`]).
    pub fn parse(name: &str) -> Result<Self, FilterError> {
        match name.trim().to_ascii_uppercase().as_str() {
            "" => Ok(Mode::Mapping),
            "INDEX" => Ok(Mode::Index),
            "VALUE" => Ok(Mode::Value),
            "KEY" => Ok(Mode::Key),
            _ => Err(FilterError::UnknownMode {
                mode: name.to_owned(),
            }),
        }
    }

    /// True for modes that answer with a list instead of a mapping.
    pub const fn returns_list(&self) -> bool {
        matches!(self, Mode::Value | Mode::Key)
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated lookup against a table.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Query {
    pub lookup: Lookup,
    pub axis: Axis,
    pub narrow: Option<Narrow>,
}

impl Query {
    /// Locate the row holding `content`.
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            lookup: Lookup::Content(content.into()),
            axis: Axis::Row,
            narrow: None,
        }
    }

    /// Locate data row `index` (1-based, header excluded).
    pub fn index(index: usize) -> Self {
        Self {
            lookup: Lookup::Index(index),
            axis: Axis::Row,
            narrow: None,
        }
    }

    /// Select the anchor's column instead of its row.
    pub fn by_column(mut self) -> Self {
        self.axis = Axis::Column;
        self
    }

    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Return the labels whose value equals `value`.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.narrow = Some(Narrow::Value(value.into()));
        self
    }

    /// Return the values whose label equals `key`.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.narrow = Some(Narrow::Key(key.into()));
        self
    }

    /// The mode this query corresponds to in the loose contract.
    pub fn mode(&self) -> Mode {
        match (&self.narrow, &self.lookup) {
            (Some(Narrow::Value(_)), _) => Mode::Value,
            (Some(Narrow::Key(_)), _) => Mode::Key,
            (None, Lookup::Index(_)) => Mode::Index,
            (None, Lookup::Content(_)) => Mode::Mapping,
        }
    }

    /// Builds a query from the loose string contract.
    ///
    /// * `index` mode ignores `match_content` and `filter_by_row`; a blank
    ///   `index_or_value` is replaced by the result of `default_index`, which
    ///   is where callers report the substitution.
    /// * Every other mode needs `match_content`.
    /// * `value` and `key` modes need `index_or_value` as their operand.
    pub fn parse<F>(
        match_content: &str,
        filter_by_row: bool,
        index_or_value: &str,
        mode: &str,
        default_index: F,
    ) -> Result<Self, FilterError>
    where
        F: FnOnce() -> usize,
    {
        let mode = Mode::parse(mode)?;
        if mode == Mode::Index {
            let operand = index_or_value.trim();
            let index = if operand.is_empty() {
                default_index()
            } else {
                operand.parse::<usize>().map_err(|_| FilterError::InvalidIndex {
                    value: index_or_value.to_owned(),
                })?
            };
            return Ok(Query::index(index));
        }

        if match_content.is_empty() {
            return Err(FilterError::MissingFilterKey);
        }
        let query = Query::content(match_content).with_axis(Axis::from_filter_by_row(filter_by_row));
        match mode {
            Mode::Value | Mode::Key if index_or_value.is_empty() => Err(FilterError::MissingSecondaryFilter {
                mode: mode.as_str().to_owned(),
            }),
            Mode::Value => Ok(query.with_value(index_or_value)),
            Mode::Key => Ok(query.with_key(index_or_value)),
            _ => Ok(query),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_parse() {
        assert_eq!(Mode::parse(""), Ok(Mode::Mapping));
        assert_eq!(Mode::parse(" Index "), Ok(Mode::Index));
        assert_eq!(Mode::parse("VALUE"), Ok(Mode::Value));
        assert_eq!(Mode::parse("key"), Ok(Mode::Key));
        assert_eq!(
            Mode::parse("row"),
            Err(FilterError::UnknownMode { mode: "row".into() })
        );
    }

    #[test]
    fn parse_content() {
        let query = Query::parse("Showcase", true, "", "", || 1).unwrap();
        assert_eq!(query, Query::content("Showcase"));
        assert_eq!(query.mode(), Mode::Mapping);

        let query = Query::parse("PageValidation", false, "Auto", "value", || 1).unwrap();
        assert_eq!(query, Query::content("PageValidation").by_column().with_value("Auto"));
        assert_eq!(query.mode(), Mode::Value);
    }

    #[test]
    fn parse_content_ignores_operand_without_mode() {
        let query = Query::parse("Showcase", true, "Auto", "", || 1).unwrap();
        assert_eq!(query.narrow, None);
    }

    #[test]
    fn parse_index() {
        assert_eq!(Query::parse("ignored", false, "2", "index", || 1), Ok(Query::index(2)));
        assert_eq!(Query::parse("", true, "", "index", || 3), Ok(Query::index(3)));
        assert_eq!(
            Query::parse("", true, "-1", "index", || 1),
            Err(FilterError::InvalidIndex { value: "-1".into() })
        );
        assert_eq!(
            Query::parse("", true, "two", "index", || 1),
            Err(FilterError::InvalidIndex { value: "two".into() })
        );
    }

    #[test]
    fn parse_index_default_only_when_blank() {
        let mut defaulted = 0;
        let query = Query::parse("", true, " ", "index", || {
            defaulted += 1;
            4
        });
        assert_eq!(query, Ok(Query::index(4)));
        assert_eq!(defaulted, 1);

        let query = Query::parse("", true, "2", "index", || panic!("index was given"));
        assert_eq!(query, Ok(Query::index(2)));
    }

    #[test]
    fn parse_missing_arguments() {
        assert_eq!(Query::parse("", true, "", "", || 1), Err(FilterError::MissingFilterKey));
        assert_eq!(Query::parse("", true, "Auto", "value", || 1), Err(FilterError::MissingFilterKey));
        assert_eq!(
            Query::parse("PageName", true, "", "key", || 1),
            Err(FilterError::MissingSecondaryFilter { mode: "key".into() })
        );
    }
}
