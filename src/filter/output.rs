use crate::filter::query::Mode;
use indexmap::IndexMap;

/// Label → value pairs read off a table, in table order.
/// Re-inserting a label replaces its value and keeps its position.
pub type Mapping = IndexMap<String, String>;

/// Result of a lookup: the full mapping, or the keys/values surviving a
/// secondary filter.
#[derive(Clone, Debug, PartialEq)]
pub enum FilterOutput {
    Mapping(Mapping),
    List(Vec<String>),
}

impl FilterOutput {
    /// The benign default returned when a lookup fails in `mode`.
    pub fn empty(mode: Mode) -> Self {
        if mode.returns_list() {
            FilterOutput::List(Vec::new())
        } else {
            FilterOutput::Mapping(Mapping::new())
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            FilterOutput::Mapping(mapping) => mapping.is_empty(),
            FilterOutput::List(list) => list.is_empty(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            FilterOutput::Mapping(mapping) => mapping.len(),
            FilterOutput::List(list) => list.len(),
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            FilterOutput::Mapping(mapping) => Some(mapping),
            FilterOutput::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FilterOutput::Mapping(_) => None,
            FilterOutput::List(list) => Some(list),
        }
    }

    pub fn into_mapping(self) -> Option<Mapping> {
        match self {
            FilterOutput::Mapping(mapping) => Some(mapping),
            FilterOutput::List(_) => None,
        }
    }

    pub fn into_list(self) -> Option<Vec<String>> {
        match self {
            FilterOutput::Mapping(_) => None,
            FilterOutput::List(list) => Some(list),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_follows_mode() {
        assert_eq!(FilterOutput::empty(Mode::Mapping), FilterOutput::Mapping(Mapping::new()));
        assert_eq!(FilterOutput::empty(Mode::Index), FilterOutput::Mapping(Mapping::new()));
        assert_eq!(FilterOutput::empty(Mode::Value), FilterOutput::List(Vec::new()));
        assert_eq!(FilterOutput::empty(Mode::Key), FilterOutput::List(Vec::new()));
    }

    #[test]
    fn mapping_keeps_first_position() {
        let mut mapping = Mapping::new();
        mapping.insert("b".into(), "1".into());
        mapping.insert("a".into(), "2".into());
        mapping.insert("b".into(), "3".into());
        let pairs: Vec<_> = mapping.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        assert_eq!(pairs, vec![("b", "3"), ("a", "2")]);
    }
}
