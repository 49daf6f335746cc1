use crate::filter::{FilterOutput, Query};
use crate::table::Table;
use std::collections::HashMap;

/// Caller-owned memo of successful lookups, keyed by table fingerprint and query.
/// Each entry keeps the table it was computed from; a fingerprint collision
/// is treated as a miss.
#[derive(Debug, Default)]
pub struct LookupCache {
    entries: HashMap<(u64, Query), (Table, FilterOutput)>,
    hits: usize,
    misses: usize,
}

impl LookupCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the output stored for `table` and `query`, counting the hit or miss.
    pub fn get(&mut self, table: &Table, query: &Query) -> Option<&FilterOutput> {
        self.lookup(table.fingerprint(), table, query)
    }

    /// Stores `output`, replacing any entry under the same fingerprint and query.
    pub fn insert(&mut self, table: &Table, query: Query, output: FilterOutput) {
        self.store(table.fingerprint(), table, query, output)
    }

    fn lookup(&mut self, fingerprint: u64, table: &Table, query: &Query) -> Option<&FilterOutput> {
        match self.entries.get(&(fingerprint, query.clone())) {
            Some((cached, output)) if cached == table => {
                self.hits += 1;
                Some(output)
            }
            _ => {
                self.misses += 1;
                None
            }
        }
    }

    fn store(&mut self, fingerprint: u64, table: &Table, query: Query, output: FilterOutput) {
        self.entries.insert((fingerprint, query), (table.clone(), output));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }

    /// Drops every entry and resets the counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Mapping;

    fn pages() -> Table {
        Table::from_rows([vec!["PageName", "PageValidation"], vec!["Showcase", "Auto"]])
    }

    #[test]
    fn cache_counts() {
        let mut cache = LookupCache::new();
        let query = Query::content("Showcase");
        let other = Table::from_rows([vec!["PageName"]]);
        assert!(cache.get(&pages(), &query).is_none());
        cache.insert(&pages(), query.clone(), FilterOutput::Mapping(Mapping::new()));
        assert!(cache.get(&pages(), &query).is_some());
        assert!(cache.get(&other, &query).is_none());
        assert_eq!((cache.hits(), cache.misses(), cache.len()), (1, 2, 1));

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!((cache.hits(), cache.misses()), (0, 0));
    }

    #[test]
    fn cache_fingerprint_collision_misses() {
        let mut cache = LookupCache::new();
        let query = Query::content("Showcase");
        let stored = FilterOutput::List(vec!["Auto".into()]);
        cache.store(7, &pages(), query.clone(), stored.clone());

        let colliding = Table::from_rows([vec!["PageName", "PageValidation"], vec!["Showcase", "Manual"]]);
        assert!(cache.lookup(7, &colliding, &query).is_none());
        assert_eq!(cache.lookup(7, &pages(), &query), Some(&stored));
        assert_eq!((cache.hits(), cache.misses()), (1, 1));
    }
}
