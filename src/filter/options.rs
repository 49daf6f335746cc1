/// Per-filter configuration, passed in explicitly instead of read from globals.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FilterOptions {
    /// Report DEBUG/INFO progress lines in addition to failures.
    pub verbose: bool,

    /// Data row used by index lookups that do not name one.
    pub default_index: usize,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            verbose: false,
            default_index: 1,
        }
    }
}

impl FilterOptions {
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_default_index(mut self, index: usize) -> Self {
        self.default_index = index;
        self
    }
}
