use autosize::RowBounds;

/// Autosize-only configuration. Kept apart from [`crate::TextareaAttrs`] so
/// none of it ever reaches the element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AutosizeProps {
    /// Minimum rows. Takes precedence over `min_rows`.
    pub rows: Option<u32>,
    /// Alias for `rows`.
    pub min_rows: Option<u32>,
    pub max_rows: Option<u32>,
    /// Reuse the first style read for every later measurement.
    ///
    /// Unsafe when the textarea is restyled after mount: measurements keep
    /// using the stale style until the host clears the cache.
    pub use_cache_for_dom_measurements: bool,
}

impl AutosizeProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(mut self, rows: u32) -> Self {
        self.rows = Some(rows);
        self
    }

    pub fn min_rows(mut self, rows: u32) -> Self {
        self.min_rows = Some(rows);
        self
    }

    pub fn max_rows(mut self, rows: u32) -> Self {
        self.max_rows = Some(rows);
        self
    }

    pub fn cached(mut self) -> Self {
        self.use_cache_for_dom_measurements = true;
        self
    }

    /// Zero counts as unset, and `rows` wins over `min_rows`.
    pub fn row_bounds(&self) -> RowBounds {
        let positive = |rows: Option<u32>| rows.filter(|&n| n > 0);
        RowBounds {
            min_rows: positive(self.rows).or(positive(self.min_rows)),
            max_rows: positive(self.max_rows),
        }
    }
}
