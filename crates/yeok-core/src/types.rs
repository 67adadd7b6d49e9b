use indexmap::IndexMap;

/// Placeholder returned by lookups that miss
pub const NOT_FOUND: &str = "Translation not found";

/// Word to translations, in insertion order
pub type Mapping = IndexMap<String, Vec<String>>;

/// Which side of the pair a lookup starts from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Source word to translations
    Forward,
    /// Translation back to source words
    Reverse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Word,
    Sentence,
}

/// Result of a mutation that targets an existing pair
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Applied,
    NotFound,
}

impl Change {
    pub fn is_applied(&self) -> bool {
        matches!(self, Change::Applied)
    }
}
