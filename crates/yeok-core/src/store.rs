use std::path::Path;

use crate::error::StoreError;
use crate::types::Mapping;

/// How many translations a store keeps per word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValuePolicy {
    /// Ordered list, new translations are appended
    Multi,
    /// One translation, new ones replace it
    Single,
}

/// Persistence backend for a dictionary
pub trait Store {
    /// Read the whole mapping
    fn load(&self) -> Result<Mapping, StoreError>;

    /// Replace the stored mapping with `mapping`
    fn save(&self, mapping: &Mapping) -> Result<(), StoreError>;

    fn value_policy(&self) -> ValuePolicy;

    /// File backing the store
    fn location(&self) -> &Path;
}
