use crate::store::ValuePolicy;
use crate::types::Mapping;

/// In-memory dictionary, the materialized contents of a store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    entries: Mapping,
    policy: ValuePolicy,
}

impl Dictionary {
    pub fn new(policy: ValuePolicy) -> Self {
        Self::from_mapping(Mapping::new(), policy)
    }

    pub fn from_mapping(entries: Mapping, policy: ValuePolicy) -> Self {
        Self { entries, policy }
    }

    pub fn policy(&self) -> ValuePolicy {
        self.policy
    }

    pub fn mapping(&self) -> &Mapping {
        &self.entries
    }

    /// Translations stored for an exact key
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Every key having `value` among its translations, in insertion order
    pub fn keys_for(&self, value: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, values)| values.iter().any(|v| v == value))
            .map(|(key, _)| key.as_str())
            .collect()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn contains_pair(&self, key: &str, value: &str) -> bool {
        self.get(key).is_some_and(|values| values.iter().any(|v| v == value))
    }

    /// Add translations for `key` following the dictionary's policy
    pub fn upsert(&mut self, key: &str, values: &[String]) {
        let Some(last) = values.last() else {
            return;
        };

        match self.policy() {
            ValuePolicy::Multi => self
                .entries
                .entry(key.to_string())
                .or_default()
                .extend(values.iter().cloned()),
            ValuePolicy::Single => {
                self.entries.insert(key.to_string(), vec![last.clone()]);
            }
        }
    }

    /// Remove one translation, dropping the key once it has none left
    pub fn remove(&mut self, key: &str, value: &str) -> bool {
        let Some(values) = self.entries.get_mut(key) else {
            return false;
        };
        let Some(pos) = values.iter().position(|v| v == value) else {
            return false;
        };

        values.remove(pos);
        if values.is_empty() {
            self.entries.shift_remove(key);
        }
        true
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(key, values)| (key.as_str(), values.as_slice()))
    }

    /// Flattened (key, value) pairs in insertion order
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().flat_map(|(key, values)| {
            values.iter().map(move |value| (key.as_str(), value.as_str()))
        })
    }
}
