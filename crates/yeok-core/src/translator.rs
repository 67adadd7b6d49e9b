use crate::dictionary::Dictionary;
use crate::error::StoreError;
use crate::language::{Tokenizer, WhitespaceTokenizer};
use crate::store::Store;
use crate::types::{Change, NOT_FOUND};

/// Lookup engine over a store-backed dictionary
///
/// Every mutation is applied to a copy of the dictionary and committed only
/// after the store accepted it, so memory never runs ahead of disk.
pub struct Translator {
    store: Box<dyn Store>,
    tokenizer: Box<dyn Tokenizer>,
    dictionary: Dictionary,
}

impl Translator {
    /// Load `store`, starting empty only when it does not exist yet
    ///
    /// Any other load failure is returned, so an unreadable store is never
    /// overwritten by a later save.
    pub fn open(store: Box<dyn Store>, tokenizer: Box<dyn Tokenizer>) -> Result<Self, StoreError> {
        let policy = store.value_policy();
        let dictionary = match store.load() {
            Ok(mapping) => {
                tracing::info!(
                    "Loaded {} words from {}",
                    mapping.len(),
                    store.location().display()
                );
                Dictionary::from_mapping(mapping, policy)
            }
            Err(e) if e.is_unavailable() => {
                tracing::warn!("{}, starting with empty dictionary", e);
                Dictionary::new(policy)
            }
            Err(e) => {
                tracing::error!(
                    "Failed to load dictionary from {}: {}",
                    store.location().display(),
                    e
                );
                return Err(e);
            }
        };

        Ok(Self {
            store,
            tokenizer,
            dictionary,
        })
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn store(&self) -> &dyn Store {
        self.store.as_ref()
    }

    pub fn lookup_forward(&self, key: &str) -> Vec<String> {
        match self.dictionary.get(key) {
            Some(values) => values.to_vec(),
            None => vec![NOT_FOUND.to_string()],
        }
    }

    pub fn lookup_reverse(&self, value: &str) -> Vec<String> {
        let keys = self.dictionary.keys_for(value);
        if keys.is_empty() {
            return vec![NOT_FOUND.to_string()];
        }
        keys.into_iter().map(str::to_string).collect()
    }

    pub fn lookup_sentence_forward(&self, text: &str) -> String {
        let tokens = self.tokenizer.tokenize(text);
        tracing::debug!("Tokenized into {} tokens", tokens.len());

        tokens
            .iter()
            .flat_map(|token| self.lookup_forward(&token.surface))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn lookup_sentence_reverse(&self, text: &str) -> String {
        WhitespaceTokenizer
            .tokenize(text)
            .iter()
            .flat_map(|token| self.lookup_reverse(&token.surface))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn exists(&self, key: &str) -> bool {
        self.dictionary.contains_key(key)
    }

    /// Append (or replace, for single-value stores) translations of `key`
    pub fn upsert(&mut self, key: &str, values: &[String]) -> Result<(), StoreError> {
        if values.is_empty() {
            tracing::debug!("No translations supplied for '{}', nothing to save", key);
            return Ok(());
        }

        self.commit(|dict| dict.upsert(key, values))
    }

    pub fn delete(&mut self, key: &str, value: &str) -> Result<Change, StoreError> {
        if !self.dictionary.contains_pair(key, value) {
            return Ok(Change::NotFound);
        }

        self.commit(|dict| {
            dict.remove(key, value);
        })?;
        Ok(Change::Applied)
    }

    /// Swap `old` for `new` among the translations of `key`
    pub fn update(&mut self, key: &str, old: &str, new: &str) -> Result<Change, StoreError> {
        if !self.dictionary.contains_pair(key, old) {
            return Ok(Change::NotFound);
        }

        self.commit(|dict| {
            dict.remove(key, old);
            dict.upsert(key, &[new.to_string()]);
        })?;
        Ok(Change::Applied)
    }

    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.commit(Dictionary::clear)
    }

    fn commit(&mut self, mutate: impl FnOnce(&mut Dictionary)) -> Result<(), StoreError> {
        let mut staged = self.dictionary.clone();
        mutate(&mut staged);

        self.store.save(staged.mapping())?;
        tracing::debug!(
            "Saved {} words to {}",
            staged.len(),
            self.store.location().display()
        );

        self.dictionary = staged;
        Ok(())
    }
}
