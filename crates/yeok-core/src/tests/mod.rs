use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::error::StoreError;
use crate::store::{Store, ValuePolicy};
use crate::types::Mapping;


/// Store kept in memory; clones share the same contents
#[derive(Clone)]
pub(crate) struct MemoryStore {
    saved: Rc<RefCell<Option<Mapping>>>,
    fail_saves: Rc<Cell<bool>>,
    saves: Rc<Cell<usize>>,
    unreadable: bool,
    policy: ValuePolicy,
    path: PathBuf,
}

impl MemoryStore {
    pub(crate) fn new(policy: ValuePolicy) -> Self {
        Self {
            saved: Rc::new(RefCell::new(Some(Mapping::new()))),
            fail_saves: Rc::new(Cell::new(false)),
            saves: Rc::new(Cell::new(0)),
            unreadable: false,
            policy,
            path: PathBuf::from("memory"),
        }
    }

    /// Behaves like a store whose backing file does not exist yet
    pub(crate) fn missing(policy: ValuePolicy) -> Self {
        let store = Self::new(policy);
        store.saved.replace(None);
        store
    }

    /// Holds `entries` but fails every load, like a corrupt file
    pub(crate) fn unreadable(policy: ValuePolicy, entries: &[(&str, &[&str])]) -> Self {
        Self {
            unreadable: true,
            ..Self::with_entries(policy, entries)
        }
    }

    pub(crate) fn with_entries(policy: ValuePolicy, entries: &[(&str, &[&str])]) -> Self {
        let store = Self::new(policy);
        let mapping = entries
            .iter()
            .map(|(k, vs)| (k.to_string(), vs.iter().map(|v| v.to_string()).collect()))
            .collect();
        store.saved.replace(Some(mapping));
        store
    }

    pub(crate) fn saved(&self) -> Option<Mapping> {
        self.saved.borrow().clone()
    }

    pub(crate) fn save_count(&self) -> usize {
        self.saves.get()
    }

    pub(crate) fn fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }
}

impl Store for MemoryStore {
    fn load(&self) -> Result<Mapping, StoreError> {
        if self.unreadable {
            return Err(StoreError::backend("load", "invalid UTF-8 in record 3"));
        }
        self.saved
            .borrow()
            .clone()
            .ok_or_else(|| StoreError::Unavailable(self.path.clone()))
    }

    fn save(&self, mapping: &Mapping) -> Result<(), StoreError> {
        if self.fail_saves.get() {
            return Err(StoreError::Io(std::io::Error::other("disk full")));
        }
        self.saves.set(self.saves.get() + 1);
        self.saved.replace(Some(mapping.clone()));
        Ok(())
    }

    fn value_policy(&self) -> ValuePolicy {
        self.policy
    }

    fn location(&self) -> &Path {
        &self.path
    }
}

pub(crate) fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
