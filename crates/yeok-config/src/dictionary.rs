use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

fn default_path() -> PathBuf {
    PathBuf::from("dictionary.csv")
}

fn default_store() -> StoreKind {
    StoreKind::Csv
}

/// Backing store for a dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    /// Delimited text file, several translations per word
    Csv,
    /// Single-table SQLite database, one translation per word
    Sqlite,
}

impl StoreKind {
    /// Guess the store kind from a file extension
    pub fn infer(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" | "txt" => Some(StoreKind::Csv),
            "db" | "sqlite" | "sqlite3" => Some(StoreKind::Sqlite),
            _ => None,
        }
    }

    /// Tokenizer each store used before it became configurable
    pub fn default_tokenizer(&self) -> TokenizerKind {
        match self {
            StoreKind::Csv => TokenizerKind::Word,
            StoreKind::Sqlite => TokenizerKind::Whitespace,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "csv" => Some(StoreKind::Csv),
            "sqlite" | "db" => Some(StoreKind::Sqlite),
            _ => None,
        }
    }
}

/// How forward sentence lookups split their input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenizerKind {
    /// Runs of word characters, punctuation dropped
    Word,
    /// Plain whitespace split, punctuation kept on the token
    Whitespace,
}

impl TokenizerKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "word" => Some(TokenizerKind::Word),
            "whitespace" | "ws" => Some(TokenizerKind::Whitespace),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Dictionary file opened at startup
    #[serde(default = "default_path")]
    pub path: PathBuf,
    /// Store used when the extension does not tell
    #[serde(default = "default_store")]
    pub store: StoreKind,
    /// Overrides the store's default sentence tokenizer
    #[serde(default)]
    pub tokenizer: Option<TokenizerKind>,
}

impl DictionaryConfig {
    /// Store kind for `path`, falling back to the configured one
    pub fn store_for(&self, path: &Path) -> StoreKind {
        StoreKind::infer(path).unwrap_or(self.store)
    }

    /// Tokenizer for a given store, honoring the override
    pub fn tokenizer_for(&self, store: StoreKind) -> TokenizerKind {
        self.tokenizer.unwrap_or_else(|| store.default_tokenizer())
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            store: default_store(),
            tokenizer: None,
        }
    }
}
