use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::export::ExportConfig;
use self::history::HistoryConfig;

pub mod dictionary;
pub mod export;
pub mod history;

pub use self::dictionary::{StoreKind, TokenizerKind};

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub history: HistoryConfig,
    pub export: ExportConfig,

    /// Default tracing filter when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Emit JSON log lines instead of the human format
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: DictionaryConfig::default(),
            history: HistoryConfig::default(),
            export: ExportConfig::default(),
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl Config {
    /// Defaults with process environment overrides applied
    pub fn new() -> Self {
        let mut config = Config::default();
        config.apply_env(|key| env::var(key).ok());
        config
    }

    /// Load a JSON config file, then apply environment overrides
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::from_file(path)?;
        config.apply_env(|key| env::var(key).ok());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Override fields from `YEOK_*` variables supplied by `lookup`
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup("YEOK_DICTIONARY_PATH") {
            self.dictionary.path = PathBuf::from(path);
        }

        if let Some(store) = lookup("YEOK_STORE").as_deref().and_then(StoreKind::parse) {
            self.dictionary.store = store;
        }

        if let Some(tokenizer) = lookup("YEOK_TOKENIZER")
            .as_deref()
            .and_then(TokenizerKind::parse)
        {
            self.dictionary.tokenizer = Some(tokenizer);
        }

        if let Some(path) = lookup("YEOK_HISTORY_PATH") {
            self.history.path = PathBuf::from(path);
        }

        if let Some(path) = lookup("YEOK_EXPORT_PATH") {
            self.export.path = Some(PathBuf::from(path));
        }

        if let Some(level) = lookup("YEOK_LOG_LEVEL") {
            self.log_level = level;
        }

        if let Some(json) = lookup("YEOK_LOG_JSON") {
            self.log_json = matches!(json.trim(), "1" | "true" | "yes");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.dictionary.path, PathBuf::from("dictionary.csv"));
        assert_eq!(config.dictionary.store_for(&config.dictionary.path), StoreKind::Csv);
        assert_eq!(config.history.path, PathBuf::from("translation_history.txt"));
        assert!(config.export.path.is_none());
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "dictionary": {{ "path": "words.db" }}, "log_json": true }}"#).unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.dictionary.path, PathBuf::from("words.db"));
        assert_eq!(config.dictionary.store_for(&config.dictionary.path), StoreKind::Sqlite);
        assert_eq!(config.history.path, PathBuf::from("translation_history.txt"));
        assert!(config.log_json);
    }

    #[test]
    fn test_invalid_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = Config::from_file(Path::new("/nonexistent/yeok.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("YEOK_DICTIONARY_PATH", "ko-ru.data"),
            ("YEOK_STORE", "sqlite"),
            ("YEOK_TOKENIZER", "word"),
            ("YEOK_HISTORY_PATH", "hist.txt"),
            ("YEOK_LOG_LEVEL", "debug"),
        ]);

        let mut config = Config::default();
        config.apply_env(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.dictionary.path, PathBuf::from("ko-ru.data"));
        // Unknown extension falls back to the configured store
        assert_eq!(config.dictionary.store_for(&config.dictionary.path), StoreKind::Sqlite);
        assert_eq!(
            config.dictionary.tokenizer_for(StoreKind::Sqlite),
            TokenizerKind::Word
        );
        assert_eq!(config.history.path, PathBuf::from("hist.txt"));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_unknown_env_values_are_ignored() {
        let mut config = Config::default();
        config.apply_env(|key| match key {
            "YEOK_STORE" => Some("mongo".to_string()),
            "YEOK_TOKENIZER" => Some("bpe".to_string()),
            _ => None,
        });

        assert_eq!(config.dictionary.store, StoreKind::Csv);
        assert!(config.dictionary.tokenizer.is_none());
    }

    #[test]
    fn test_store_kind_inference() {
        assert_eq!(StoreKind::infer(Path::new("a.CSV")), Some(StoreKind::Csv));
        assert_eq!(StoreKind::infer(Path::new("a.sqlite3")), Some(StoreKind::Sqlite));
        assert_eq!(StoreKind::infer(Path::new("dictionary")), None);
    }

    #[test]
    fn test_default_tokenizer_per_store() {
        let config = DictionaryConfig::default();
        assert_eq!(config.tokenizer_for(StoreKind::Csv), TokenizerKind::Word);
        assert_eq!(
            config.tokenizer_for(StoreKind::Sqlite),
            TokenizerKind::Whitespace
        );
    }
}
