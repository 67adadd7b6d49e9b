use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_path() -> PathBuf {
    PathBuf::from("translation_history.txt")
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct HistoryConfig {
    /// File overwritten with the session history on quit
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}
