use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ExportConfig {
    /// Spreadsheet target; derived from the dictionary path when unset
    pub path: Option<PathBuf>,
}
