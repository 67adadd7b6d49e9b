use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store does not exist: {}", .0.display())]
    Unavailable(PathBuf),

    #[error("Backend error during {op}: {message}")]
    Backend { op: &'static str, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    pub fn backend(op: &'static str, err: impl std::fmt::Display) -> Self {
        StoreError::Backend {
            op,
            message: err.to_string(),
        }
    }

    /// Missing backing file or table, as opposed to a failed read or write
    pub fn is_unavailable(&self) -> bool {
        matches!(self, StoreError::Unavailable(_))
    }
}
