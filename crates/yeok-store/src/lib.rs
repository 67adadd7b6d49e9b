pub mod csv_store;
pub mod errors;
pub mod import;
pub mod sqlite_store;

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use yeok_config::StoreKind;
use yeok_core::Store;

pub use csv_store::CsvStore;
pub use import::import_csv;
pub use sqlite_store::SqliteStore;

/// Build the store backing a dictionary file
pub fn open_store(kind: StoreKind, path: impl Into<PathBuf>) -> Box<dyn Store> {
    let path = path.into();
    tracing::debug!("Opening {:?} store at {}", kind, path.display());
    match kind {
        StoreKind::Csv => Box::new(CsvStore::new(path)),
        StoreKind::Sqlite => Box::new(SqliteStore::new(path)),
    }
}
