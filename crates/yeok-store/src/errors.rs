//! Backend error conversions
//!
//! Maps csv and rusqlite failures onto the core `StoreError`

use yeok_core::StoreError;

pub fn from_rusqlite(err: rusqlite::Error) -> StoreError {
    StoreError::backend("sqlite", err)
}

pub fn from_csv(err: csv::Error) -> StoreError {
    if !err.is_io_error() {
        return StoreError::backend("csv", err);
    }
    match err.into_kind() {
        csv::ErrorKind::Io(io) => StoreError::Io(io),
        other => StoreError::backend("csv", format!("{other:?}")),
    }
}
