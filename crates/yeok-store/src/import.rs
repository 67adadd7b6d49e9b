use std::path::Path;

use rusqlite::params;
use yeok_core::{Store, StoreError};

use crate::errors::{from_csv, from_rusqlite};
use crate::sqlite_store::{CREATE_TABLE, SqliteStore, UPSERT};

/// Merge a `word,translation` file into an existing SQLite dictionary
///
/// The first line is a header and is skipped. Rows replace any translation
/// already stored for the same word. Returns the number of rows imported.
pub fn import_csv(source: &Path, store: &SqliteStore) -> Result<usize, StoreError> {
    let mut conn = store.connect_existing()?;
    conn.execute(CREATE_TABLE, []).map_err(from_rusqlite)?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(source)
        .map_err(from_csv)?;

    let tx = conn.transaction().map_err(from_rusqlite)?;
    let mut imported = 0;
    {
        let mut stmt = tx.prepare(UPSERT).map_err(from_rusqlite)?;
        for (index, record) in reader.records().enumerate() {
            let record = record.map_err(from_csv)?;
            let (Some(word), Some(translation)) = (record.get(0), record.get(1)) else {
                // +2: one for the header, one for 1-based lines
                tracing::warn!(
                    "Skipping line {} of {}: expected two fields",
                    index + 2,
                    source.display()
                );
                continue;
            };

            stmt.execute(params![word, translation])
                .map_err(from_rusqlite)?;
            imported += 1;
        }
    }
    tx.commit().map_err(from_rusqlite)?;

    tracing::info!(
        "Imported {} rows from {} into {}",
        imported,
        source.display(),
        store.location().display()
    );
    Ok(imported)
}
