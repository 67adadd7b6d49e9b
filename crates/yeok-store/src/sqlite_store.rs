use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags, OptionalExtension, params};
use yeok_core::{Mapping, Store, StoreError, ValuePolicy};

use crate::errors::from_rusqlite;

pub(crate) const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS dictionary (
    word TEXT PRIMARY KEY,
    translation TEXT NOT NULL
)";

/// Updates in place so an existing word keeps its rowid, and with it its order
pub(crate) const UPSERT: &str = "INSERT INTO dictionary (word, translation) VALUES (?1, ?2)
    ON CONFLICT(word) DO UPDATE SET translation = excluded.translation";

/// Dictionary kept in a single SQLite table, one translation per word
#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create the database file and table if they are missing
    pub fn create(&self) -> Result<(), StoreError> {
        let conn = Connection::open(&self.path).map_err(from_rusqlite)?;
        conn.execute(CREATE_TABLE, []).map_err(from_rusqlite)?;
        Ok(())
    }

    /// Open an existing database without creating it
    pub(crate) fn connect_existing(&self) -> Result<Connection, StoreError> {
        if !self.path.exists() {
            return Err(StoreError::Unavailable(self.path.clone()));
        }

        Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(from_rusqlite)
    }

    fn has_table(conn: &Connection) -> Result<bool, StoreError> {
        conn.query_row(
            "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'dictionary'",
            [],
            |_| Ok(()),
        )
        .optional()
        .map(|row| row.is_some())
        .map_err(from_rusqlite)
    }
}

impl Store for SqliteStore {
    /// Fails with `Unavailable` when the database or its table is missing
    fn load(&self) -> Result<Mapping, StoreError> {
        let conn = self.connect_existing()?;
        if !Self::has_table(&conn)? {
            return Err(StoreError::Unavailable(self.path.clone()));
        }

        let mut stmt = conn
            .prepare("SELECT word, translation FROM dictionary ORDER BY rowid")
            .map_err(from_rusqlite)?;

        let rows = stmt
            .query_map([], |row| {
                let word: String = row.get(0)?;
                let translation: String = row.get(1)?;
                Ok((word, translation))
            })
            .map_err(from_rusqlite)?;

        let mut mapping = Mapping::new();
        for row in rows {
            let (word, translation) = row.map_err(from_rusqlite)?;
            mapping.insert(word, vec![translation]);
        }

        Ok(mapping)
    }

    /// Deletes every row and reinserts the mapping in one transaction
    fn save(&self, mapping: &Mapping) -> Result<(), StoreError> {
        let mut conn = Connection::open(&self.path).map_err(from_rusqlite)?;
        conn.execute(CREATE_TABLE, []).map_err(from_rusqlite)?;

        let tx = conn.transaction().map_err(from_rusqlite)?;
        tx.execute("DELETE FROM dictionary", [])
            .map_err(from_rusqlite)?;
        {
            let mut stmt = tx.prepare(UPSERT).map_err(from_rusqlite)?;
            for (word, translations) in mapping {
                let Some(translation) = translations.last() else {
                    continue;
                };
                if translations.len() > 1 {
                    tracing::warn!(
                        "'{}' has {} translations, keeping only the last",
                        word,
                        translations.len()
                    );
                }
                stmt.execute(params![word, translation])
                    .map_err(from_rusqlite)?;
            }
        }
        tx.commit().map_err(from_rusqlite)?;

        Ok(())
    }

    fn value_policy(&self) -> ValuePolicy {
        ValuePolicy::Single
    }

    fn location(&self) -> &Path {
        &self.path
    }
}
