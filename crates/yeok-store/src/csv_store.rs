use std::path::{Path, PathBuf};

use yeok_core::{Mapping, Store, StoreError, ValuePolicy};

use crate::errors::from_csv;

/// Dictionary kept as `word,translation` lines, one line per translation
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Store for CsvStore {
    /// A missing file reads as an empty dictionary
    fn load(&self) -> Result<Mapping, StoreError> {
        if !self.path.exists() {
            tracing::debug!(
                "No dictionary file at {}, starting empty",
                self.path.display()
            );
            return Ok(Mapping::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(&self.path)
            .map_err(from_csv)?;

        let mut mapping = Mapping::new();
        for (index, record) in reader.records().enumerate() {
            let record = record.map_err(from_csv)?;
            let (Some(word), Some(translation)) = (record.get(0), record.get(1)) else {
                tracing::warn!(
                    "Skipping row {} of {}: expected two fields",
                    index + 1,
                    self.path.display()
                );
                continue;
            };

            mapping
                .entry(word.to_string())
                .or_default()
                .push(translation.to_string());
        }

        Ok(mapping)
    }

    /// Rewrites the whole file
    fn save(&self, mapping: &Mapping) -> Result<(), StoreError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)
            .map_err(from_csv)?;

        for (word, translations) in mapping {
            for translation in translations {
                writer
                    .write_record([word.as_str(), translation.as_str()])
                    .map_err(from_csv)?;
            }
        }
        writer.flush()?;

        Ok(())
    }

    fn value_policy(&self) -> ValuePolicy {
        ValuePolicy::Multi
    }

    fn location(&self) -> &Path {
        &self.path
    }
}
