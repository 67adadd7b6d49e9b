use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Append-only log of the lookups made in this session
#[derive(Debug)]
pub struct History {
    records: Vec<String>,
    path: PathBuf,
}

impl History {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            records: Vec::new(),
            path: path.into(),
        }
    }

    pub fn record(&mut self, text: impl Into<String>) {
        self.records.push(text.into());
    }

    /// Record a lookup as `input: output`
    pub fn record_lookup(&mut self, input: &str, output: &str) {
        self.record(format!("{input}: {output}"));
    }

    pub fn records(&self) -> &[String] {
        &self.records
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the history file, one record per line
    pub fn flush(&self) -> std::io::Result<()> {
        let mut writer = BufWriter::new(File::create(&self.path)?);
        for record in &self.records {
            writeln!(writer, "{record}")?;
        }
        writer.flush()?;

        tracing::info!(
            "Wrote {} history records to {}",
            self.records.len(),
            self.path.display()
        );
        Ok(())
    }
}
