//! The local record store: a CSV file holding every expense, oldest
//! first, behind a four-column header.

use crate::error::{Error, Result};
use crate::model::{Record, COLUMNS};
use anyhow::Context;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

/// On-disk CSV store, the single source of truth for viewing, reports
/// and export.
///
/// The file always begins with the `Date,Category,Amount,Description`
/// header, written once at first use and only rewritten by a full
/// `replace_all`. The store performs no locking: it assumes exclusive
/// access between its own reads and writes.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the data directory and the CSV file with its header row
    /// if they do not exist. Safe to call on every startup; an existing
    /// file is left untouched.
    pub fn init(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("unable to create data directory {}", parent.display()))?;
        }
        if !self.path.exists() {
            self.write_records(&[])?;
        }
        Ok(())
    }

    /// Appends one record to the store file.
    pub fn append(&self, record: &Record) -> Result<()> {
        if !self.path.exists() {
            return Err(Error::StoreMissing(self.path.clone()));
        }
        let file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .with_context(|| format!("unable to open {} for append", self.path.display()))?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer
            .serialize(record)
            .context("unable to append record")?;
        writer.flush().context("unable to flush the store file")?;
        Ok(())
    }

    /// Reads every record in file order, oldest first.
    pub fn read_all(&self) -> Result<Vec<Record>> {
        if !self.path.exists() {
            return Err(Error::StoreMissing(self.path.clone()));
        }
        let mut reader = csv::Reader::from_path(&self.path)
            .with_context(|| format!("unable to open {}", self.path.display()))?;
        let mut records = Vec::new();
        for result in reader.deserialize() {
            let record: Record =
                result.with_context(|| format!("malformed row in {}", self.path.display()))?;
            records.push(record);
        }
        Ok(records)
    }

    /// Truncates the file and rewrites header plus `records`, discarding
    /// all prior content. Only the pull-from-remote path uses this.
    pub fn replace_all(&self, records: &[Record]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("unable to create data directory {}", parent.display()))?;
        }
        self.write_records(records)
    }

    /// Writes header + records to a fresh file. The header is written
    /// explicitly so that an empty record set still produces it.
    fn write_records(&self, records: &[Record]) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)
            .with_context(|| format!("unable to create {}", self.path.display()))?;
        writer
            .write_record(COLUMNS)
            .context("unable to write the store header")?;
        for record in records {
            writer.serialize(record).context("unable to write record")?;
        }
        writer.flush().context("unable to flush the store file")?;
        Ok(())
    }
}
