//! Backing store for the event table: a workbook (`.xlsx`, first worksheet)
//! or a CSV file, both with the same fixed header row.

pub mod audit;
mod csv_file;
mod xlsx;

use crate::errors::{AppError, AppResult};
use crate::models::{COLUMNS, Table};
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk layout, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreFormat {
    Xlsx,
    Csv,
}

impl StoreFormat {
    /// `.xlsx` (any case) is a workbook; every other path is CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("xlsx") => StoreFormat::Xlsx,
            _ => StoreFormat::Csv,
        }
    }
}

/// The single table file holding all records between runs.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
    format: StoreFormat,
}

impl RecordStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let format = StoreFormat::from_path(&path);
        Self { path, format }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> StoreFormat {
        self.format
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read the whole table.
    ///
    /// A missing file is created with the canonical header and an empty table
    /// is returned. Anything else that goes wrong is reported, never repaired.
    pub fn load(&self) -> AppResult<Table> {
        if !self.path.exists() {
            let table = Table::default();
            self.save(&table)?;
            return Ok(table);
        }

        match self.format {
            StoreFormat::Xlsx => xlsx::read(&self.path),
            StoreFormat::Csv => csv_file::read(&self.path),
        }
    }

    /// Overwrite the file with the full table, header included.
    pub fn save(&self, table: &Table) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        match self.format {
            StoreFormat::Xlsx => xlsx::write(&self.path, table),
            StoreFormat::Csv => csv_file::write(&self.path, table),
        }
    }
}

/// The header row must be exactly `COLUMNS`, in order.
fn check_header(path: &Path, found: &[&str]) -> AppResult<()> {
    if found != COLUMNS {
        return Err(malformed(
            path,
            format!(
                "expected header '{}', found '{}'",
                COLUMNS.join(","),
                found.join(",")
            ),
        ));
    }
    Ok(())
}

fn malformed(path: &Path, reason: String) -> AppError {
    AppError::MalformedStore {
        path: path.to_path_buf(),
        reason,
    }
}
