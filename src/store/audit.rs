//! Internal audit log: one CSV line per mutating operation, next to the store.

use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::utils::path::audit_log_for;
use chrono::Local;
use std::fs::{self, OpenOptions};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Append an audit line for an operation on the store at `store`.
pub fn ttlog(store: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let path = audit_log_for(store);
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    // Timestamp locale, formattato in ISO 8601
    let now = Local::now().to_rfc3339();

    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    wtr.write_record([now.as_str(), operation, target, message])?;
    wtr.flush()?;

    Ok(())
}

/// Same as [`ttlog`], but a failure only prints a warning.
pub fn ttlog_quiet(store: &Path, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(store, operation, target, message) {
        warning(format!("Failed to write internal log: {}", e));
    }
}

/// Read every audit entry, oldest first. A missing log is empty.
pub fn read_log(store: &Path) -> AppResult<Vec<AuditEntry>> {
    let path = audit_log_for(store);
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(&path)?;

    let mut entries = Vec::new();
    for result in rdr.records() {
        let rec = result?;
        let field = |i: usize| rec.get(i).unwrap_or("").to_string();
        entries.push(AuditEntry {
            date: field(0),
            operation: field(1),
            target: field(2),
            message: field(3),
        });
    }

    Ok(entries)
}
