// src/export/logic.rs

use crate::core::query::query;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::TimelineExport;
use crate::export::xlsx::export_xlsx;
use crate::models::Table;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the query result for `search`.
    ///
    /// - `format`: csv | json | xlsx
    /// - `file`: absolute path of the output file
    /// - `search`: identity filter, same semantics as `list` and `chart`
    ///
    /// Returns the number of exported rows; an empty result writes nothing.
    pub fn export(
        table: &Table,
        format: ExportFormat,
        file: &str,
        search: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let rows = query(table, search)?;

        if rows.is_empty() {
            warning("No events found for the selected identity.");
            return Ok(0);
        }

        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Csv => {
                let flat: Vec<TimelineExport> = rows.iter().map(TimelineExport::from).collect();
                export_csv(&flat, &path)?
            }
            ExportFormat::Json => {
                let flat: Vec<TimelineExport> = rows.iter().map(TimelineExport::from).collect();
                export_json(&flat, &path)?
            }
            ExportFormat::Xlsx => export_xlsx(&rows, &path)?,
        }

        Ok(rows.len())
    }
}
