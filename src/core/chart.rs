use crate::chart::{ChartOptions, TimelineChart};
use crate::config::Config;
use crate::core::query::query;
use crate::errors::{AppError, AppResult};
use crate::export::ensure_writable;
use crate::models::Table;
use crate::ui::messages::{info, success, warning};
use crate::utils::path::expand_tilde;
use clap::ValueEnum;
use std::fs;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ChartFormat {
    /// Raw Vega-Lite document
    Json,
    /// Standalone page rendered by vega-embed
    Html,
}

pub struct ChartLogic;

impl ChartLogic {
    /// Query, build the chart and write it to `file`.
    ///
    /// An empty result still produces a valid (empty) chart.
    pub fn write(
        table: &Table,
        cfg: &Config,
        search: &str,
        file: &str,
        format: ChartFormat,
        force: bool,
    ) -> AppResult<(PathBuf, usize)> {
        let path = expand_tilde(file);
        if path.as_os_str().is_empty() {
            return Err(AppError::Other("chart output path is empty".to_string()));
        }

        let rows = query(table, search)?;
        if rows.is_empty() {
            warning("No events match the search: the chart will be empty.");
        }

        let spec = TimelineChart::from_rows(&rows, &ChartOptions::from(cfg));
        let content = match format {
            ChartFormat::Json => spec.to_json()?,
            ChartFormat::Html => spec.to_html(&cfg.page_title)?,
        };

        ensure_writable(&path, force)?;
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        info(format!("Rendering {} event(s) to {}", rows.len(), path.display()));
        fs::write(&path, content)?;
        success(format!("Timeline chart written: {}", path.display()));

        Ok((path, rows.len()))
    }
}
