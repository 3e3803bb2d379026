//! Unified application error type.
//! Every module (store, core, chart, cli) returns AppError so the binary has a
//! single place where failures are reported to the user.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Backing store
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Store file '{}' is malformed: {reason}", .path.display())]
    MalformedStore { path: PathBuf, reason: String },

    #[error("Row {row}: column '{column}' holds '{value}', which is not a valid date")]
    InvalidStoredDate {
        row: usize,
        column: &'static str,
        value: String,
    },

    // ---------------------------
    // Input form
    // ---------------------------
    #[error("Invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export / chart errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// True when the backing file exists but cannot be trusted; the binary
    /// prints recovery hints for these.
    pub fn is_store_corruption(&self) -> bool {
        matches!(self, AppError::MalformedStore { .. })
    }
}

pub type AppResult<T> = Result<T, AppError>;
