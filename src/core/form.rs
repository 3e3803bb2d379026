//! Parse-and-validate step between the `add` command and the repository.

use crate::errors::{AppError, AppResult};
use crate::models::EventRecord;
use crate::utils::date::{parse_date, to_iso};
use chrono::NaiveDate;

/// Raw field values as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct RecordForm {
    pub sole: String,
    pub start: String,
    pub finish: String,
    pub event: String,
    pub key_point: String,
}

/// A record whose dates are known to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRecord {
    pub record: EventRecord,
    pub start: NaiveDate,
    pub finish: NaiveDate,
}

impl ValidatedRecord {
    pub fn is_milestone(&self) -> bool {
        self.start == self.finish
    }

    /// Start after finish. Accepted and drawn as a reversed bar.
    pub fn is_reversed(&self) -> bool {
        self.start > self.finish
    }
}

impl RecordForm {
    /// Check the dates and normalize them to ISO.
    ///
    /// Identity, label and key point are free text and may be empty:
    /// an empty identity is a group of its own.
    pub fn validate(&self) -> AppResult<ValidatedRecord> {
        let start = required_date("start", &self.start)?;
        let finish = required_date("finish", &self.finish)?;

        Ok(ValidatedRecord {
            record: EventRecord::new(
                &self.sole,
                &to_iso(&start),
                &to_iso(&finish),
                &self.event,
                &self.key_point,
            ),
            start,
            finish,
        })
    }
}

fn required_date(field: &'static str, raw: &str) -> AppResult<NaiveDate> {
    if raw.trim().is_empty() {
        return Err(AppError::Validation {
            field,
            message: "date is required".to_string(),
        });
    }

    parse_date(raw).ok_or_else(|| AppError::Validation {
        field,
        message: format!(
            "'{}' is not a date (use YYYY-MM-DD, DD-MonthName-YYYY or DD/MM/YYYY)",
            raw.trim()
        ),
    })
}
