// src/export/excel_date.rs

use chrono::NaiveDate;

/// Excel number format matching the timeline's `%d-%B-%Y`.
pub(crate) const EXCEL_DATE_FORMAT: &str = "dd-mmmm-yyyy";

/// Seriale Excel di una data (sistema 1900, epoca 1899-12-30).
pub(crate) fn date_to_excel_serial(d: &NaiveDate) -> f64 {
    // from_ymd_opt(1899, 12, 30) is always valid
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap_or(NaiveDate::MIN);
    d.signed_duration_since(epoch).num_days() as f64
}
