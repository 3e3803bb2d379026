use chrono::format::{Item, StrftimeItems};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt::Write;

/// Canonical on-disk date format.
pub const ISO_DATE: &str = "%Y-%m-%d";

const DATE_FORMATS: [&str; 3] = [ISO_DATE, "%d-%B-%Y", "%d/%m/%Y"];

const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Parse a date written by hand or by a spreadsheet tool.
///
/// Accepts `YYYY-MM-DD`, `DD-MonthName-YYYY`, `DD/MM/YYYY` and the
/// date-time forms spreadsheets emit (the time part is dropped).
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    parse_datetime(s).map(|dt| dt.date())
}

/// Like `parse_date`, keeping the time of date-time values.
/// Plain dates are taken at midnight.
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    for fmt in DATE_FORMATS.iter() {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d.and_time(NaiveTime::MIN));
        }
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

pub fn to_iso(d: &NaiveDate) -> String {
    d.format(ISO_DATE).to_string()
}

/// Format with a user supplied strftime pattern, falling back to ISO when the
/// pattern cannot be rendered for a date (chrono's `to_string` would panic).
pub fn format_date(d: &NaiveDate, fmt: &str) -> String {
    try_format(d, fmt).unwrap_or_else(|| to_iso(d))
}

/// True when `fmt` renders a plain date (no time or offset fields).
pub fn is_valid_format(fmt: &str) -> bool {
    NaiveDate::from_ymd_opt(2000, 1, 1).is_some_and(|d| try_format(&d, fmt).is_some())
}

fn try_format(d: &NaiveDate, fmt: &str) -> Option<String> {
    let items: Vec<Item<'_>> = StrftimeItems::new(fmt).collect();
    if items.iter().any(|i| matches!(i, Item::Error)) {
        return None;
    }

    let mut out = String::new();
    write!(out, "{}", d.format_with_items(items.into_iter())).ok()?;
    Some(out)
}
