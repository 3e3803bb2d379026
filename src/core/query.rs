//! Filter → sort → classify → group max → join.

use crate::errors::{AppError, AppResult};
use crate::models::{EventRecord, Table, TimelineRow};
use crate::utils::date::parse_datetime;
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::{HashMap, HashSet};

/// Case-insensitive literal substring match on the identity.
pub fn matches_identity(sole: &str, search: &str) -> bool {
    sole.to_lowercase().contains(&search.to_lowercase())
}

/// Rows whose identity matches `search`, with their table position.
pub fn filter<'a>(table: &'a Table, search: &str) -> Vec<(usize, &'a EventRecord)> {
    table
        .rows()
        .iter()
        .enumerate()
        .filter(|(_, r)| matches_identity(&r.sole, search))
        .collect()
}

/// Display-ready rows for `search`.
///
/// Output length equals `filter(table, search).len()`. Rows are ordered by
/// finish; equal finishes keep table order. Milestones compare the full
/// stored value, so two times on the same day are a bar, not a milestone.
pub fn query(table: &Table, search: &str) -> AppResult<Vec<TimelineRow>> {
    let mut parsed: Vec<(usize, &EventRecord, NaiveDateTime, NaiveDateTime)> = Vec::new();
    for (pos, rec) in filter(table, search) {
        let start = stored_date(pos, "Start", &rec.start)?;
        let finish = stored_date(pos, "Finish", &rec.finish)?;
        parsed.push((pos, rec, start, finish));
    }

    // sort_by_key is stable
    parsed.sort_by_key(|&(_, _, _, finish)| finish);

    let mut finish_max: HashMap<&str, NaiveDateTime> = HashMap::new();
    for &(_, rec, _, finish) in &parsed {
        finish_max
            .entry(rec.sole.as_str())
            .and_modify(|m| *m = (*m).max(finish))
            .or_insert(finish);
    }

    let rows = parsed
        .iter()
        .map(|&(position, rec, start, finish)| TimelineRow {
            position,
            sole: rec.sole.clone(),
            start: start.date(),
            finish: finish.date(),
            event: rec.event.clone(),
            key_point: rec.key_point.clone(),
            is_milestone: start == finish,
            finish_max: finish_max
                .get(rec.sole.as_str())
                .copied()
                .unwrap_or(finish)
                .date(),
        })
        .collect();

    Ok(rows)
}

/// Distinct identities, earliest `finish_max` first; ties keep first appearance.
pub fn axis_order(rows: &[TimelineRow]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut order: Vec<(&str, NaiveDate)> = Vec::new();

    for r in rows {
        if seen.insert(r.sole.as_str()) {
            order.push((r.sole.as_str(), r.finish_max));
        }
    }

    order.sort_by_key(|&(_, max)| max);
    order.into_iter().map(|(s, _)| s.to_string()).collect()
}

fn stored_date(position: usize, column: &'static str, value: &str) -> AppResult<NaiveDateTime> {
    parse_datetime(value).ok_or_else(|| AppError::InvalidStoredDate {
        row: position + 1,
        column,
        value: value.to_string(),
    })
}
