use serde::{Deserialize, Serialize};

/// Header of the backing file, in order.
pub const COLUMNS: [&str; 5] = ["Sole", "Start", "Finish", "Event", "Key Point"];

/// One row of the backing table, kept as text exactly as persisted.
///
/// Dates are only interpreted by the query pipeline, so rows edited by hand
/// survive a load/save cycle untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(rename = "Sole")]
    pub sole: String, // ⇔ identity, grouping key (empty string is a group too)
    #[serde(rename = "Start")]
    pub start: String,
    #[serde(rename = "Finish")]
    pub finish: String,
    #[serde(rename = "Event")]
    pub event: String,
    #[serde(rename = "Key Point")]
    pub key_point: String,
}

impl EventRecord {
    pub fn new(sole: &str, start: &str, finish: &str, event: &str, key_point: &str) -> Self {
        Self {
            sole: sole.to_string(),
            start: start.to_string(),
            finish: finish.to_string(),
            event: event.to_string(),
            key_point: key_point.to_string(),
        }
    }
}

/// Ordered collection of records; position is insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<EventRecord>,
}

impl Table {
    pub fn new(rows: Vec<EventRecord>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[EventRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// New table equal to `self` with `record` as the last row.
    /// No dedup and no validation: the form validates before calling this.
    pub fn appended(&self, record: EventRecord) -> Table {
        let mut rows = Vec::with_capacity(self.rows.len() + 1);
        rows.extend(self.rows.iter().cloned());
        rows.push(record);
        Table { rows }
    }
}
