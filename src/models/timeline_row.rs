use chrono::NaiveDate;

/// A record after the query pipeline: typed dates plus derived fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineRow {
    /// Index of the source row in the table (0-based).
    pub position: usize,
    pub sole: String,
    pub start: NaiveDate,
    pub finish: NaiveDate,
    pub event: String,
    pub key_point: String,
    pub is_milestone: bool,
    /// Latest finish among rows of the same identity in the filtered set.
    pub finish_max: NaiveDate,
}

impl TimelineRow {
    /// Start after finish: kept and drawn as a reversed bar.
    pub fn is_reversed(&self) -> bool {
        self.start > self.finish
    }
}
