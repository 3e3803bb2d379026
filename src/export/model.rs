// src/export/model.rs

use crate::models::TimelineRow;
use crate::utils::date::to_iso;
use serde::Serialize;

/// Flat export row: the stored columns plus the two derived ones.
#[derive(Serialize, Clone, Debug)]
pub struct TimelineExport {
    #[serde(rename = "Sole")]
    pub sole: String,
    #[serde(rename = "Start")]
    pub start: String,
    #[serde(rename = "Finish")]
    pub finish: String,
    #[serde(rename = "Event")]
    pub event: String,
    #[serde(rename = "Key Point")]
    pub key_point: String,
    #[serde(rename = "Milestone")]
    pub milestone: bool,
    #[serde(rename = "Identity Last Finish")]
    pub identity_last_finish: String,
}

impl From<&TimelineRow> for TimelineExport {
    fn from(r: &TimelineRow) -> Self {
        Self {
            sole: r.sole.clone(),
            start: to_iso(&r.start),
            finish: to_iso(&r.finish),
            event: r.event.clone(),
            key_point: r.key_point.clone(),
            milestone: r.is_milestone,
            identity_last_finish: to_iso(&r.finish_max),
        }
    }
}

/// Header per CSV / JSON / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "Sole",
        "Start",
        "Finish",
        "Event",
        "Key Point",
        "Milestone",
        "Identity Last Finish",
    ]
}
