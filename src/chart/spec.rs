//! Vega-Lite document model (the subset the timeline uses).

use serde::{Serialize, Serializer};

pub const VEGA_LITE_SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v5.json";

#[derive(Debug, Clone, Serialize)]
pub struct ChartSpec {
    #[serde(rename = "$schema")]
    pub schema: &'static str,
    pub description: String,
    pub width: Width,
    pub config: ChartConfig,
    pub data: InlineData,
    pub layer: Vec<Layer>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    Container,
    Pixels(u32),
}

impl Serialize for Width {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Width::Container => serializer.serialize_str("container"),
            Width::Pixels(px) => serializer.serialize_u32(*px),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartConfig {
    pub axis: AxisConfig,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisConfig {
    pub label_font_size: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct InlineData {
    pub values: Vec<Datum>,
}

/// One data row as seen by the chart; field names are the table's column names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Datum {
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
    #[serde(rename = "IsMilestone")]
    pub is_milestone: bool,
    #[serde(rename = "Finish_max")]
    pub finish_max: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Layer {
    pub mark: Mark,
    pub transform: Vec<Transform>,
    pub encoding: Encoding,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<Param>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkKind {
    Bar,
    Point,
}

#[derive(Debug, Clone, Serialize)]
pub struct Mark {
    #[serde(rename = "type")]
    pub kind: MarkKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Transform {
    pub filter: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Encoding {
    pub x: PositionChannel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x2: Option<SecondaryChannel>,
    pub y: PositionChannel,
    pub color: ColorChannel,
    pub tooltip: Vec<TooltipChannel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Temporal,
    Nominal,
}

#[derive(Debug, Clone, Serialize)]
pub struct PositionChannel {
    pub field: String,
    #[serde(rename = "type")]
    pub kind: FieldType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortField>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Axis {
    pub format: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SortField {
    pub field: String,
    pub op: String,
    pub order: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SecondaryChannel {
    pub field: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColorChannel {
    pub field: String,
    #[serde(rename = "type")]
    pub kind: FieldType,
    /// Serializes as `null`, which hides the legend.
    pub legend: (),
}

#[derive(Debug, Clone, Serialize)]
pub struct TooltipChannel {
    pub field: String,
    #[serde(rename = "type")]
    pub kind: FieldType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Selection parameter; an interval bound to scales gives pan and zoom.
#[derive(Debug, Clone, Serialize)]
pub struct Param {
    pub name: String,
    pub select: Selection,
    pub bind: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Selection {
    #[serde(rename = "type")]
    pub kind: String,
    pub encodings: Vec<String>,
}
