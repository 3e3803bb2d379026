//! Timeline renderer: enriched rows → one layered Vega-Lite chart.
//!
//! Two layers share the axes:
//! - bars for ranged events (`Start` → `Finish`),
//! - filled diamonds for milestones (start == finish).
//!
//! Both sort the identity axis by `Finish_max` ascending, so the identity
//! whose latest event ends first is drawn on top. Everything here is a pure
//! function of the rows; rendering is left to vega-embed.

pub mod html;
pub mod spec;

use crate::config::Config;
use crate::errors::AppResult;
use crate::models::TimelineRow;
use chrono::NaiveDate;
use spec::*;

/// Presentation knobs taken from the configuration.
#[derive(Debug, Clone)]
pub struct ChartOptions {
    pub date_format: String,
    pub width: Width,
    pub axis_label_font_size: u32,
    pub milestone_size: u32,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            date_format: "%d-%B-%Y".to_string(),
            width: Width::Container,
            axis_label_font_size: 12,
            milestone_size: 300,
        }
    }
}

impl From<&Config> for ChartOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            date_format: cfg.date_format.clone(),
            width: cfg.chart_width.map_or(Width::Container, Width::Pixels),
            axis_label_font_size: cfg.axis_label_font_size,
            milestone_size: cfg.milestone_size,
        }
    }
}

pub struct TimelineChart;

impl TimelineChart {
    pub fn from_rows(rows: &[TimelineRow], opts: &ChartOptions) -> ChartSpec {
        ChartSpec {
            schema: VEGA_LITE_SCHEMA,
            description: "Events per identity: bars for date ranges, diamonds for milestones"
                .to_string(),
            width: opts.width,
            config: ChartConfig {
                axis: AxisConfig {
                    label_font_size: opts.axis_label_font_size,
                },
            },
            data: InlineData {
                values: rows.iter().map(to_datum).collect(),
            },
            layer: vec![ranged_layer(opts), milestone_layer(opts)],
        }
    }
}

impl ChartSpec {
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_html(&self, title: &str) -> AppResult<String> {
        html::render_page(self, title)
    }
}

fn to_datum(r: &TimelineRow) -> Datum {
    Datum {
        sole: r.sole.clone(),
        start: chart_date(&r.start),
        finish: chart_date(&r.finish),
        event: r.event.clone(),
        key_point: r.key_point.clone(),
        is_milestone: r.is_milestone,
        finish_max: chart_date(&r.finish_max),
    }
}

/// Local midnight. A bare `YYYY-MM-DD` is read as UTC by the browser and can
/// shift a day once formatted in local time.
fn chart_date(d: &NaiveDate) -> String {
    d.format("%Y-%m-%dT00:00:00").to_string()
}

fn ranged_layer(opts: &ChartOptions) -> Layer {
    Layer {
        mark: Mark {
            kind: MarkKind::Bar,
            shape: None,
            filled: None,
            size: None,
        },
        transform: vec![Transform {
            filter: "datum.IsMilestone == false".to_string(),
        }],
        encoding: Encoding {
            x: PositionChannel {
                field: "Start".to_string(),
                kind: FieldType::Temporal,
                title: Some("Time".to_string()),
                axis: Some(Axis {
                    format: opts.date_format.clone(),
                }),
                sort: None,
            },
            x2: Some(SecondaryChannel {
                field: "Finish".to_string(),
            }),
            y: identity_axis(Some("Identity")),
            color: identity_color(),
            tooltip: vec![
                tooltip("Sole", FieldType::Nominal, None, None),
                tooltip("Start", FieldType::Temporal, Some(opts), None),
                tooltip("Finish", FieldType::Temporal, Some(opts), None),
                tooltip("Event", FieldType::Nominal, None, None),
                tooltip("Key Point", FieldType::Nominal, None, None),
            ],
        },
        params: vec![Param {
            name: "pan_zoom".to_string(),
            select: Selection {
                kind: "interval".to_string(),
                encodings: vec!["x".to_string(), "y".to_string()],
            },
            bind: "scales".to_string(),
        }],
    }
}

fn milestone_layer(opts: &ChartOptions) -> Layer {
    Layer {
        mark: Mark {
            kind: MarkKind::Point,
            shape: Some("diamond".to_string()),
            filled: Some(true),
            size: Some(opts.milestone_size),
        },
        transform: vec![Transform {
            filter: "datum.IsMilestone == true".to_string(),
        }],
        encoding: Encoding {
            x: PositionChannel {
                field: "Start".to_string(),
                kind: FieldType::Temporal,
                title: None,
                axis: Some(Axis {
                    format: opts.date_format.clone(),
                }),
                sort: None,
            },
            x2: None,
            y: identity_axis(None),
            color: identity_color(),
            tooltip: vec![
                tooltip("Sole", FieldType::Nominal, None, None),
                tooltip("Start", FieldType::Temporal, Some(opts), Some("On")),
                tooltip("Event", FieldType::Nominal, None, None),
                tooltip("Key Point", FieldType::Nominal, None, None),
            ],
        },
        params: Vec::new(),
    }
}

fn identity_axis(title: Option<&str>) -> PositionChannel {
    PositionChannel {
        field: "Sole".to_string(),
        kind: FieldType::Nominal,
        title: title.map(str::to_string),
        axis: None,
        sort: Some(SortField {
            field: "Finish_max".to_string(),
            op: "max".to_string(),
            order: "ascending".to_string(),
        }),
    }
}

fn identity_color() -> ColorChannel {
    ColorChannel {
        field: "Sole".to_string(),
        kind: FieldType::Nominal,
        legend: (),
    }
}

fn tooltip(
    field: &str,
    kind: FieldType,
    dated: Option<&ChartOptions>,
    title: Option<&str>,
) -> TooltipChannel {
    TooltipChannel {
        field: field.to_string(),
        kind,
        format: dated.map(|o| o.date_format.clone()),
        title: title.map(str::to_string),
    }
}
