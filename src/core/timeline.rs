//! Terminal rendering of the query result (the `list` command).

use crate::config::Config;
use crate::core::query::axis_order;
use crate::models::TimelineRow;
use crate::utils::colors::{RESET, color_for_identity};
use crate::utils::date::format_date;
use crate::utils::table::{Column, Table};

const MILESTONE_GLYPH: &str = "◆";
const REVERSED_GLYPH: &str = "↺";

/// Render rows as a table, in query order.
pub fn render_table(rows: &[TimelineRow], cfg: &Config) -> String {
    let mut table = Table::new(vec![
        Column::new("Sole"),
        Column::new("Start"),
        Column::new("Finish"),
        Column::new(" "),
        Column::new("Event"),
        Column::new("Key Point"),
    ]);

    for r in rows {
        let mark = if r.is_milestone {
            MILESTONE_GLYPH
        } else if r.is_reversed() {
            REVERSED_GLYPH
        } else {
            ""
        };

        table.add_row(vec![
            r.sole.clone(),
            format_date(&r.start, &cfg.date_format),
            format_date(&r.finish, &cfg.date_format),
            mark.to_string(),
            r.event.clone(),
            r.key_point.clone(),
        ]);
    }

    table.render(&cfg.separator_char)
}

/// One line per identity, top to bottom as on the chart axis.
pub fn render_axis_summary(rows: &[TimelineRow], cfg: &Config) -> String {
    let mut out = String::new();

    for (i, sole) in axis_order(rows).iter().enumerate() {
        let group: Vec<&TimelineRow> = rows.iter().filter(|r| &r.sole == sole).collect();
        let milestones = group.iter().filter(|r| r.is_milestone).count();
        let last = group
            .first()
            .map(|r| format_date(&r.finish_max, &cfg.date_format))
            .unwrap_or_default();
        let label = if sole.is_empty() { "(no identity)" } else { sole.as_str() };

        out.push_str(&format!(
            "{}■{} {:<20} events: {:>3}  milestones: {:>3}  last finish: {}\n",
            color_for_identity(i),
            RESET,
            label,
            group.len(),
            milestones,
            last
        ));
    }

    out
}
