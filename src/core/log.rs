use crate::errors::AppResult;
use crate::store::audit::{AuditEntry, read_log};
use ansi_term::Colour;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

const OP_TARGET_MAX: usize = 60;

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI escape pattern"));

fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

/// Restituisce il colore ANSI in base all'operazione
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "reset" => Colour::Red,
        "chart" => Colour::Cyan,
        "export" => Colour::Yellow,
        "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51), // arancione
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(store: &Path) -> AppResult<()> {
        let entries = read_log(store)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        println!("📜 Internal log:\n");
        for line in format_entries(&entries) {
            println!("{line}");
        }

        Ok(())
    }
}

/// One printable line per entry: `n: date | op (target) => message`.
pub fn format_entries(entries: &[AuditEntry]) -> Vec<String> {
    let id_w = entries.len().to_string().len();
    let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(0);
    let op_w = entries
        .iter()
        .map(|e| op_target(e).chars().count())
        .max()
        .unwrap_or(10)
        .min(OP_TARGET_MAX);

    entries
        .iter()
        .enumerate()
        .map(|(i, e)| {
            let color = color_for_operation(&e.operation);
            let visible = truncate(&op_target(e), OP_TARGET_MAX);

            // only the operation word is colored
            let colored = match visible.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                None => color.paint(visible.as_str()).to_string(),
            };

            // padding computed on the text without ANSI codes
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

            format!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                i + 1,
                e.date,
                colored,
                padding,
                e.message,
            )
        })
        .collect()
}

fn op_target(e: &AuditEntry) -> String {
    if e.target.is_empty() {
        e.operation.clone()
    } else {
        format!("{} ({})", e.operation, e.target)
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let mut t: String = s.chars().take(max - 3).collect();
        t.push_str("...");
        t
    } else {
        s.to_string()
    }
}
