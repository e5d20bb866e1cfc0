use crate::db::log::{LogEntry, load_entries};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;

const OP_MAX_WIDTH: usize = 60;

static ANSI_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex")
});

pub fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

/// ANSI colour for each logged operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "arm" => Colour::Green,
        "notify" => Colour::Yellow,
        "cancel" => Colour::Red,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51), // orange
        _ => Colour::White,
    }
}

/// Cut `s` to `max` visible characters, marking the cut with "...".
fn truncate_visible(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
        out.push_str("...");
        out
    } else {
        s.to_string()
    }
}

/// Render a single log line, with only the operation word coloured.
pub fn format_entry(entry: &LogEntry, id_w: usize, date_w: usize, op_w: usize) -> String {
    let date = chrono::DateTime::parse_from_rfc3339(&entry.date)
        .map(|dt| dt.format("%FT%T%:z").to_string())
        .unwrap_or_else(|_| entry.date.clone());

    let op_target = if entry.target.is_empty() {
        entry.operation.clone()
    } else {
        format!("{} ({})", entry.operation, entry.target)
    };

    let visible = truncate_visible(&op_target, OP_MAX_WIDTH);
    let color = color_for_operation(&entry.operation);
    let recolored = match visible.split_once(' ') {
        Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
        None => color.paint(visible.as_str()).to_string(),
    };

    // padding is computed on the visible width
    let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&recolored).chars().count()));

    format!(
        "{:>id_w$}: {:<date_w$} | {}{} => {}",
        entry.id,
        date,
        recolored,
        padding,
        entry.message,
        id_w = id_w,
        date_w = date_w
    )
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool, operation: Option<&str>) -> AppResult<()> {
        let entries = load_entries(&pool.conn, operation)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let op_w = entries
            .iter()
            .map(|e| e.operation.len() + e.target.len() + 3)
            .max()
            .unwrap_or(10)
            .min(OP_MAX_WIDTH);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for entry in &entries {
            println!("{}", format_entry(entry, id_w, date_w, op_w));
        }

        Ok(())
    }
}
