/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";
pub const WHITE: &str = "\x1b[37m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Sync rate color:
/// 100% → green
/// otherwise → cyan
pub fn color_for_rate(rate: f64) -> &'static str {
    if rate >= 100.0 { GREEN } else { CYAN }
}

/// Greys out a value when nothing was entered for it.
///
/// Example:
/// `colorize_optional("")` → "<grey>--<reset>"
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}--{RESET}")
    } else {
        format!("{WHITE}{value}{RESET}")
    }
}
