//! Formatting utilities used for CLI output.

use crate::utils::colors::{GREY, RESET, color_for_rate};

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// Duration in minutes as `02h 25m`, optionally signed.
pub fn mins2readable(mins: i64, want_sign: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 && want_sign {
        "-"
    } else {
        "" // zero → no sign
    };

    format!("{}{:02}h {:02}m", sign, hours, minutes)
}

/// Horizontal gauge for a percentage, e.g. `[██████░░░░]  60%`.
pub fn progress_bar(rate: f64, width: usize) -> String {
    let rate = rate.clamp(0.0, 100.0);
    let filled = ((rate / 100.0) * width as f64).round() as usize;
    let color = color_for_rate(rate);

    format!(
        "[{color}{}{RESET}{GREY}{}{RESET}] {:>3}%",
        "█".repeat(filled),
        "░".repeat(width - filled),
        rate.round() as i64
    )
}
