//! Normalization of the raw (hours, minutes) pair into a clock reading.

use serde::{Deserialize, Serialize};

const MINUTES_PER_DAY: i64 = 24 * 60;

/// How the projected (hours, minutes) pair is brought back onto the clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Normalization {
    /// One borrow for negative minutes, then at most one ±24 on the hours.
    /// Exact for conventional inputs (hours 0-23, minutes 0-59), not a
    /// general modulo for anything outside those ranges.
    #[default]
    SingleStep,
    /// Full modulo-1440 reduction: the result is always a valid clock time.
    Modular,
}

impl Normalization {
    pub fn apply(self, hours: i64, minutes: i64) -> (i64, i64) {
        match self {
            Normalization::SingleStep => single_step(hours, minutes),
            Normalization::Modular => modular(hours, minutes),
        }
    }
}

fn single_step(mut hours: i64, mut minutes: i64) -> (i64, i64) {
    // borrow
    if minutes < 0 {
        hours = hours.saturating_sub(1);
        minutes += 60;
    }

    // day wrap, each direction applied at most once
    if hours < 0 {
        hours += 24;
    }
    if hours >= 24 {
        hours -= 24;
    }

    (hours, minutes)
}

fn modular(hours: i64, minutes: i64) -> (i64, i64) {
    let total = (hours % 24) * 60 + (minutes % MINUTES_PER_DAY);
    let total = total.rem_euclid(MINUTES_PER_DAY);
    (total / 60, total % 60)
}
