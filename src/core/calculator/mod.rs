//! Release-time calculator.
//!
//! Projects the time still owed against the baseline quota forward from the
//! last entry time: `release = (baseline - worked) + last_entry`, brought back
//! onto a 24h clock.

pub mod normalize;
pub mod parse;

pub use normalize::Normalization;
pub use parse::parse_lenient;

use serde::{Deserialize, Serialize};

/// Default quota, in hours.
pub const DEFAULT_BASELINE_HOURS: i64 = 8;

/// Raw text of the four input fields. Empty string means "not entered".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationInputs {
    pub completed_hours: String,
    pub completed_minutes: String,
    pub last_entry_hours: String,
    pub last_entry_minutes: String,
}

impl CalculationInputs {
    pub fn new(
        completed_hours: impl Into<String>,
        completed_minutes: impl Into<String>,
        last_entry_hours: impl Into<String>,
        last_entry_minutes: impl Into<String>,
    ) -> Self {
        Self {
            completed_hours: completed_hours.into(),
            completed_minutes: completed_minutes.into(),
            last_entry_hours: last_entry_hours.into(),
            last_entry_minutes: last_entry_minutes.into(),
        }
    }

    /// True when at least one field was filled, whatever its content.
    pub fn any_entered(&self) -> bool {
        !self.completed_hours.is_empty()
            || !self.completed_minutes.is_empty()
            || !self.last_entry_hours.is_empty()
            || !self.last_entry_minutes.is_empty()
    }

    /// Logged duration in minutes, as read by the lenient parser.
    pub fn completed_total_minutes(&self) -> i64 {
        parse_lenient(&self.completed_hours)
            .saturating_mul(60)
            .saturating_add(parse_lenient(&self.completed_minutes))
    }
}

/// Outcome of a calculation. `formatted` is always `HH:MM`-shaped for
/// conventional inputs; `is_valid` only says whether anything was entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub hours: i64,
    pub minutes: i64,
    pub formatted: String,
    pub is_valid: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalcOptions {
    pub baseline_hours: i64,
    pub normalization: Normalization,
}

impl Default for CalcOptions {
    fn default() -> Self {
        Self {
            baseline_hours: DEFAULT_BASELINE_HOURS,
            normalization: Normalization::SingleStep,
        }
    }
}

/// Compute the release time with the default 8h baseline and single-step
/// normalization.
pub fn compute(inputs: &CalculationInputs) -> CalculationResult {
    compute_with(inputs, &CalcOptions::default())
}

pub fn compute_with(inputs: &CalculationInputs, opts: &CalcOptions) -> CalculationResult {
    let comp_h = parse_lenient(&inputs.completed_hours);
    let comp_m = parse_lenient(&inputs.completed_minutes);
    let last_h = parse_lenient(&inputs.last_entry_hours);
    let last_m = parse_lenient(&inputs.last_entry_minutes);

    // remaining against the baseline; minutes may be negative here
    let c_hrs = opts.baseline_hours.saturating_sub(comp_h);
    let c_mins = 0i64.saturating_sub(comp_m);

    let d_hrs = c_hrs.saturating_add(last_h);
    let d_mins = c_mins.saturating_add(last_m);

    let (hours, minutes) = opts.normalization.apply(d_hrs, d_mins);

    CalculationResult {
        hours,
        minutes,
        formatted: format!("{:02}:{:02}", hours, minutes),
        is_valid: inputs.any_entered(),
    }
}
