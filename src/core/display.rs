//! Presentation derivations: progress against the baseline, analog clock
//! hand angles and the status label shown next to the release time.

use crate::core::calculator::{CalculationInputs, CalculationResult};
use serde::Serialize;
use std::fmt;

/// Logged duration as a percentage of the baseline, clamped to [0, 100].
pub fn sync_rate(inputs: &CalculationInputs, baseline_hours: i64) -> f64 {
    let target = baseline_hours.saturating_mul(60);
    if target <= 0 {
        return 100.0;
    }

    let done = inputs.completed_total_minutes() as f64;
    (done / target as f64 * 100.0).clamp(0.0, 100.0)
}

/// Hand angles in degrees, clockwise from 12.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ClockAngles {
    pub hour: f64,
    pub minute: f64,
}

impl ClockAngles {
    /// Both hands at 12 unless there is a valid result.
    pub fn from_result(result: Option<&CalculationResult>) -> Self {
        match result {
            Some(r) if r.is_valid => {
                let h = (r.hours % 12) as f64;
                let m = r.minutes as f64;
                Self {
                    hour: h / 12.0 * 360.0 + m / 60.0 * 30.0,
                    minute: m / 60.0 * 360.0,
                }
            }
            _ => Self::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    /// Baseline not reached yet.
    Sustained,
    /// Logged time covers the baseline.
    Authorized,
}

impl Status {
    pub fn from_rate(rate: f64) -> Self {
        if rate >= 100.0 {
            Status::Authorized
        } else {
            Status::Sustained
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Status::Sustained => "HOLD",
            Status::Authorized => "RELEASE_AUTH",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::Sustained => "Shift in progress",
            Status::Authorized => "Release authorized",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.label())
    }
}
