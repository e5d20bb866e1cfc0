//! Interactive session state: current inputs, last result and the armed
//! alert, driven through `Idle -> Ready -> Locked`. Any input change brings
//! it back to `Idle` and cancels a pending alert.

use crate::core::calculator::{self, CalcOptions, CalculationInputs, CalculationResult};
use crate::core::display::{self, ClockAngles, Status};
use crate::core::scheduler::{self, AlertHandle, ArmSummary, Notifier};
use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Longest value accepted for a single field.
pub const MAX_FIELD_LEN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    CompletedHours,
    CompletedMinutes,
    LastEntryHours,
    LastEntryMinutes,
}

impl FromStr for Field {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "worked-h" | "completed-hours" | "ch" => Ok(Field::CompletedHours),
            "worked-m" | "completed-minutes" | "cm" => Ok(Field::CompletedMinutes),
            "in-h" | "last-entry-hours" | "lh" => Ok(Field::LastEntryHours),
            "in-m" | "last-entry-minutes" | "lm" => Ok(Field::LastEntryMinutes),
            other => Err(AppError::InvalidField(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotifState {
    #[default]
    Idle,
    Ready,
    Locked,
}

impl fmt::Display for NotifState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NotifState::Idle => "idle",
            NotifState::Ready => "ready",
            NotifState::Locked => "locked",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Default)]
pub struct Session {
    inputs: CalculationInputs,
    result: Option<CalculationResult>,
    state: NotifState,
    alert: Option<AlertHandle>,
    options: CalcOptions,
}

impl Session {
    pub fn new(options: CalcOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    pub fn state(&self) -> NotifState {
        self.state
    }

    pub fn inputs(&self) -> &CalculationInputs {
        &self.inputs
    }

    pub fn result(&self) -> Option<&CalculationResult> {
        self.result.as_ref()
    }

    pub fn has_pending_alert(&self) -> bool {
        self.alert.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Update one field. Returns false (and changes nothing) when the value
    /// is longer than [`MAX_FIELD_LEN`].
    pub fn set_field(&mut self, field: Field, value: &str) -> bool {
        if value.chars().count() > MAX_FIELD_LEN {
            return false;
        }

        let mut next = self.inputs.clone();
        let slot = match field {
            Field::CompletedHours => &mut next.completed_hours,
            Field::CompletedMinutes => &mut next.completed_minutes,
            Field::LastEntryHours => &mut next.last_entry_hours,
            Field::LastEntryMinutes => &mut next.last_entry_minutes,
        };
        *slot = value.to_string();
        self.inputs = next;

        if self.state != NotifState::Idle {
            self.reset();
        }
        true
    }

    /// Recompute the result. A pending alert belongs to the previous result
    /// and is cancelled.
    pub fn calculate(&mut self) -> &CalculationResult {
        if let Some(handle) = self.alert.take() {
            handle.cancel();
        }
        self.state = NotifState::Ready;
        self.result
            .insert(calculator::compute_with(&self.inputs, &self.options))
    }

    /// Arm the release alert for the current result.
    ///
    /// On error the session keeps its state, so the caller may retry after
    /// fixing the cause (except for a denied permission, which is final for
    /// that attempt).
    pub fn arm(
        &mut self,
        now: NaiveDateTime,
        offset_minutes: i64,
        notifier: Arc<dyn Notifier>,
    ) -> AppResult<ArmSummary> {
        let result = match (self.state, &self.result) {
            (NotifState::Idle, _) | (_, None) => return Err(AppError::NotCalculated),
            (NotifState::Locked, Some(r)) => {
                return Err(AppError::AlreadyArmed(r.formatted.clone()));
            }
            (NotifState::Ready, Some(r)) => r,
        };

        let (summary, handle) =
            scheduler::arm(result, now, offset_minutes, notifier)?.into_parts();

        // replacing a previous handle cancels it
        self.alert = handle;
        self.state = NotifState::Locked;

        Ok(summary)
    }

    /// Logged duration as a percentage of the baseline.
    pub fn sync_rate(&self) -> f64 {
        display::sync_rate(&self.inputs, self.options.baseline_hours)
    }

    pub fn status(&self) -> Status {
        Status::from_rate(self.sync_rate())
    }

    pub fn clock_angles(&self) -> ClockAngles {
        ClockAngles::from_result(self.result.as_ref())
    }

    /// Block until the pending alert fires. Returns false when nothing is armed.
    pub fn wait_alert(&mut self) -> bool {
        match self.alert.take() {
            Some(handle) => handle.wait(),
            None => false,
        }
    }

    fn reset(&mut self) {
        if let Some(handle) = self.alert.take() {
            handle.cancel();
        }
        self.result = None;
        self.state = NotifState::Idle;
    }
}
