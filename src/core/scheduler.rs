//! Release alert scheduling.
//!
//! Turns a calculated release time into a one-shot alert fired `offset`
//! before it: immediately when that moment has already passed, otherwise on
//! a worker thread owned by an [`AlertHandle`].

use crate::core::calculator::CalculationResult;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use chrono::{Duration, NaiveDateTime};
use std::sync::Arc;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};

pub const DEFAULT_OFFSET_MINUTES: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub body: String,
}

impl Alert {
    /// Release falls within the offset window (or is right now).
    pub fn imminent(offset_minutes: i64) -> Self {
        Self {
            title: "Release imminent".to_string(),
            body: format!(
                "Your shift completes in less than {} minutes. Wrap it up.",
                offset_minutes
            ),
        }
    }

    pub fn upcoming(offset_minutes: i64) -> Self {
        Self {
            title: "Release alert".to_string(),
            body: format!(
                "Your shift completes in {} minutes. Gear up.",
                offset_minutes
            ),
        }
    }
}

/// Something able to show an alert to the user.
pub trait Notifier: Send + Sync {
    fn request_permission(&self) -> Permission;
    fn notify(&self, alert: &Alert) -> AppResult<()>;
}

/// What to do for a given release time, as seen from `now`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertPlan {
    Immediate {
        target: NaiveDateTime,
    },
    Deferred {
        target: NaiveDateTime,
        notify_at: NaiveDateTime,
        delay: std::time::Duration,
    },
}

/// Today's wall-clock reading for `hours:minutes`, rolled to tomorrow when it
/// is already behind `now`. Out-of-range values overflow into the next
/// hour/day rather than being rejected.
pub fn resolve_target(now: NaiveDateTime, hours: i64, minutes: i64) -> AppResult<NaiveDateTime> {
    let unrepresentable = || AppError::InvalidTime(format!("{}:{}", hours, minutes));

    let midnight = now.date().and_time(chrono::NaiveTime::MIN);
    let offset = hours
        .checked_mul(60)
        .and_then(|h| h.checked_add(minutes))
        .and_then(Duration::try_minutes)
        .ok_or_else(unrepresentable)?;
    let target = midnight
        .checked_add_signed(offset)
        .ok_or_else(unrepresentable)?;

    if target < now {
        target
            .checked_add_signed(Duration::days(1))
            .ok_or_else(unrepresentable)
    } else {
        Ok(target)
    }
}

pub fn plan(
    result: &CalculationResult,
    now: NaiveDateTime,
    offset: Duration,
) -> AppResult<AlertPlan> {
    let target = resolve_target(now, result.hours, result.minutes)?;
    let notify_at = target
        .checked_sub_signed(offset)
        .ok_or_else(|| AppError::InvalidTime(result.formatted.clone()))?;

    let plan = match (notify_at - now).to_std() {
        Ok(delay) if !delay.is_zero() => AlertPlan::Deferred {
            target,
            notify_at,
            delay,
        },
        // negative or zero delay
        _ => AlertPlan::Immediate { target },
    };

    Ok(plan)
}

/// Outcome of a successful [`arm`].
#[derive(Debug)]
pub enum Armed {
    Fired { target: NaiveDateTime },
    Scheduled {
        target: NaiveDateTime,
        notify_at: NaiveDateTime,
        handle: AlertHandle,
    },
}

/// What was armed, without the handle. `notify_at` is `None` when the alert
/// fired right away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArmSummary {
    pub target: NaiveDateTime,
    pub notify_at: Option<NaiveDateTime>,
}

impl Armed {
    pub fn target(&self) -> NaiveDateTime {
        match self {
            Armed::Fired { target } | Armed::Scheduled { target, .. } => *target,
        }
    }

    pub fn into_parts(self) -> (ArmSummary, Option<AlertHandle>) {
        match self {
            Armed::Fired { target } => (
                ArmSummary {
                    target,
                    notify_at: None,
                },
                None,
            ),
            Armed::Scheduled {
                target,
                notify_at,
                handle,
            } => (
                ArmSummary {
                    target,
                    notify_at: Some(notify_at),
                },
                Some(handle),
            ),
        }
    }
}

/// Check the result, ask for permission, then fire or schedule.
///
/// A denied permission is final: the caller reports it, nothing is retried.
pub fn arm(
    result: &CalculationResult,
    now: NaiveDateTime,
    offset_minutes: i64,
    notifier: Arc<dyn Notifier>,
) -> AppResult<Armed> {
    if !result.is_valid {
        return Err(AppError::NothingToSchedule);
    }

    if notifier.request_permission() == Permission::Denied {
        return Err(AppError::PermissionDenied);
    }

    let offset = Duration::try_minutes(offset_minutes)
        .ok_or_else(|| AppError::Config(format!("invalid alert offset: {}", offset_minutes)))?;

    match plan(result, now, offset)? {
        AlertPlan::Immediate { target } => {
            notifier.notify(&Alert::imminent(offset_minutes))?;
            Ok(Armed::Fired { target })
        }
        AlertPlan::Deferred {
            target,
            notify_at,
            delay,
        } => {
            let handle = AlertHandle::spawn(delay, Alert::upcoming(offset_minutes), notifier);
            Ok(Armed::Scheduled {
                target,
                notify_at,
                handle,
            })
        }
    }
}

/// A pending one-shot alert. Cancelled on [`cancel`](Self::cancel) or drop.
#[derive(Debug)]
pub struct AlertHandle {
    cancel_tx: Option<Sender<()>>,
    worker: Option<JoinHandle<bool>>,
}

impl AlertHandle {
    pub fn spawn(delay: std::time::Duration, alert: Alert, notifier: Arc<dyn Notifier>) -> Self {
        let (cancel_tx, cancel_rx) = mpsc::channel::<()>();

        let worker = thread::spawn(move || match cancel_rx.recv_timeout(delay) {
            Err(RecvTimeoutError::Timeout) => {
                if let Err(e) = notifier.notify(&alert) {
                    messages::error(format!("Failed to deliver alert: {}", e));
                }
                true
            }
            // explicit cancel or handle dropped
            Ok(()) | Err(RecvTimeoutError::Disconnected) => false,
        });

        Self {
            cancel_tx: Some(cancel_tx),
            worker: Some(worker),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.worker.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Stop the alert. Returns true if it had already fired.
    pub fn cancel(mut self) -> bool {
        self.stop()
    }

    /// Block until the alert fires. Returns true if it fired.
    pub fn wait(mut self) -> bool {
        let fired = match self.worker.take() {
            Some(worker) => worker.join().unwrap_or(false),
            None => false,
        };
        self.cancel_tx = None;
        fired
    }

    fn stop(&mut self) -> bool {
        if let Some(tx) = self.cancel_tx.take() {
            // the worker may already be gone
            let _ = tx.send(());
        }
        match self.worker.take() {
            Some(worker) => worker.join().unwrap_or(false),
            None => false,
        }
    }
}

impl Drop for AlertHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
