use chrono::{NaiveDate, NaiveDateTime};
use rclockout::core::calculator::{CalculationInputs, compute};
use rclockout::core::scheduler::{
    Alert, AlertHandle, AlertPlan, Armed, Notifier, Permission, arm, plan, resolve_target,
};
use rclockout::errors::{AppError, AppResult};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Notifier that remembers what it was asked to show.
struct Recorder {
    allowed: bool,
    alerts: Mutex<Vec<Alert>>,
}

impl Recorder {
    fn new(allowed: bool) -> Arc<Self> {
        Arc::new(Self {
            allowed,
            alerts: Mutex::new(Vec::new()),
        })
    }

    fn seen(&self) -> Vec<Alert> {
        self.alerts.lock().expect("lock").clone()
    }
}

impl Notifier for Recorder {
    fn request_permission(&self) -> Permission {
        if self.allowed {
            Permission::Granted
        } else {
            Permission::Denied
        }
    }

    fn notify(&self, alert: &Alert) -> AppResult<()> {
        self.alerts.lock().expect("lock").push(alert.clone());
        Ok(())
    }
}

fn at(day: u32, h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, day)
        .expect("valid date")
        .and_hms_opt(h, m, 0)
        .expect("valid time")
}

fn release_at_17_15() -> rclockout::core::calculator::CalculationResult {
    compute(&CalculationInputs::new("0", "0", "9", "15"))
}

#[test]
fn test_target_later_today_stays_today() {
    let t = resolve_target(at(19, 9, 0), 17, 15).expect("target");
    assert_eq!(t, at(19, 17, 15));
}

#[test]
fn test_target_already_passed_rolls_to_tomorrow() {
    let t = resolve_target(at(19, 18, 0), 17, 15).expect("target");
    assert_eq!(t, at(20, 17, 15));
}

#[test]
fn test_target_equal_to_now_is_not_rolled() {
    let t = resolve_target(at(19, 17, 15), 17, 15).expect("target");
    assert_eq!(t, at(19, 17, 15));
}

#[test]
fn test_target_out_of_range_values_overflow_like_a_clock() {
    // 25:00 is tomorrow 01:00
    let t = resolve_target(at(19, 9, 0), 25, 0).expect("target");
    assert_eq!(t, at(20, 1, 0));

    // 07:-39 is 06:21
    let t = resolve_target(at(19, 5, 0), 7, -39).expect("target");
    assert_eq!(t, at(19, 6, 21));
}

#[test]
fn test_target_unrepresentable_is_an_error() {
    let err = resolve_target(at(19, 9, 0), i64::MAX, 0).unwrap_err();
    assert!(matches!(err, AppError::InvalidTime(_)));
}

#[test]
fn test_plan_deferred_five_minutes_before() {
    let p = plan(&release_at_17_15(), at(19, 9, 0), chrono::Duration::minutes(5)).expect("plan");

    assert_eq!(
        p,
        AlertPlan::Deferred {
            target: at(19, 17, 15),
            notify_at: at(19, 17, 10),
            delay: Duration::from_secs((8 * 60 + 10) * 60),
        }
    );
}

#[test]
fn test_plan_immediate_inside_offset_window() {
    let p = plan(&release_at_17_15(), at(19, 17, 12), chrono::Duration::minutes(5)).expect("plan");
    assert_eq!(
        p,
        AlertPlan::Immediate {
            target: at(19, 17, 15)
        }
    );
}

#[test]
fn test_plan_zero_delay_fires_immediately() {
    let p = plan(&release_at_17_15(), at(19, 17, 10), chrono::Duration::minutes(5)).expect("plan");
    assert!(matches!(p, AlertPlan::Immediate { .. }));
}

#[test]
fn test_plan_after_release_targets_next_day() {
    let p = plan(&release_at_17_15(), at(19, 17, 20), chrono::Duration::minutes(5)).expect("plan");

    match p {
        AlertPlan::Deferred {
            target, notify_at, ..
        } => {
            assert_eq!(target, at(20, 17, 15));
            assert_eq!(notify_at, at(20, 17, 10));
        }
        other => panic!("expected a deferred plan, got {:?}", other),
    }
}

#[test]
fn test_arm_rejects_result_without_input() {
    let recorder = Recorder::new(true);
    let empty = compute(&CalculationInputs::default());

    let err = arm(&empty, at(19, 9, 0), 5, recorder.clone()).unwrap_err();

    assert!(matches!(err, AppError::NothingToSchedule));
    assert!(recorder.seen().is_empty());
}

#[test]
fn test_arm_denied_permission_is_final() {
    let recorder = Recorder::new(false);

    let err = arm(&release_at_17_15(), at(19, 17, 12), 5, recorder.clone()).unwrap_err();

    assert!(matches!(err, AppError::PermissionDenied));
    assert!(recorder.seen().is_empty());
}

#[test]
fn test_arm_inside_window_fires_now() {
    let recorder = Recorder::new(true);

    let armed = arm(&release_at_17_15(), at(19, 17, 12), 5, recorder.clone()).expect("arm");

    assert!(matches!(armed, Armed::Fired { .. }));
    assert_eq!(recorder.seen(), vec![Alert::imminent(5)]);
}

#[test]
fn test_arm_ahead_of_time_schedules_and_can_be_cancelled() {
    let recorder = Recorder::new(true);

    let armed = arm(&release_at_17_15(), at(19, 9, 0), 5, recorder.clone()).expect("arm");
    let (summary, handle) = armed.into_parts();

    assert_eq!(summary.target, at(19, 17, 15));
    assert_eq!(summary.notify_at, Some(at(19, 17, 10)));

    let handle = handle.expect("deferred alert has a handle");
    assert!(!handle.is_finished());
    assert!(!handle.cancel());
    assert!(recorder.seen().is_empty());
}

#[test]
fn test_handle_fires_once_after_delay() {
    let recorder = Recorder::new(true);

    let handle = AlertHandle::spawn(
        Duration::from_millis(50),
        Alert::upcoming(5),
        recorder.clone(),
    );

    assert!(handle.wait());
    assert_eq!(recorder.seen(), vec![Alert::upcoming(5)]);
}

#[test]
fn test_dropping_handle_cancels_alert() {
    let recorder = Recorder::new(true);

    let handle = AlertHandle::spawn(
        Duration::from_secs(30),
        Alert::upcoming(5),
        recorder.clone(),
    );
    drop(handle);

    std::thread::sleep(Duration::from_millis(50));
    assert!(recorder.seen().is_empty());
}
