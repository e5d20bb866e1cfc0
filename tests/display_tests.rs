use rclockout::core::calculator::{CalculationInputs, compute};
use rclockout::core::display::{ClockAngles, Status, sync_rate};

#[test]
fn test_sync_rate_is_share_of_baseline() {
    let half = CalculationInputs::new("4", "0", "", "");
    assert_eq!(sync_rate(&half, 8), 50.0);

    let quarter_past = CalculationInputs::new("2", "", "", "");
    assert_eq!(sync_rate(&quarter_past, 8), 25.0);
}

#[test]
fn test_sync_rate_is_clamped() {
    let over = CalculationInputs::new("9", "30", "", "");
    assert_eq!(sync_rate(&over, 8), 100.0);

    let negative = CalculationInputs::new("-2", "", "", "");
    assert_eq!(sync_rate(&negative, 8), 0.0);

    assert_eq!(sync_rate(&CalculationInputs::default(), 8), 0.0);
}

#[test]
fn test_status_follows_rate() {
    assert_eq!(Status::from_rate(99.9), Status::Sustained);
    assert_eq!(Status::from_rate(100.0), Status::Authorized);
}

#[test]
fn test_clock_angles_for_valid_result() {
    // 17:15 → hour hand at 5/12 of the dial plus a quarter of an hour step
    let r = compute(&CalculationInputs::new("0", "0", "9", "15"));
    let a = ClockAngles::from_result(Some(&r));

    assert!((a.hour - 157.5).abs() < 1e-9, "hour angle was {}", a.hour);
    assert!((a.minute - 90.0).abs() < 1e-9, "minute angle was {}", a.minute);
}

#[test]
fn test_clock_angles_rest_at_twelve_without_input() {
    let r = compute(&CalculationInputs::default());

    assert_eq!(ClockAngles::from_result(Some(&r)), ClockAngles::default());
    assert_eq!(ClockAngles::from_result(None), ClockAngles::default());
}
