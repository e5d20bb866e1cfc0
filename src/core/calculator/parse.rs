//! Lenient integer parsing for the calculator input fields.

/// Parse the leading integer of `s`, the way a form field is usually read:
/// leading whitespace is skipped, one optional sign is accepted, then the
/// longest run of ASCII digits is taken and anything after it is ignored.
///
/// Returns 0 when no digit is found. Never fails; very long digit runs
/// saturate instead of overflowing.
///
/// ```
/// use rclockout::core::calculator::parse::parse_lenient;
///
/// assert_eq!(parse_lenient(" 7"), 7);
/// assert_eq!(parse_lenient("12ab"), 12);
/// assert_eq!(parse_lenient("ab"), 0);
/// assert_eq!(parse_lenient("-3"), -3);
/// ```
pub fn parse_lenient(s: &str) -> i64 {
    let s = s.trim_start();

    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, b| {
            acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
        });

    if negative { -value } else { value }
}
