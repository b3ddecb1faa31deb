//! Date, time and datetime text parsing

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Calendar date that bare clock values (`1:23.456`) are anchored on
pub fn clock_anchor() -> NaiveDate {
    NaiveDate::default()
}

/// Parse a date, datetime or bare clock value.
///
/// Date-only values resolve to midnight; clock values to [`clock_anchor`].
/// Returns `None` for blank or unrecognized text.
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, DATE_FORMAT) {
        return Some(date.and_time(NaiveTime::default()));
    }

    parse_clock(s).map(|t| clock_anchor().and_time(t))
}

/// Parse `H:MM:SS[.f]` or `M:SS[.f]` clock text
pub fn parse_clock(s: &str) -> Option<NaiveTime> {
    let parts: Vec<&str> = s.split(':').collect();
    let (hours, minutes, seconds) = match parts.as_slice() {
        [h, m, s] => (parse_digits(h)?, parse_digits(m)?, *s),
        [m, s] => (0, parse_digits(m)?, *s),
        _ => return None,
    };
    if minutes > 59 {
        return None;
    }

    let (whole, fraction) = match seconds.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (seconds, ""),
    };
    let secs = parse_digits(whole)?;
    let nanos = parse_fraction(fraction)?;

    NaiveTime::from_hms_nano_opt(hours, minutes, secs, nanos)
}

fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || s.len() > 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Fractional seconds as nanoseconds; at most nine digits
fn parse_fraction(s: &str) -> Option<u32> {
    if s.is_empty() {
        return Some(0);
    }
    if s.len() > 9 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let digits: u32 = s.parse().ok()?;
    Some(digits * 10u32.pow(9 - s.len() as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32, s: u32, milli: u32) -> NaiveTime {
        NaiveTime::from_hms_milli_opt(h, m, s, milli).unwrap()
    }

    #[test]
    fn test_lap_time() {
        assert_eq!(parse_clock("1:23.456"), Some(time(0, 1, 23, 456)));
        assert_eq!(
            parse_datetime("1:23.456"),
            Some(clock_anchor().and_time(time(0, 1, 23, 456)))
        );
    }

    #[test]
    fn test_time_of_day() {
        assert_eq!(parse_clock("17:28:24"), Some(time(17, 28, 24, 0)));
        assert_eq!(parse_clock("1:34:50.616"), Some(time(1, 34, 50, 616)));
    }

    #[test]
    fn test_date_and_datetime() {
        let date = NaiveDate::from_ymd_opt(2009, 3, 29).unwrap();
        assert_eq!(parse_datetime("2009-03-29"), Some(date.and_time(NaiveTime::default())));
        assert_eq!(
            parse_datetime("2009-03-29 06:00:00"),
            Some(date.and_time(time(6, 0, 0, 0)))
        );
        // date with an empty time half
        assert_eq!(parse_datetime("2009-03-29 "), Some(date.and_time(NaiveTime::default())));
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(parse_datetime(""), None);
        assert_eq!(parse_datetime("  "), None);
        assert_eq!(parse_datetime("DNF"), None);
        assert_eq!(parse_clock("1:75.0"), None);
        assert_eq!(parse_clock("+5.478"), None);
        assert_eq!(parse_clock("1:2:3:4"), None);
    }
}
