//! DateTime display formatting.

use chrono::{DateTime, Utc};

const MILLIS_PER_DAY: i64 = 1000 * 60 * 60 * 24;

/// Whole days between two instants, rounded up.
fn days_between(date: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (now - date).num_milliseconds().abs();
    (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY
}

/// Card-style date: "Today", "Yesterday", "N days ago" within a week,
/// otherwise a short calendar date such as "Jan 5, 2025".
pub fn format_relative_date(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    match days_between(date, now) {
        0 | 1 => "Today".to_string(),
        2 => "Yesterday".to_string(),
        days @ 3..=7 => format!("{} days ago", days - 1),
        _ => date.format("%b %-d, %Y").to_string(),
    }
}

/// Detail-page date such as "January 5, 2025".
pub fn format_long_date(date: DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 20, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_relative_today() {
        assert_eq!(format_relative_date(now(), now()), "Today");
        assert_eq!(format_relative_date(now() - Duration::hours(5), now()), "Today");
    }

    #[test]
    fn test_relative_yesterday() {
        assert_eq!(
            format_relative_date(now() - Duration::hours(30), now()),
            "Yesterday"
        );
    }

    #[test]
    fn test_relative_days_ago() {
        assert_eq!(
            format_relative_date(now() - Duration::hours(60), now()),
            "2 days ago"
        );
        assert_eq!(
            format_relative_date(now() - Duration::days(7), now()),
            "6 days ago"
        );
    }

    #[test]
    fn test_relative_falls_back_to_calendar_date() {
        let date = Utc.with_ymd_and_hms(2025, 1, 5, 9, 0, 0).unwrap();
        assert_eq!(format_relative_date(date, now()), "Jan 5, 2025");
    }

    #[test]
    fn test_long_date() {
        let date = Utc.with_ymd_and_hms(2025, 1, 5, 9, 0, 0).unwrap();
        assert_eq!(format_long_date(date), "January 5, 2025");
        assert_eq!(date.year(), 2025);
    }
}
