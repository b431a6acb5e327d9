//! Due-Date Countdown
//!
//! Day arithmetic and display labels for the navbar countdown pill.

use chrono::{Datelike, Local, NaiveDate};

/// Demo-safe fallback when no due date has been stored for the user.
pub fn fallback_due_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, 24).expect("static date is valid")
}

/// Parse a stored `YYYY-MM-DD` string.
pub fn parse_due_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Whole days from `today` until `due` (negative when past).
pub fn days_until(due: NaiveDate, today: NaiveDate) -> i64 {
    (due - today).num_days()
}

/// Countdown pill label for a day count.
pub fn countdown_label(days_left: i64) -> String {
    if days_left > 0 {
        let plural = if days_left == 1 { "" } else { "s" };
        format!("{} day{} to go", days_left, plural)
    } else if days_left == 0 {
        "Due today 💙".to_string()
    } else {
        "Past due date".to_string()
    }
}

/// Short `M/D/YYYY` label for a date string (RFC 3339 timestamp or bare date).
pub fn date_label(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let date_part = raw.get(..10).unwrap_or(raw);
    let date = chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(date_part, "%Y-%m-%d"))
        .ok()?;
    Some(short_date(date))
}

/// Short `M/D/YYYY` label for a date.
pub fn short_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

/// Days from the current local date until the given due date.
pub fn days_left_from_today(due: NaiveDate) -> i64 {
    days_until(due, Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_until_counts_calendar_days() {
        let today = date(2026, 6, 1);
        assert_eq!(days_until(date(2026, 6, 24), today), 23);
        assert_eq!(days_until(today, today), 0);
        assert_eq!(days_until(date(2026, 5, 30), today), -2);
    }

    #[test]
    fn test_countdown_label_variants() {
        assert_eq!(countdown_label(14), "14 days to go");
        assert_eq!(countdown_label(1), "1 day to go");
        assert_eq!(countdown_label(0), "Due today 💙");
        assert_eq!(countdown_label(-3), "Past due date");
    }

    #[test]
    fn test_parse_due_date_rejects_garbage() {
        assert_eq!(parse_due_date("2026-06-24"), Some(date(2026, 6, 24)));
        assert_eq!(parse_due_date(" 2026-06-24 "), Some(date(2026, 6, 24)));
        assert_eq!(parse_due_date("June 24"), None);
        assert_eq!(parse_due_date(""), None);
    }

    #[test]
    fn test_date_label_accepts_timestamps_and_bare_dates() {
        assert_eq!(
            date_label("2025-11-03T09:30:00+00:00").as_deref(),
            Some("11/3/2025")
        );
        assert_eq!(date_label("2025-11-03").as_deref(), Some("11/3/2025"));
        assert_eq!(date_label("not a date"), None);
        assert_eq!(date_label(""), None);
    }
}
