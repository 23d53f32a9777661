//! Text to `TIMESTAMP` conversion for the in-memory store.
//!
//! Follows PostgreSQL's input rules for the forms clients send: ISO dates and
//! date-times, slash-separated dates, month names, and the special words
//! `now`, `today`, `yesterday` and `tomorrow`. Offsets are ignored as for
//! `timestamp without time zone`, and year zero does not exist.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, Utc};

use crate::domain::ports::RepositoryError;

const DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%b %d %Y",
    "%B %d %Y",
    "%d %b %Y",
    "%d %B %Y",
];

const DATE_TIME_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Read `raw` as the server's `CAST(raw AS timestamp)` would.
pub(super) fn cast(raw: &str) -> Result<NaiveDateTime, RepositoryError> {
    let text = raw.trim();
    let parsed = special_value(text)
        .or_else(|| calendar_value(text))
        .ok_or_else(|| {
            RepositoryError::query(format!(
                "invalid input syntax for type timestamp: \"{raw}\""
            ))
        })?;
    if parsed.year() < 1 {
        return Err(RepositoryError::query(format!(
            "date/time field value out of range: \"{raw}\""
        )));
    }
    Ok(parsed)
}

fn special_value(text: &str) -> Option<NaiveDateTime> {
    let now = Utc::now().naive_utc();
    let today = now.date().and_hms_opt(0, 0, 0)?;
    match text.to_ascii_lowercase().as_str() {
        "now" => Some(now),
        "today" => Some(today),
        "yesterday" => today.checked_sub_signed(Duration::days(1)),
        "tomorrow" => today.checked_add_signed(Duration::days(1)),
        _ => None,
    }
}

fn calendar_value(text: &str) -> Option<NaiveDateTime> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .or_else(|| {
            DATE_TIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|timestamp| timestamp.naive_local())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2024-03-09", "2024-03-09 00:00:00")]
    #[case("2024/12/31", "2024-12-31 00:00:00")]
    #[case("Jan 1 2024", "2024-01-01 00:00:00")]
    #[case("2024-03-09 14:30:00", "2024-03-09 14:30:00")]
    #[case("2024-03-09T14:30:00.250", "2024-03-09 14:30:00.250")]
    #[case("2024-03-09T14:30:00+02:00", "2024-03-09 14:30:00")]
    fn accepted_literals(#[case] raw: &str, #[case] expected: &str) {
        let parsed = cast(raw).expect("literal should cast");
        assert_eq!(parsed.format("%Y-%m-%d %H:%M:%S%.f").to_string(), expected);
    }

    #[rstest]
    fn today_is_midnight_of_the_current_date() {
        let parsed = cast("Today").expect("special value");
        assert_eq!(parsed.date(), Utc::now().date_naive());
        assert_eq!(parsed.time(), chrono::NaiveTime::MIN);
    }

    #[rstest]
    #[case("2024-13-01", "invalid input syntax for type timestamp: \"2024-13-01\"")]
    #[case("2024-02-30", "invalid input syntax for type timestamp: \"2024-02-30\"")]
    #[case("0000-01-01", "date/time field value out of range: \"0000-01-01\"")]
    #[case("soon", "invalid input syntax for type timestamp: \"soon\"")]
    fn rejected_literals(#[case] raw: &str, #[case] message: &str) {
        let err = cast(raw).expect_err("literal should be rejected");
        assert!(matches!(err, RepositoryError::Query { .. }), "{err:?}");
        assert_eq!(err.message(), message);
    }
}
