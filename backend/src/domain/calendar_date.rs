//! Date text rules shared by the temperature endpoints.
//!
//! [`has_date_shape`] is the syntactic gate applied by endpoints that validate
//! dates. It only checks `YYYY-MM-DD` digit groups, so `2024-13-01` passes;
//! turning text into a timestamp is left to the store, which rejects it.

use std::sync::LazyLock;

use regex::Regex;

static DATE_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date shape pattern is a valid regex")
});

/// Output format for timestamps in response bodies.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// True when `raw` looks like `YYYY-MM-DD`.
///
/// # Examples
/// ```
/// use weather_backend::domain::has_date_shape;
///
/// assert!(has_date_shape("2024-05-17"));
/// assert!(has_date_shape("2024-13-01"));
/// assert!(!has_date_shape("2024-1-1"));
/// ```
#[must_use]
pub fn has_date_shape(raw: &str) -> bool {
    DATE_SHAPE.is_match(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2024-01-31", true)]
    #[case("2024-13-01", true)]
    #[case("0000-00-00", true)]
    #[case("2024-1-1", false)]
    #[case("24-01-01", false)]
    #[case("2024/01/01", false)]
    #[case("2024-01-01 10:00:00", false)]
    #[case(" 2024-01-01", false)]
    #[case("", false)]
    fn date_shape_is_syntactic_only(#[case] raw: &str, #[case] expected: bool) {
        assert_eq!(has_date_shape(raw), expected);
    }
}
