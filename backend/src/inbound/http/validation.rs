//! Shared validation helpers for inbound HTTP adapters.
//!
//! Everything here runs before a service is called, so a rejected request
//! never reaches the store.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::domain::{Error, has_date_shape};

/// Unwrap a required request field, failing with `message` when absent.
///
/// JSON `null` deserialises to `None` and is treated as absent.
pub(crate) fn require<T>(value: Option<T>, message: &'static str) -> Result<T, Error> {
    value.ok_or_else(|| Error::invalid_request(message))
}

/// Check an optional date parameter against the `YYYY-MM-DD` shape.
///
/// Absent and empty values pass; only the shape is checked, never calendar
/// validity.
pub(crate) fn check_date_shape(value: Option<&str>, message: &'static str) -> Result<(), Error> {
    match value {
        Some(raw) if !raw.is_empty() && !has_date_shape(raw) => {
            Err(Error::invalid_request(message))
        }
        _ => Ok(()),
    }
}

/// Parse a floating-point query parameter, treating failure as absence.
///
/// # Examples
/// ```ignore
/// assert_eq!(parse_or_absent(Some("91.5")), Some(91.5));
/// assert_eq!(parse_or_absent(Some("notanumber")), None);
/// ```
pub(crate) fn parse_or_absent(raw: Option<&str>) -> Option<f64> {
    // Zero is a coordinate, not an absent filter: `lat=0` selects the equator.
    raw.and_then(|value| value.trim().parse::<f64>().ok())
}

/// Deserialise a field so that an explicit `null` counts as present.
///
/// Pair with `#[serde(default)]` so a missing key stays `None`.
pub(crate) fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Whether a body `id` names the same entity as the path identifier.
///
/// Numbers compare by value, so `3.0` matches `3`; any other JSON type never
/// matches.
pub(crate) fn body_id_matches(body_id: &Value, path_id: i64) -> bool {
    let Value::Number(number) = body_id else {
        return false;
    };
    match number.as_i64() {
        Some(value) => value == path_id,
        #[expect(
            clippy::cast_precision_loss,
            reason = "ids compare the way JSON numbers do"
        )]
        None => number.as_f64() == Some(path_id as f64),
    }
}
