//! Temperature readings and the filters used to list them.

use chrono::NaiveDateTime;

use crate::domain::{CityId, CountryId, TemperatureId};

/// A stored reading as returned by listings.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureReading {
    /// Store-generated identifier.
    pub id: TemperatureId,
    /// Measured value.
    pub value: f64,
    /// When the reading was taken.
    pub recorded_at: NaiveDateTime,
}

/// Field values for recording a new reading.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureDraft {
    /// City the reading belongs to; must exist.
    pub city_id: CityId,
    /// Measured value.
    pub value: f64,
    /// Timestamp text as supplied by the client. `None` lets the store stamp
    /// the reading with the current time.
    pub recorded_on: Option<String>,
}

/// Replacement values for an existing reading. The timestamp is immutable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureChange {
    /// New owning city; must exist.
    pub city_id: CityId,
    /// New value.
    pub value: f64,
}

/// Which readings a listing covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemperatureScope {
    /// Every reading.
    #[default]
    All,
    /// Readings of one city.
    City(CityId),
    /// Readings of every city in one country.
    Country(CountryId),
}

/// Inclusive bounds on the reading timestamp, as client-supplied text.
///
/// Bounds are compared as store timestamps, so a bare date means midnight.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DateRange {
    /// Lower bound.
    pub from: Option<String>,
    /// Upper bound.
    pub until: Option<String>,
}

impl DateRange {
    /// Build a range, treating empty strings as absent.
    #[must_use]
    pub fn new(from: Option<String>, until: Option<String>) -> Self {
        Self {
            from: from.filter(|value| !value.is_empty()),
            until: until.filter(|value| !value.is_empty()),
        }
    }
}

/// Filter combining scope, date range and city coordinates with AND.
///
/// # Examples
/// ```
/// use weather_backend::domain::{CityId, DateRange, TemperatureFilter, TemperatureScope};
///
/// let filter = TemperatureFilter::for_scope(TemperatureScope::City(CityId::new(3)))
///     .within(DateRange::new(Some("2024-01-01".into()), None));
/// assert_eq!(filter.range.from.as_deref(), Some("2024-01-01"));
/// assert!(filter.latitude.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TemperatureFilter {
    /// Readings covered.
    pub scope: TemperatureScope,
    /// Timestamp bounds.
    pub range: DateRange,
    /// Exact latitude of the reading's city.
    pub latitude: Option<f64>,
    /// Exact longitude of the reading's city.
    pub longitude: Option<f64>,
}

impl TemperatureFilter {
    /// Unrestricted filter over `scope`.
    #[must_use]
    pub fn for_scope(scope: TemperatureScope) -> Self {
        Self {
            scope,
            ..Self::default()
        }
    }

    /// Restrict to a date range.
    #[must_use]
    pub fn within(mut self, range: DateRange) -> Self {
        self.range = range;
        self
    }

    /// Restrict to cities at the given coordinates; `None` leaves an axis open.
    #[must_use]
    pub const fn at_coordinates(mut self, latitude: Option<f64>, longitude: Option<f64>) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(""), None)]
    #[case(None, None)]
    #[case(Some("2024-02-01"), Some("2024-02-01"))]
    fn date_range_drops_empty_bounds(#[case] raw: Option<&str>, #[case] expected: Option<&str>) {
        let range = DateRange::new(raw.map(str::to_owned), raw.map(str::to_owned));
        assert_eq!(range.from.as_deref(), expected);
        assert_eq!(range.until.as_deref(), expected);
    }

    #[rstest]
    fn filter_defaults_to_every_reading() {
        let filter = TemperatureFilter::default();
        assert_eq!(filter.scope, TemperatureScope::All);
        assert_eq!(filter.range, DateRange::default());
    }

    #[rstest]
    fn coordinates_are_independent() {
        let filter = TemperatureFilter::default().at_coordinates(Some(91.5), None);
        assert_eq!(filter.latitude, Some(91.5));
        assert!(filter.longitude.is_none());
    }
}
