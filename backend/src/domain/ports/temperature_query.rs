//! Driving port for temperature reads.

use async_trait::async_trait;

use crate::domain::{DateRange, Error, TemperatureFilter, TemperatureReading};

/// Use-case port for listing readings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TemperatureQuery: Send + Sync {
    /// Readings matching `filter`, ordered by id.
    async fn list(&self, filter: TemperatureFilter) -> Result<Vec<TemperatureReading>, Error>;

    /// Readings of an existing city within `range`.
    async fn list_by_city(
        &self,
        city_id: i64,
        range: DateRange,
    ) -> Result<Vec<TemperatureReading>, Error>;

    /// Readings of every city in an existing country within `range`.
    async fn list_by_country(
        &self,
        country_id: i64,
        range: DateRange,
    ) -> Result<Vec<TemperatureReading>, Error>;
}
