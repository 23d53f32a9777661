//! Driving port for city mutations.

use async_trait::async_trait;

use crate::domain::{CityId, Error};

/// Field values for creating or replacing a city, as sent by a client.
///
/// `country_id` is kept as the client integer until the service has checked
/// that it names a stored country.
#[derive(Debug, Clone, PartialEq)]
pub struct CityRequest {
    /// Parent country identifier.
    pub country_id: i64,
    /// City name.
    pub name: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

/// Use-case port for creating, replacing and removing cities.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CityCommand: Send + Sync {
    /// Create a city under an existing country and return its id.
    async fn create(&self, request: CityRequest) -> Result<CityId, Error>;

    /// Replace every field of a city, possibly moving it to another country.
    ///
    /// The city is checked before the new parent country.
    async fn update(&self, id: i64, request: CityRequest) -> Result<(), Error>;

    /// Remove an existing city.
    async fn delete(&self, id: i64) -> Result<(), Error>;
}
