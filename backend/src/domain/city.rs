//! City aggregate, owned by a country through a foreign key.

use crate::domain::{CityId, CountryId};

/// A stored city.
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    /// Store-generated identifier.
    pub id: CityId,
    /// Parent country.
    pub country_id: CountryId,
    /// Name, unique within the parent country.
    pub name: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

/// Field values for creating or fully replacing a city.
///
/// Replacing a city with a different `country_id` re-parents it.
#[derive(Debug, Clone, PartialEq)]
pub struct CityDraft {
    /// Parent country; must exist when the draft is written.
    pub country_id: CountryId,
    /// Name, unique within the parent country.
    pub name: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl CityDraft {
    /// Materialise the draft as a stored city.
    #[must_use]
    pub fn into_city(self, id: CityId) -> City {
        City {
            id,
            country_id: self.country_id,
            name: self.name,
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}
