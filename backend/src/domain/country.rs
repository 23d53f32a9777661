//! Country aggregate.

use crate::domain::CountryId;

/// A stored country.
#[derive(Debug, Clone, PartialEq)]
pub struct Country {
    /// Store-generated identifier.
    pub id: CountryId,
    /// Unique display name.
    pub name: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

/// Field values for creating or fully replacing a country.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryDraft {
    /// Display name; uniqueness is enforced by the store.
    pub name: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl CountryDraft {
    /// Materialise the draft as a stored country.
    #[must_use]
    pub fn into_country(self, id: CountryId) -> Country {
        Country {
            id,
            name: self.name,
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}
