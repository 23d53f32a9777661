//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::{
    City, CityDraft, CityId, Country, CountryDraft, CountryId, TemperatureId, TemperatureReading,
};

use super::schema::{cities, countries, temperatures};

/// Row struct for reading from the countries table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = countries)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CountryRow {
    pub id: i32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<CountryRow> for Country {
    fn from(row: CountryRow) -> Self {
        Self {
            id: CountryId::new(row.id),
            name: row.name,
            latitude: row.latitude,
            longitude: row.longitude,
        }
    }
}

/// Insertable and changeset values for a country.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = countries)]
pub(crate) struct CountryValues<'a> {
    pub name: &'a str,
    pub latitude: f64,
    pub longitude: f64,
}

impl<'a> From<&'a CountryDraft> for CountryValues<'a> {
    fn from(draft: &'a CountryDraft) -> Self {
        Self {
            name: &draft.name,
            latitude: draft.latitude,
            longitude: draft.longitude,
        }
    }
}

/// Row struct for reading from the cities table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = cities)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CityRow {
    pub id: i32,
    pub country_id: i32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<CityRow> for City {
    fn from(row: CityRow) -> Self {
        Self {
            id: CityId::new(row.id),
            country_id: CountryId::new(row.country_id),
            name: row.name,
            latitude: row.latitude,
            longitude: row.longitude,
        }
    }
}

/// Insertable and changeset values for a city, including its parent.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = cities)]
pub(crate) struct CityValues<'a> {
    pub country_id: i32,
    pub name: &'a str,
    pub latitude: f64,
    pub longitude: f64,
}

impl<'a> From<&'a CityDraft> for CityValues<'a> {
    fn from(draft: &'a CityDraft) -> Self {
        Self {
            country_id: draft.country_id.as_i32(),
            name: &draft.name,
            latitude: draft.latitude,
            longitude: draft.longitude,
        }
    }
}

/// Listing projection of the temperatures table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = temperatures)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TemperatureRow {
    pub id: i32,
    pub value: f64,
    pub recorded_at: NaiveDateTime,
}

impl From<TemperatureRow> for TemperatureReading {
    fn from(row: TemperatureRow) -> Self {
        Self {
            id: TemperatureId::new(row.id),
            value: row.value,
            recorded_at: row.recorded_at,
        }
    }
}

/// Changeset for moving a reading; the timestamp is not part of it.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = temperatures)]
pub(crate) struct TemperatureUpdate {
    pub city_id: i32,
    pub value: f64,
}
