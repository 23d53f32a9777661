//! Test utilities for the backend crate.
//!
//! [`InMemoryStore`] implements every repository port over plain vectors and
//! mimics the constraints declared by the migrations: unique country names,
//! city names unique per country, one reading per city and timestamp, foreign
//! keys with cascading deletes. Unit tests and the integration suite under
//! `tests/` build the real services on top of it.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};

use crate::domain::ports::{
    CityRepository, CountryRepository, RepositoryError, TemperatureRepository,
};
use crate::domain::{
    City, CityDraft, CityId, CityService, Country, CountryDraft, CountryId, CountryService,
    TemperatureChange, TemperatureDraft, TemperatureFilter, TemperatureId, TemperatureReading,
    TemperatureScope, TemperatureService,
};
use crate::inbound::http::state::{HttpState, HttpStatePorts};

mod timestamp_text;

#[derive(Debug, Clone)]
struct StoredTemperature {
    id: TemperatureId,
    city_id: CityId,
    value: f64,
    recorded_at: NaiveDateTime,
}

#[derive(Debug, Default)]
struct Tables {
    countries: Vec<Country>,
    cities: Vec<City>,
    temperatures: Vec<StoredTemperature>,
    next_country: i32,
    next_city: i32,
    next_temperature: i32,
    failure: Option<RepositoryError>,
}

impl Tables {
    fn check(&self) -> Result<(), RepositoryError> {
        self.failure.clone().map_or(Ok(()), Err)
    }

    fn country_exists(&self, id: CountryId) -> bool {
        self.countries.iter().any(|country| country.id == id)
    }

    fn city_exists(&self, id: CityId) -> bool {
        self.cities.iter().any(|city| city.id == id)
    }

    fn city(&self, id: CityId) -> Option<&City> {
        self.cities.iter().find(|city| city.id == id)
    }

    fn country_name_taken(&self, name: &str, except: Option<CountryId>) -> bool {
        self.countries
            .iter()
            .any(|country| country.name == name && Some(country.id) != except)
    }

    fn city_name_taken(&self, draft: &CityDraft, except: Option<CityId>) -> bool {
        self.cities.iter().any(|city| {
            city.country_id == draft.country_id
                && city.name == draft.name
                && Some(city.id) != except
        })
    }

    fn reading_taken(
        &self,
        city_id: CityId,
        at: NaiveDateTime,
        except: Option<TemperatureId>,
    ) -> bool {
        self.temperatures.iter().any(|reading| {
            reading.city_id == city_id && reading.recorded_at == at && Some(reading.id) != except
        })
    }

    fn remove_cities(&mut self, doomed: impl Fn(&City) -> bool) {
        let removed: Vec<CityId> = self
            .cities
            .iter()
            .filter(|city| doomed(city))
            .map(|city| city.id)
            .collect();
        self.cities.retain(|city| !removed.contains(&city.id));
        self.temperatures
            .retain(|reading| !removed.contains(&reading.city_id));
    }

    fn matches(&self, reading: &StoredTemperature, filter: &Bounds) -> bool {
        let Some(city) = self.city(reading.city_id) else {
            return false;
        };
        let in_scope = match filter.scope {
            TemperatureScope::All => true,
            TemperatureScope::City(id) => reading.city_id == id,
            TemperatureScope::Country(id) => city.country_id == id,
        };
        in_scope
            && filter.from.is_none_or(|from| reading.recorded_at >= from)
            && filter.until.is_none_or(|until| reading.recorded_at <= until)
            && filter.latitude.is_none_or(|lat| city.latitude == lat)
            && filter.longitude.is_none_or(|lon| city.longitude == lon)
    }
}

struct Bounds {
    scope: TemperatureScope,
    from: Option<NaiveDateTime>,
    until: Option<NaiveDateTime>,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

fn unique_violation(constraint: &str) -> RepositoryError {
    RepositoryError::constraint(format!(
        "duplicate key value violates unique constraint \"{constraint}\""
    ))
}

fn foreign_key_violation(constraint: &str) -> RepositoryError {
    RepositoryError::constraint(format!(
        "insert or update violates foreign key constraint \"{constraint}\""
    ))
}

/// Repository double holding countries, cities and readings in memory.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use weather_backend::test_support::InMemoryStore;
///
/// let store = Arc::new(InMemoryStore::new());
/// let _state = InMemoryStore::http_state(&store);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with `failure`; `None` restores
    /// normal operation.
    pub fn fail_with(&self, failure: Option<RepositoryError>) {
        self.lock().failure = failure;
    }

    /// City rows currently stored, ordered by id.
    #[must_use]
    pub fn cities(&self) -> Vec<City> {
        self.lock().cities.clone()
    }

    /// Number of stored readings.
    #[must_use]
    pub fn temperature_count(&self) -> usize {
        self.lock().temperatures.len()
    }

    /// Stored value and city of a reading.
    #[must_use]
    pub fn temperature(&self, id: TemperatureId) -> Option<(CityId, f64)> {
        self.lock()
            .temperatures
            .iter()
            .find(|reading| reading.id == id)
            .map(|reading| (reading.city_id, reading.value))
    }

    /// Build HTTP state whose services all run over `store`.
    #[must_use]
    pub fn http_state(store: &Arc<Self>) -> HttpState {
        let countries = Arc::new(CountryService::new(Arc::clone(store)));
        let cities = Arc::new(CityService::new(Arc::clone(store), Arc::clone(store)));
        let temperatures = Arc::new(TemperatureService::new(
            Arc::clone(store),
            Arc::clone(store),
            Arc::clone(store),
        ));
        HttpState::new(HttpStatePorts {
            countries: countries.clone(),
            countries_query: countries,
            cities: cities.clone(),
            cities_query: cities,
            temperatures: temperatures.clone(),
            temperatures_query: temperatures,
        })
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl CountryRepository for InMemoryStore {
    async fn insert(&self, draft: &CountryDraft) -> Result<CountryId, RepositoryError> {
        let mut tables = self.lock();
        tables.check()?;
        if tables.country_name_taken(&draft.name, None) {
            return Err(unique_violation("countries_name_key"));
        }
        tables.next_country += 1;
        let id = CountryId::new(tables.next_country);
        tables.countries.push(draft.clone().into_country(id));
        Ok(id)
    }

    async fn list(&self) -> Result<Vec<Country>, RepositoryError> {
        let tables = self.lock();
        tables.check()?;
        Ok(tables.countries.clone())
    }

    async fn exists(&self, id: CountryId) -> Result<bool, RepositoryError> {
        let tables = self.lock();
        tables.check()?;
        Ok(tables.country_exists(id))
    }

    async fn update(&self, id: CountryId, draft: &CountryDraft) -> Result<(), RepositoryError> {
        let mut tables = self.lock();
        tables.check()?;
        if tables.country_name_taken(&draft.name, Some(id)) {
            return Err(unique_violation("countries_name_key"));
        }
        if let Some(country) = tables.countries.iter_mut().find(|country| country.id == id) {
            *country = draft.clone().into_country(id);
        }
        Ok(())
    }

    async fn delete(&self, id: CountryId) -> Result<(), RepositoryError> {
        let mut tables = self.lock();
        tables.check()?;
        tables.countries.retain(|country| country.id != id);
        tables.remove_cities(|city| city.country_id == id);
        Ok(())
    }
}

#[async_trait]
impl CityRepository for InMemoryStore {
    async fn insert(&self, draft: &CityDraft) -> Result<CityId, RepositoryError> {
        let mut tables = self.lock();
        tables.check()?;
        if !tables.country_exists(draft.country_id) {
            return Err(foreign_key_violation("cities_country_id_fkey"));
        }
        if tables.city_name_taken(draft, None) {
            return Err(unique_violation("cities_country_id_name_key"));
        }
        tables.next_city += 1;
        let id = CityId::new(tables.next_city);
        tables.cities.push(draft.clone().into_city(id));
        Ok(id)
    }

    async fn list(&self) -> Result<Vec<City>, RepositoryError> {
        let tables = self.lock();
        tables.check()?;
        Ok(tables.cities.clone())
    }

    async fn list_by_country(&self, country_id: CountryId) -> Result<Vec<City>, RepositoryError> {
        let tables = self.lock();
        tables.check()?;
        Ok(tables
            .cities
            .iter()
            .filter(|city| city.country_id == country_id)
            .cloned()
            .collect())
    }

    async fn exists(&self, id: CityId) -> Result<bool, RepositoryError> {
        let tables = self.lock();
        tables.check()?;
        Ok(tables.city_exists(id))
    }

    async fn update(&self, id: CityId, draft: &CityDraft) -> Result<(), RepositoryError> {
        let mut tables = self.lock();
        tables.check()?;
        if !tables.country_exists(draft.country_id) {
            return Err(foreign_key_violation("cities_country_id_fkey"));
        }
        if tables.city_name_taken(draft, Some(id)) {
            return Err(unique_violation("cities_country_id_name_key"));
        }
        if let Some(city) = tables.cities.iter_mut().find(|city| city.id == id) {
            *city = draft.clone().into_city(id);
        }
        Ok(())
    }

    async fn delete(&self, id: CityId) -> Result<(), RepositoryError> {
        let mut tables = self.lock();
        tables.check()?;
        tables.remove_cities(|city| city.id == id);
        Ok(())
    }
}

#[async_trait]
impl TemperatureRepository for InMemoryStore {
    async fn insert(&self, draft: &TemperatureDraft) -> Result<TemperatureId, RepositoryError> {
        let recorded_at = match draft.recorded_on.as_deref() {
            Some(raw) => timestamp_text::cast(raw)?,
            None => Utc::now().naive_utc(),
        };
        let mut tables = self.lock();
        tables.check()?;
        if !tables.city_exists(draft.city_id) {
            return Err(foreign_key_violation("temperatures_city_id_fkey"));
        }
        if tables.reading_taken(draft.city_id, recorded_at, None) {
            return Err(unique_violation("temperatures_city_id_timestamp_key"));
        }
        tables.next_temperature += 1;
        let id = TemperatureId::new(tables.next_temperature);
        tables.temperatures.push(StoredTemperature {
            id,
            city_id: draft.city_id,
            value: draft.value,
            recorded_at,
        });
        Ok(id)
    }

    async fn list(
        &self,
        filter: &TemperatureFilter,
    ) -> Result<Vec<TemperatureReading>, RepositoryError> {
        let bounds = Bounds {
            scope: filter.scope,
            from: filter.range.from.as_deref().map(timestamp_text::cast).transpose()?,
            until: filter.range.until.as_deref().map(timestamp_text::cast).transpose()?,
            latitude: filter.latitude,
            longitude: filter.longitude,
        };
        let tables = self.lock();
        tables.check()?;
        Ok(tables
            .temperatures
            .iter()
            .filter(|reading| tables.matches(reading, &bounds))
            .map(|reading| TemperatureReading {
                id: reading.id,
                value: reading.value,
                recorded_at: reading.recorded_at,
            })
            .collect())
    }

    async fn exists(&self, id: TemperatureId) -> Result<bool, RepositoryError> {
        let tables = self.lock();
        tables.check()?;
        Ok(tables.temperatures.iter().any(|reading| reading.id == id))
    }

    async fn update(
        &self,
        id: TemperatureId,
        change: TemperatureChange,
    ) -> Result<(), RepositoryError> {
        let mut tables = self.lock();
        tables.check()?;
        if !tables.city_exists(change.city_id) {
            return Err(foreign_key_violation("temperatures_city_id_fkey"));
        }
        let Some(recorded_at) = tables
            .temperatures
            .iter()
            .find(|reading| reading.id == id)
            .map(|reading| reading.recorded_at)
        else {
            return Ok(());
        };
        if tables.reading_taken(change.city_id, recorded_at, Some(id)) {
            return Err(unique_violation("temperatures_city_id_timestamp_key"));
        }
        if let Some(reading) = tables.temperatures.iter_mut().find(|reading| reading.id == id) {
            reading.city_id = change.city_id;
            reading.value = change.value;
        }
        Ok(())
    }

    async fn delete(&self, id: TemperatureId) -> Result<(), RepositoryError> {
        let mut tables = self.lock();
        tables.check()?;
        tables.temperatures.retain(|reading| reading.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DateRange;
    use rstest::{fixture, rstest};

    #[fixture]
    fn store() -> InMemoryStore {
        InMemoryStore::new()
    }

    async fn seed(store: &InMemoryStore) -> (CountryId, CityId) {
        let country = CountryRepository::insert(
            store,
            &CountryDraft {
                name: "Romania".into(),
                latitude: 45.9,
                longitude: 24.9,
            },
        )
        .await
        .expect("country");
        let city = CityRepository::insert(
            store,
            &CityDraft {
                country_id: country,
                name: "Cluj".into(),
                latitude: 46.7,
                longitude: 23.6,
            },
        )
        .await
        .expect("city");
        (country, city)
    }

    #[rstest]
    #[tokio::test]
    async fn duplicate_readings_violate_the_unique_key(store: InMemoryStore) {
        let (_, city) = seed(&store).await;
        let draft = TemperatureDraft {
            city_id: city,
            value: 3.5,
            recorded_on: Some("2024-02-01".into()),
        };
        TemperatureRepository::insert(&store, &draft)
            .await
            .expect("first reading");

        let err = TemperatureRepository::insert(&store, &draft)
            .await
            .expect_err("same city and timestamp");
        assert!(err.is_constraint());
    }

    #[rstest]
    #[tokio::test]
    async fn deleting_a_country_cascades(store: InMemoryStore) {
        let (country, city) = seed(&store).await;
        TemperatureRepository::insert(
            &store,
            &TemperatureDraft {
                city_id: city,
                value: 1.0,
                recorded_on: None,
            },
        )
        .await
        .expect("reading");

        CountryRepository::delete(&store, country)
            .await
            .expect("delete");

        assert!(store.cities().is_empty());
        assert_eq!(store.temperature_count(), 0);
    }

    #[rstest]
    #[tokio::test]
    async fn range_bounds_are_inclusive(store: InMemoryStore) {
        let (_, city) = seed(&store).await;
        for day in ["2024-01-01", "2024-01-02", "2024-01-03"] {
            TemperatureRepository::insert(
                &store,
                &TemperatureDraft {
                    city_id: city,
                    value: 0.0,
                    recorded_on: Some(day.into()),
                },
            )
            .await
            .expect("reading");
        }
        let filter = TemperatureFilter::for_scope(TemperatureScope::City(city)).within(
            DateRange::new(Some("2024-01-02".into()), Some("2024-01-03".into())),
        );

        let readings = TemperatureRepository::list(&store, &filter)
            .await
            .expect("list");

        assert_eq!(readings.len(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn injected_failures_reach_every_call(store: InMemoryStore) {
        store.fail_with(Some(RepositoryError::connection("refused")));

        let err = CountryRepository::list(&store).await.expect_err("failing");
        assert_eq!(err, RepositoryError::connection("refused"));

        store.fail_with(None);
        assert!(CountryRepository::list(&store).await.is_ok());
    }
}
