//! Temperature use cases.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::city_service::CITY_NOT_FOUND;
use crate::domain::country_service::COUNTRY_NOT_FOUND;
use crate::domain::ports::{
    ChangeTemperatureRequest, CityRepository, CountryRepository, RecordTemperatureRequest,
    TemperatureCommand, TemperatureQuery, TemperatureRepository,
};
use crate::domain::store_failure::require_existing;
use crate::domain::{
    CityId, CountryId, DateRange, Error, ErrorCode, StoreFailurePolicy, TemperatureChange,
    TemperatureDraft, TemperatureFilter, TemperatureId, TemperatureReading, TemperatureScope,
};

pub(crate) const TEMPERATURE_NOT_FOUND: &str = "Temperature not found";

const RECORD: StoreFailurePolicy =
    StoreFailurePolicy::new("record temperature", ErrorCode::InvalidRequest)
        .conflict("Temperature already exists for this city")
        .message("An error occurred")
        .logged();
const LIST: StoreFailurePolicy =
    StoreFailurePolicy::new("list temperatures", ErrorCode::InternalError)
        .message("An error occurred")
        .logged();
const UPDATE: StoreFailurePolicy =
    StoreFailurePolicy::new("update temperature", ErrorCode::InternalError)
        .message("An error occurred");
const DELETE: StoreFailurePolicy =
    StoreFailurePolicy::new("delete temperature", ErrorCode::InvalidRequest)
        .message("Invalid input")
        .logged();

/// Temperature service implementing the temperature driving ports.
#[derive(Clone)]
pub struct TemperatureService<T, C, K> {
    temperatures: Arc<T>,
    cities: Arc<C>,
    countries: Arc<K>,
}

impl<T, C, K> TemperatureService<T, C, K> {
    /// Create a service over the three geography repositories.
    pub fn new(temperatures: Arc<T>, cities: Arc<C>, countries: Arc<K>) -> Self {
        Self {
            temperatures,
            cities,
            countries,
        }
    }
}

impl<T, C, K> TemperatureService<T, C, K>
where
    T: TemperatureRepository,
    C: CityRepository,
    K: CountryRepository,
{
    async fn require_city(&self, raw: i64, policy: StoreFailurePolicy) -> Result<CityId, Error> {
        require_existing(
            CityId::from_wire(raw),
            |id| self.cities.exists(id),
            CITY_NOT_FOUND,
            policy,
        )
        .await
    }

    async fn require_country(
        &self,
        raw: i64,
        policy: StoreFailurePolicy,
    ) -> Result<CountryId, Error> {
        require_existing(
            CountryId::from_wire(raw),
            |id| self.countries.exists(id),
            COUNTRY_NOT_FOUND,
            policy,
        )
        .await
    }

    async fn require_temperature(
        &self,
        raw: i64,
        policy: StoreFailurePolicy,
    ) -> Result<TemperatureId, Error> {
        require_existing(
            TemperatureId::from_wire(raw),
            |id| self.temperatures.exists(id),
            TEMPERATURE_NOT_FOUND,
            policy,
        )
        .await
    }

    async fn fetch(&self, filter: &TemperatureFilter) -> Result<Vec<TemperatureReading>, Error> {
        self.temperatures
            .list(filter)
            .await
            .map_err(|err| LIST.apply(err))
    }
}

#[async_trait]
impl<T, C, K> TemperatureCommand for TemperatureService<T, C, K>
where
    T: TemperatureRepository,
    C: CityRepository,
    K: CountryRepository,
{
    async fn record(&self, request: RecordTemperatureRequest) -> Result<TemperatureId, Error> {
        let city_id = self.require_city(request.city_id, RECORD).await?;
        let draft = TemperatureDraft {
            city_id,
            value: request.value,
            recorded_on: request.timestamp.filter(|raw| !raw.is_empty()),
        };
        self.temperatures
            .insert(&draft)
            .await
            .map_err(|err| RECORD.apply(err))
    }

    async fn update(&self, id: i64, request: ChangeTemperatureRequest) -> Result<(), Error> {
        let id = self.require_temperature(id, UPDATE).await?;
        let city_id = self.require_city(request.city_id, UPDATE).await?;
        let change = TemperatureChange {
            city_id,
            value: request.value,
        };
        self.temperatures
            .update(id, change)
            .await
            .map_err(|err| UPDATE.apply(err))
    }

    async fn delete(&self, id: i64) -> Result<(), Error> {
        let id = self.require_temperature(id, DELETE).await?;
        self.temperatures
            .delete(id)
            .await
            .map_err(|err| DELETE.apply(err))
    }
}

#[async_trait]
impl<T, C, K> TemperatureQuery for TemperatureService<T, C, K>
where
    T: TemperatureRepository,
    C: CityRepository,
    K: CountryRepository,
{
    async fn list(&self, filter: TemperatureFilter) -> Result<Vec<TemperatureReading>, Error> {
        self.fetch(&filter).await
    }

    async fn list_by_city(
        &self,
        city_id: i64,
        range: DateRange,
    ) -> Result<Vec<TemperatureReading>, Error> {
        let city_id = self.require_city(city_id, LIST).await?;
        let filter = TemperatureFilter::for_scope(TemperatureScope::City(city_id)).within(range);
        self.fetch(&filter).await
    }

    async fn list_by_country(
        &self,
        country_id: i64,
        range: DateRange,
    ) -> Result<Vec<TemperatureReading>, Error> {
        let country_id = self.require_country(country_id, LIST).await?;
        let filter =
            TemperatureFilter::for_scope(TemperatureScope::Country(country_id)).within(range);
        self.fetch(&filter).await
    }
}

#[cfg(test)]
#[path = "temperature_service_tests.rs"]
mod tests;
