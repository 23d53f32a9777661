//! City use cases.
//!
//! Parent checks run before every write. They are separate statements from
//! the write itself, so a country deleted in between surfaces as a foreign-key
//! violation and is reported through the operation's failure policy.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::country_service::COUNTRY_NOT_FOUND;
use crate::domain::ports::{
    CityCommand, CityQuery, CityRepository, CityRequest, CountryRepository,
};
use crate::domain::store_failure::require_existing;
use crate::domain::{City, CityDraft, CityId, CountryId, Error, ErrorCode, StoreFailurePolicy};

pub(crate) const CITY_NOT_FOUND: &str = "City not found";

const CREATE: StoreFailurePolicy =
    StoreFailurePolicy::new("create city", ErrorCode::InvalidRequest)
        .conflict("City already exists in this country")
        .message("Invalid input");
const LIST: StoreFailurePolicy =
    StoreFailurePolicy::new("list cities", ErrorCode::InternalError);
const LIST_BY_COUNTRY: StoreFailurePolicy =
    StoreFailurePolicy::new("list cities by country", ErrorCode::InternalError);
const UPDATE: StoreFailurePolicy =
    StoreFailurePolicy::new("update city", ErrorCode::InvalidRequest)
        .conflict("City name already exists in this country")
        .message("Invalid input");
const DELETE: StoreFailurePolicy =
    StoreFailurePolicy::new("delete city", ErrorCode::InvalidRequest).message("Invalid input");

/// City service implementing the city driving ports.
#[derive(Clone)]
pub struct CityService<C, K> {
    cities: Arc<C>,
    countries: Arc<K>,
}

impl<C, K> CityService<C, K> {
    /// Create a service over the city and country repositories.
    pub fn new(cities: Arc<C>, countries: Arc<K>) -> Self {
        Self { cities, countries }
    }
}

impl<C, K> CityService<C, K>
where
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

    fn draft(country_id: CountryId, request: CityRequest) -> CityDraft {
        CityDraft {
            country_id,
            name: request.name,
            latitude: request.latitude,
            longitude: request.longitude,
        }
    }
}

#[async_trait]
impl<C, K> CityCommand for CityService<C, K>
where
    C: CityRepository,
    K: CountryRepository,
{
    async fn create(&self, request: CityRequest) -> Result<CityId, Error> {
        let country_id = self.require_country(request.country_id, CREATE).await?;
        let draft = Self::draft(country_id, request);
        self.cities
            .insert(&draft)
            .await
            .map_err(|err| CREATE.apply(err))
    }

    async fn update(&self, id: i64, request: CityRequest) -> Result<(), Error> {
        let id = self.require_city(id, UPDATE).await?;
        let country_id = self.require_country(request.country_id, UPDATE).await?;
        let draft = Self::draft(country_id, request);
        self.cities
            .update(id, &draft)
            .await
            .map_err(|err| UPDATE.apply(err))
    }

    async fn delete(&self, id: i64) -> Result<(), Error> {
        let id = self.require_city(id, DELETE).await?;
        self.cities.delete(id).await.map_err(|err| DELETE.apply(err))
    }
}

#[async_trait]
impl<C, K> CityQuery for CityService<C, K>
where
    C: CityRepository,
    K: CountryRepository,
{
    async fn list(&self) -> Result<Vec<City>, Error> {
        self.cities.list().await.map_err(|err| LIST.apply(err))
    }

    async fn list_by_country(&self, country_id: i64) -> Result<Vec<City>, Error> {
        let country_id = self.require_country(country_id, LIST_BY_COUNTRY).await?;
        self.cities
            .list_by_country(country_id)
            .await
            .map_err(|err| LIST_BY_COUNTRY.apply(err))
    }
}

#[cfg(test)]
#[path = "city_service_tests.rs"]
mod tests;
