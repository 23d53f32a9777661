//! Country use cases.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{CountryCommand, CountryQuery, CountryRepository};
use crate::domain::store_failure::require_existing;
use crate::domain::{Country, CountryDraft, CountryId, Error, ErrorCode, StoreFailurePolicy};

pub(crate) const COUNTRY_NOT_FOUND: &str = "Country not found";

const CREATE: StoreFailurePolicy =
    StoreFailurePolicy::new("create country", ErrorCode::InvalidRequest)
        .conflict("Country already exists");
const LIST: StoreFailurePolicy =
    StoreFailurePolicy::new("list countries", ErrorCode::InternalError);
const UPDATE: StoreFailurePolicy =
    StoreFailurePolicy::new("update country", ErrorCode::InvalidRequest)
        .conflict("Invalid input: country name already exists")
        .message("Invalid input");
const DELETE: StoreFailurePolicy =
    StoreFailurePolicy::new("delete country", ErrorCode::InvalidRequest).message("Invalid input");

/// Country service implementing the country driving ports.
#[derive(Clone)]
pub struct CountryService<R> {
    countries: Arc<R>,
}

impl<R> CountryService<R> {
    /// Create a service over the given repository.
    pub fn new(countries: Arc<R>) -> Self {
        Self { countries }
    }
}

impl<R> CountryService<R>
where
    R: CountryRepository,
{
    async fn require(&self, raw: i64, policy: StoreFailurePolicy) -> Result<CountryId, Error> {
        require_existing(
            CountryId::from_wire(raw),
            |id| self.countries.exists(id),
            COUNTRY_NOT_FOUND,
            policy,
        )
        .await
    }
}

#[async_trait]
impl<R> CountryCommand for CountryService<R>
where
    R: CountryRepository,
{
    async fn create(&self, draft: CountryDraft) -> Result<CountryId, Error> {
        self.countries
            .insert(&draft)
            .await
            .map_err(|err| CREATE.apply(err))
    }

    async fn update(&self, id: i64, draft: CountryDraft) -> Result<(), Error> {
        let id = self.require(id, UPDATE).await?;
        self.countries
            .update(id, &draft)
            .await
            .map_err(|err| UPDATE.apply(err))
    }

    async fn delete(&self, id: i64) -> Result<(), Error> {
        let id = self.require(id, DELETE).await?;
        self.countries
            .delete(id)
            .await
            .map_err(|err| DELETE.apply(err))
    }
}

#[async_trait]
impl<R> CountryQuery for CountryService<R>
where
    R: CountryRepository,
{
    async fn list(&self) -> Result<Vec<Country>, Error> {
        self.countries.list().await.map_err(|err| LIST.apply(err))
    }
}
