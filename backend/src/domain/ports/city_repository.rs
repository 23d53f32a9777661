//! Port for city persistence.

use async_trait::async_trait;

use crate::domain::{City, CityDraft, CityId, CountryId};

use super::RepositoryError;

/// Storage contract for cities.
///
/// The `(country_id, name)` pair is unique and `country_id` references a
/// country; both rules surface as [`RepositoryError::Constraint`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CityRepository: Send + Sync {
    /// Insert a city and return its generated id.
    async fn insert(&self, draft: &CityDraft) -> Result<CityId, RepositoryError>;

    /// Every stored city, ordered by id.
    async fn list(&self) -> Result<Vec<City>, RepositoryError>;

    /// Cities of one country, ordered by id.
    async fn list_by_country(&self, country_id: CountryId) -> Result<Vec<City>, RepositoryError>;

    /// Whether a city with this id exists.
    async fn exists(&self, id: CityId) -> Result<bool, RepositoryError>;

    /// Replace every field of an existing city, including its parent.
    async fn update(&self, id: CityId, draft: &CityDraft) -> Result<(), RepositoryError>;

    /// Remove a city.
    async fn delete(&self, id: CityId) -> Result<(), RepositoryError>;
}
