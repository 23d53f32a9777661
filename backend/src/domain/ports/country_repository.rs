//! Port for country persistence.

use async_trait::async_trait;

use crate::domain::{Country, CountryDraft, CountryId};

use super::RepositoryError;

/// Storage contract for countries.
///
/// Every method runs as a single autocommitted statement. Name uniqueness is
/// enforced by the store and reported as [`RepositoryError::Constraint`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CountryRepository: Send + Sync {
    /// Insert a country and return its generated id.
    async fn insert(&self, draft: &CountryDraft) -> Result<CountryId, RepositoryError>;

    /// Every stored country, ordered by id.
    async fn list(&self) -> Result<Vec<Country>, RepositoryError>;

    /// Whether a country with this id exists.
    async fn exists(&self, id: CountryId) -> Result<bool, RepositoryError>;

    /// Replace name and coordinates of an existing country.
    async fn update(&self, id: CountryId, draft: &CountryDraft) -> Result<(), RepositoryError>;

    /// Remove a country. Child rows follow the store's foreign-key rules.
    async fn delete(&self, id: CountryId) -> Result<(), RepositoryError>;
}
