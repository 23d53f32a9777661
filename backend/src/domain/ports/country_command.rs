//! Driving port for country mutations.

use async_trait::async_trait;

use crate::domain::{CountryDraft, CountryId, Error};

/// Use-case port for creating, replacing and removing countries.
///
/// Identifiers arrive as client integers; one that cannot name a stored row
/// is reported as `Country not found`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CountryCommand: Send + Sync {
    /// Create a country and return its id.
    async fn create(&self, draft: CountryDraft) -> Result<CountryId, Error>;

    /// Replace name and coordinates of an existing country.
    async fn update(&self, id: i64, draft: CountryDraft) -> Result<(), Error>;

    /// Remove an existing country.
    async fn delete(&self, id: i64) -> Result<(), Error>;
}
