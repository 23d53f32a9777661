//! Driving port for city reads.

use async_trait::async_trait;

use crate::domain::{City, Error};

/// Use-case port for listing cities.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CityQuery: Send + Sync {
    /// Every city, ordered by id.
    async fn list(&self) -> Result<Vec<City>, Error>;

    /// Cities of an existing country, ordered by id.
    async fn list_by_country(&self, country_id: i64) -> Result<Vec<City>, Error>;
}
