//! Driving port for country reads.

use async_trait::async_trait;

use crate::domain::{Country, Error};

/// Use-case port for listing countries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CountryQuery: Send + Sync {
    /// Every country, ordered by id.
    async fn list(&self) -> Result<Vec<Country>, Error>;
}
