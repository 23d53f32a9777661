//! Port for temperature persistence.
//!
//! Timestamp text (draft timestamps and range bounds) is interpreted by the
//! adapter. Text the store cannot read as a timestamp is a
//! [`RepositoryError::Query`], exactly as if the statement had been rejected.

use async_trait::async_trait;

use crate::domain::{
    TemperatureChange, TemperatureDraft, TemperatureFilter, TemperatureId, TemperatureReading,
};

use super::RepositoryError;

/// Storage contract for temperature readings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TemperatureRepository: Send + Sync {
    /// Insert a reading and return its generated id. A draft without a
    /// timestamp is stamped by the store.
    async fn insert(&self, draft: &TemperatureDraft) -> Result<TemperatureId, RepositoryError>;

    /// Readings matching every clause of `filter`, ordered by id.
    async fn list(
        &self,
        filter: &TemperatureFilter,
    ) -> Result<Vec<TemperatureReading>, RepositoryError>;

    /// Whether a reading with this id exists.
    async fn exists(&self, id: TemperatureId) -> Result<bool, RepositoryError>;

    /// Move a reading to another city and replace its value.
    async fn update(
        &self,
        id: TemperatureId,
        change: TemperatureChange,
    ) -> Result<(), RepositoryError>;

    /// Remove a reading.
    async fn delete(&self, id: TemperatureId) -> Result<(), RepositoryError>;
}
