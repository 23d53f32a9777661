//! Driving port for temperature mutations.

use async_trait::async_trait;

use crate::domain::{Error, TemperatureId};

/// A reading to record, as sent by a client.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordTemperatureRequest {
    /// Owning city identifier.
    pub city_id: i64,
    /// Measured value.
    pub value: f64,
    /// Date text already checked for `YYYY-MM-DD` shape; `None` stamps the
    /// reading with the current time.
    pub timestamp: Option<String>,
}

/// New owner and value for an existing reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChangeTemperatureRequest {
    /// New owning city identifier.
    pub city_id: i64,
    /// New value.
    pub value: f64,
}

/// Use-case port for recording, changing and removing readings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TemperatureCommand: Send + Sync {
    /// Record a reading for an existing city and return its id.
    async fn record(&self, request: RecordTemperatureRequest) -> Result<TemperatureId, Error>;

    /// Change the city and value of an existing reading. The timestamp is
    /// left untouched.
    async fn update(&self, id: i64, request: ChangeTemperatureRequest) -> Result<(), Error>;

    /// Remove an existing reading.
    async fn delete(&self, id: i64) -> Result<(), Error>;
}
