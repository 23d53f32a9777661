//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    CityCommand, CityQuery, CountryCommand, CountryQuery, TemperatureCommand, TemperatureQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub countries: Arc<dyn CountryCommand>,
    pub countries_query: Arc<dyn CountryQuery>,
    pub cities: Arc<dyn CityCommand>,
    pub cities_query: Arc<dyn CityQuery>,
    pub temperatures: Arc<dyn TemperatureCommand>,
    pub temperatures_query: Arc<dyn TemperatureQuery>,
}

/// Parameter object bundling the port implementations for [`HttpState`].
#[derive(Clone)]
pub struct HttpStatePorts {
    pub countries: Arc<dyn CountryCommand>,
    pub countries_query: Arc<dyn CountryQuery>,
    pub cities: Arc<dyn CityCommand>,
    pub cities_query: Arc<dyn CityQuery>,
    pub temperatures: Arc<dyn TemperatureCommand>,
    pub temperatures_query: Arc<dyn TemperatureQuery>,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state from the port bundle.
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            countries,
            countries_query,
            cities,
            cities_query,
            temperatures,
            temperatures_query,
        } = ports;
        Self {
            countries,
            countries_query,
            cities,
            cities_query,
            temperatures,
            temperatures_query,
        }
    }
}
