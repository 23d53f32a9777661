//! Wiring of Diesel repositories into services and HTTP state.

use std::sync::Arc;

use weather_backend::domain::{CityService, CountryService, TemperatureService};
use weather_backend::inbound::http::{HttpState, HttpStatePorts};
use weather_backend::outbound::persistence::{
    DbPool, DieselCityRepository, DieselCountryRepository, DieselTemperatureRepository,
};

/// Build HTTP state whose services share one repository set over `pool`.
pub(crate) fn build_http_state(pool: &DbPool) -> HttpState {
    let countries_repo = Arc::new(DieselCountryRepository::new(pool.clone()));
    let cities_repo = Arc::new(DieselCityRepository::new(pool.clone()));
    let temperatures_repo = Arc::new(DieselTemperatureRepository::new(pool.clone()));

    let countries = Arc::new(CountryService::new(Arc::clone(&countries_repo)));
    let cities = Arc::new(CityService::new(
        Arc::clone(&cities_repo),
        Arc::clone(&countries_repo),
    ));
    let temperatures = Arc::new(TemperatureService::new(
        temperatures_repo,
        cities_repo,
        countries_repo,
    ));

    HttpState::new(HttpStatePorts {
        countries: countries.clone(),
        countries_query: countries,
        cities: cities.clone(),
        cities_query: cities,
        temperatures: temperatures.clone(),
        temperatures_query: temperatures,
    })
}
