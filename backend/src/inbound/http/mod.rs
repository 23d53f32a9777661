//! HTTP inbound adapter exposing the REST endpoints.
//!
//! Handlers validate request shape, call a driving port from [`HttpState`]
//! and render the result. [`api_scope`] mounts every resource under `/api`
//! together with the extractor configuration that keeps error bodies
//! uniform.

pub mod cities;
pub mod countries;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod temperatures;
#[cfg(test)]
pub mod test_utils;
mod validation;

use actix_web::{Scope, web};

pub use error::ApiResult;
pub use state::{HttpState, HttpStatePorts};

/// Every resource endpoint, mounted under `/api`.
///
/// Handlers expect `web::Data<HttpState>` to be registered on the app.
#[must_use]
pub fn api_scope() -> Scope {
    web::scope("/api")
        .app_data(error::json_config())
        .app_data(error::path_config())
        .app_data(error::query_config())
        .service(countries::create_country)
        .service(countries::list_countries)
        .service(countries::update_country)
        .service(countries::delete_country)
        .service(cities::create_city)
        .service(cities::list_cities)
        .service(cities::list_cities_by_country)
        .service(cities::update_city)
        .service(cities::delete_city)
        .service(temperatures::record_temperature)
        .service(temperatures::list_temperatures)
        .service(temperatures::list_temperatures_by_city)
        .service(temperatures::list_temperatures_by_country)
        .service(temperatures::update_temperature)
        .service(temperatures::delete_temperature)
}
