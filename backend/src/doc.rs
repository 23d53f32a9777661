//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every resource endpoint, the health checks and the
//! shared response schemas. The document is served by Swagger UI in debug
//! builds.

use utoipa::OpenApi;

use crate::inbound::http::cities::{CityPayload, CityResponse};
use crate::inbound::http::countries::{CountryPayload, CountryResponse};
use crate::inbound::http::schemas::{CreatedResponse, ErrorSchema, MessageResponse};
use crate::inbound::http::temperatures::{
    TemperaturePayload, TemperatureResponse, TemperatureUpdatePayload,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Weather backend API",
        description = "Countries, their cities and the temperature readings recorded there."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::countries::create_country,
        crate::inbound::http::countries::list_countries,
        crate::inbound::http::countries::update_country,
        crate::inbound::http::countries::delete_country,
        crate::inbound::http::cities::create_city,
        crate::inbound::http::cities::list_cities,
        crate::inbound::http::cities::list_cities_by_country,
        crate::inbound::http::cities::update_city,
        crate::inbound::http::cities::delete_city,
        crate::inbound::http::temperatures::record_temperature,
        crate::inbound::http::temperatures::list_temperatures,
        crate::inbound::http::temperatures::list_temperatures_by_city,
        crate::inbound::http::temperatures::list_temperatures_by_country,
        crate::inbound::http::temperatures::update_temperature,
        crate::inbound::http::temperatures::delete_temperature,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        CreatedResponse,
        MessageResponse,
        CountryPayload,
        CountryResponse,
        CityPayload,
        CityResponse,
        TemperaturePayload,
        TemperatureUpdatePayload,
        TemperatureResponse
    )),
    tags(
        (name = "countries", description = "Country records"),
        (name = "cities", description = "Cities within a country"),
        (name = "temperatures", description = "Temperature readings per city"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
