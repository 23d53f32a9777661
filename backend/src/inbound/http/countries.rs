//! Country HTTP handlers.
//!
//! ```text
//! POST   /api/countries
//! GET    /api/countries
//! PUT    /api/countries/{id}
//! DELETE /api/countries/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Country, CountryDraft, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{CreatedResponse, ErrorSchema, MessageResponse};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::require;

const INVALID_INPUT: &str = "Invalid input";

/// Request payload for creating or replacing a country.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CountryPayload {
    #[schema(example = "Romania")]
    pub nume: Option<String>,
    #[schema(example = 45.94)]
    pub lat: Option<f64>,
    #[schema(example = 24.97)]
    pub lon: Option<f64>,
}

/// Country as listed.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct CountryResponse {
    pub id: i32,
    pub nume: String,
    pub lat: f64,
    pub lon: f64,
}

impl From<Country> for CountryResponse {
    fn from(value: Country) -> Self {
        Self {
            id: value.id.as_i32(),
            nume: value.name,
            lat: value.latitude,
            lon: value.longitude,
        }
    }
}

fn parse_country_payload(payload: CountryPayload) -> Result<CountryDraft, Error> {
    Ok(CountryDraft {
        name: require(payload.nume, INVALID_INPUT)?,
        latitude: require(payload.lat, INVALID_INPUT)?,
        longitude: require(payload.lon, INVALID_INPUT)?,
    })
}

/// Create a country.
#[utoipa::path(
    post,
    path = "/api/countries",
    request_body = CountryPayload,
    responses(
        (status = 201, description = "Country created", body = CreatedResponse),
        (status = 400, description = "Invalid input or store failure", body = ErrorSchema),
        (status = 409, description = "Country already exists", body = ErrorSchema)
    ),
    tags = ["countries"],
    operation_id = "createCountry"
)]
#[post("/countries")]
pub async fn create_country(
    state: web::Data<HttpState>,
    payload: web::Json<CountryPayload>,
) -> ApiResult<HttpResponse> {
    let draft = parse_country_payload(payload.into_inner())?;
    let id = state.countries.create(draft).await?;
    Ok(HttpResponse::Created().json(CreatedResponse { id: id.as_i32() }))
}

/// List every country ordered by id.
#[utoipa::path(
    get,
    path = "/api/countries",
    responses(
        (status = 200, description = "Countries", body = [CountryResponse]),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["countries"],
    operation_id = "listCountries"
)]
#[get("/countries")]
pub async fn list_countries(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<CountryResponse>>> {
    let countries = state.countries_query.list().await?;
    Ok(web::Json(
        countries.into_iter().map(CountryResponse::from).collect(),
    ))
}

/// Replace a country's name and coordinates.
#[utoipa::path(
    put,
    path = "/api/countries/{id}",
    params(("id" = i64, Path, description = "Country identifier")),
    request_body = CountryPayload,
    responses(
        (status = 200, description = "Country updated", body = MessageResponse),
        (status = 400, description = "Invalid input", body = ErrorSchema),
        (status = 404, description = "Country not found", body = ErrorSchema),
        (status = 409, description = "Country name already exists", body = ErrorSchema)
    ),
    tags = ["countries"],
    operation_id = "updateCountry"
)]
#[put("/countries/{id}")]
pub async fn update_country(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<CountryPayload>,
) -> ApiResult<web::Json<MessageResponse>> {
    let draft = parse_country_payload(payload.into_inner())?;
    state.countries.update(path.into_inner(), draft).await?;
    Ok(web::Json(MessageResponse::new(
        "Country updated successfully",
    )))
}

/// Delete a country.
#[utoipa::path(
    delete,
    path = "/api/countries/{id}",
    params(("id" = i64, Path, description = "Country identifier")),
    responses(
        (status = 200, description = "Country deleted", body = MessageResponse),
        (status = 400, description = "Store failure", body = ErrorSchema),
        (status = 404, description = "Country not found", body = ErrorSchema)
    ),
    tags = ["countries"],
    operation_id = "deleteCountry"
)]
#[delete("/countries/{id}")]
pub async fn delete_country(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<MessageResponse>> {
    state.countries.delete(path.into_inner()).await?;
    Ok(web::Json(MessageResponse::new(
        "Country deleted successfully",
    )))
}
