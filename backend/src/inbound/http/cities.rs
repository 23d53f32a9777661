//! City HTTP handlers.
//!
//! ```text
//! POST   /api/cities
//! GET    /api/cities
//! GET    /api/cities/country/{id}
//! PUT    /api/cities/{id}
//! DELETE /api/cities/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::ports::CityRequest;
use crate::domain::{City, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{CreatedResponse, ErrorSchema, MessageResponse};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{body_id_matches, present, require};

const INVALID_INPUT: &str = "Invalid input";
const ID_MISMATCH: &str = "ID in the body does not match the ID in the URL";

/// Request payload for creating or replacing a city.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CityPayload {
    /// Optional echo of the path id on updates.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<i64>)]
    pub id: Option<Value>,
    #[schema(example = 1)]
    pub id_tara: Option<i64>,
    #[schema(example = "Cluj-Napoca")]
    pub nume: Option<String>,
    #[schema(example = 46.77)]
    pub lat: Option<f64>,
    #[schema(example = 23.62)]
    pub lon: Option<f64>,
}

/// City as listed.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CityResponse {
    pub id: i32,
    pub id_tara: i32,
    pub nume: String,
    pub lat: f64,
    pub lon: f64,
}

impl From<City> for CityResponse {
    fn from(value: City) -> Self {
        Self {
            id: value.id.as_i32(),
            id_tara: value.country_id.as_i32(),
            nume: value.name,
            lat: value.latitude,
            lon: value.longitude,
        }
    }
}

fn parse_city_payload(payload: CityPayload) -> Result<CityRequest, Error> {
    Ok(CityRequest {
        country_id: require(payload.id_tara, INVALID_INPUT)?,
        name: require(payload.nume, INVALID_INPUT)?,
        latitude: require(payload.lat, INVALID_INPUT)?,
        longitude: require(payload.lon, INVALID_INPUT)?,
    })
}

fn city_json(cities: Vec<City>) -> web::Json<Vec<CityResponse>> {
    web::Json(cities.into_iter().map(CityResponse::from).collect())
}

/// Create a city under an existing country.
#[utoipa::path(
    post,
    path = "/api/cities",
    request_body = CityPayload,
    responses(
        (status = 201, description = "City created", body = CreatedResponse),
        (status = 400, description = "Invalid input", body = ErrorSchema),
        (status = 404, description = "Country not found", body = ErrorSchema),
        (status = 409, description = "City already exists in this country", body = ErrorSchema)
    ),
    tags = ["cities"],
    operation_id = "createCity"
)]
#[post("/cities")]
pub async fn create_city(
    state: web::Data<HttpState>,
    payload: web::Json<CityPayload>,
) -> ApiResult<HttpResponse> {
    let request = parse_city_payload(payload.into_inner())?;
    let id = state.cities.create(request).await?;
    Ok(HttpResponse::Created().json(CreatedResponse { id: id.as_i32() }))
}

/// List every city ordered by id.
#[utoipa::path(
    get,
    path = "/api/cities",
    responses(
        (status = 200, description = "Cities", body = [CityResponse]),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["cities"],
    operation_id = "listCities"
)]
#[get("/cities")]
pub async fn list_cities(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<CityResponse>>> {
    Ok(city_json(state.cities_query.list().await?))
}

/// List the cities of an existing country.
#[utoipa::path(
    get,
    path = "/api/cities/country/{id}",
    params(("id" = i64, Path, description = "Country identifier")),
    responses(
        (status = 200, description = "Cities of the country", body = [CityResponse]),
        (status = 404, description = "Country not found", body = ErrorSchema),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["cities"],
    operation_id = "listCitiesByCountry"
)]
#[get("/cities/country/{id}")]
pub async fn list_cities_by_country(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<Vec<CityResponse>>> {
    Ok(city_json(
        state.cities_query.list_by_country(path.into_inner()).await?,
    ))
}

/// Replace a city, possibly moving it to another country.
#[utoipa::path(
    put,
    path = "/api/cities/{id}",
    params(("id" = i64, Path, description = "City identifier")),
    request_body = CityPayload,
    responses(
        (status = 200, description = "City updated", body = MessageResponse),
        (status = 400, description = "Invalid input or id mismatch", body = ErrorSchema),
        (status = 404, description = "City or country not found", body = ErrorSchema),
        (status = 409, description = "City name already exists in this country", body = ErrorSchema)
    ),
    tags = ["cities"],
    operation_id = "updateCity"
)]
#[put("/cities/{id}")]
pub async fn update_city(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<CityPayload>,
) -> ApiResult<web::Json<MessageResponse>> {
    let id = path.into_inner();
    let payload = payload.into_inner();
    let body_id = payload.id.clone();
    let request = parse_city_payload(payload)?;
    if body_id.is_some_and(|body_id| !body_id_matches(&body_id, id)) {
        return Err(Error::invalid_request(ID_MISMATCH));
    }
    state.cities.update(id, request).await?;
    Ok(web::Json(MessageResponse::new("City updated successfully")))
}

/// Delete a city and its readings.
#[utoipa::path(
    delete,
    path = "/api/cities/{id}",
    params(("id" = i64, Path, description = "City identifier")),
    responses(
        (status = 200, description = "City deleted", body = MessageResponse),
        (status = 400, description = "Store failure", body = ErrorSchema),
        (status = 404, description = "City not found", body = ErrorSchema)
    ),
    tags = ["cities"],
    operation_id = "deleteCity"
)]
#[delete("/cities/{id}")]
pub async fn delete_city(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<MessageResponse>> {
    state.cities.delete(path.into_inner()).await?;
    Ok(web::Json(MessageResponse::new("City deleted successfully")))
}
