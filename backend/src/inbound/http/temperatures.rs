//! Temperature HTTP handlers.
//!
//! ```text
//! POST   /api/temperatures
//! GET    /api/temperatures?from&until&lat&lon
//! GET    /api/temperatures/cities/{id}?from&until
//! GET    /api/temperatures/countries/{id}?from&until
//! PUT    /api/temperatures/{id}
//! DELETE /api/temperatures/{id}
//! ```
//!
//! Date parameters are checked for `YYYY-MM-DD` shape only, except on the
//! unscoped listing, which hands them to the store as given.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::{ChangeTemperatureRequest, RecordTemperatureRequest};
use crate::domain::{DATE_FORMAT, DateRange, Error, TemperatureFilter, TemperatureReading};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{CreatedResponse, ErrorSchema, MessageResponse};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    body_id_matches, check_date_shape, parse_or_absent, present, require,
};

const REQUIRED_FIELDS: &str = "Invalid input. idOras and valoare are required";
const BAD_TIMESTAMP: &str = "Invalid date format for timestamp. Use AAAA-LL-ZZ";
const BAD_FROM: &str = "Invalid date format for \"from\". Use AAAA-LL-ZZ";
const BAD_UNTIL: &str = "Invalid date format for \"until\". Use AAAA-LL-ZZ";
const ID_MISMATCH: &str = "ID in body does not match ID in URL";

/// Request payload for recording a reading.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TemperaturePayload {
    #[schema(example = 1)]
    pub id_oras: Option<i64>,
    #[schema(example = 21.5)]
    pub valoare: Option<f64>,
    /// Reading date as `YYYY-MM-DD`; defaults to now.
    #[schema(example = "2024-05-01")]
    pub timestamp: Option<String>,
}

/// Request payload for changing a reading's city and value.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureUpdatePayload {
    /// Must repeat the path id.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = i64)]
    pub id: Option<Value>,
    #[schema(example = 1)]
    pub id_oras: Option<i64>,
    #[schema(example = 19.0)]
    pub valoare: Option<f64>,
}

/// Reading as listed.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct TemperatureResponse {
    pub id: i32,
    pub valoare: f64,
    /// Reading date as `YYYY-MM-DD`.
    #[schema(example = "2024-05-01")]
    pub timestamp: String,
}

impl From<TemperatureReading> for TemperatureResponse {
    fn from(value: TemperatureReading) -> Self {
        Self {
            id: value.id.as_i32(),
            valoare: value.value,
            timestamp: value.recorded_at.format(DATE_FORMAT).to_string(),
        }
    }
}

/// Filters accepted by the unscoped listing.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TemperatureListQuery {
    /// Inclusive lower timestamp bound.
    pub from: Option<String>,
    /// Inclusive upper timestamp bound.
    pub until: Option<String>,
    /// Exact city latitude; ignored unless numeric.
    pub lat: Option<String>,
    /// Exact city longitude; ignored unless numeric.
    pub lon: Option<String>,
}

/// Date bounds accepted by the city and country listings.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DateRangeQuery {
    /// Inclusive lower bound, `YYYY-MM-DD`.
    pub from: Option<String>,
    /// Inclusive upper bound, `YYYY-MM-DD`.
    pub until: Option<String>,
}

impl DateRangeQuery {
    fn into_range(self) -> Result<DateRange, Error> {
        check_date_shape(self.from.as_deref(), BAD_FROM)?;
        check_date_shape(self.until.as_deref(), BAD_UNTIL)?;
        Ok(DateRange::new(self.from, self.until))
    }
}

fn parse_record_payload(payload: TemperaturePayload) -> Result<RecordTemperatureRequest, Error> {
    let city_id = require(payload.id_oras, REQUIRED_FIELDS)?;
    let value = require(payload.valoare, REQUIRED_FIELDS)?;
    check_date_shape(payload.timestamp.as_deref(), BAD_TIMESTAMP)?;
    Ok(RecordTemperatureRequest {
        city_id,
        value,
        timestamp: payload.timestamp,
    })
}

fn parse_update_payload(
    id: i64,
    payload: TemperatureUpdatePayload,
) -> Result<ChangeTemperatureRequest, Error> {
    if !payload
        .id
        .is_some_and(|body_id| body_id_matches(&body_id, id))
    {
        return Err(Error::invalid_request(ID_MISMATCH));
    }
    Ok(ChangeTemperatureRequest {
        city_id: require(payload.id_oras, REQUIRED_FIELDS)?,
        value: require(payload.valoare, REQUIRED_FIELDS)?,
    })
}

fn list_filter(query: TemperatureListQuery) -> TemperatureFilter {
    let latitude = parse_or_absent(query.lat.as_deref());
    let longitude = parse_or_absent(query.lon.as_deref());
    TemperatureFilter::default()
        .within(DateRange::new(query.from, query.until))
        .at_coordinates(latitude, longitude)
}

fn reading_json(readings: Vec<TemperatureReading>) -> web::Json<Vec<TemperatureResponse>> {
    web::Json(
        readings
            .into_iter()
            .map(TemperatureResponse::from)
            .collect(),
    )
}

/// Record a reading for an existing city.
#[utoipa::path(
    post,
    path = "/api/temperatures",
    request_body = TemperaturePayload,
    responses(
        (status = 201, description = "Reading recorded", body = CreatedResponse),
        (status = 400, description = "Invalid input or store failure", body = ErrorSchema),
        (status = 404, description = "City not found", body = ErrorSchema),
        (status = 409, description = "Temperature already exists for this city", body = ErrorSchema)
    ),
    tags = ["temperatures"],
    operation_id = "recordTemperature"
)]
#[post("/temperatures")]
pub async fn record_temperature(
    state: web::Data<HttpState>,
    payload: web::Json<TemperaturePayload>,
) -> ApiResult<HttpResponse> {
    let request = parse_record_payload(payload.into_inner())?;
    let id = state.temperatures.record(request).await?;
    Ok(HttpResponse::Created().json(CreatedResponse { id: id.as_i32() }))
}

/// List readings, optionally filtered by date and city coordinates.
#[utoipa::path(
    get,
    path = "/api/temperatures",
    params(TemperatureListQuery),
    responses(
        (status = 200, description = "Readings", body = [TemperatureResponse]),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["temperatures"],
    operation_id = "listTemperatures"
)]
#[get("/temperatures")]
pub async fn list_temperatures(
    state: web::Data<HttpState>,
    query: web::Query<TemperatureListQuery>,
) -> ApiResult<web::Json<Vec<TemperatureResponse>>> {
    let filter = list_filter(query.into_inner());
    Ok(reading_json(state.temperatures_query.list(filter).await?))
}

/// List the readings of an existing city.
#[utoipa::path(
    get,
    path = "/api/temperatures/cities/{id}",
    params(("id" = i64, Path, description = "City identifier"), DateRangeQuery),
    responses(
        (status = 200, description = "Readings of the city", body = [TemperatureResponse]),
        (status = 400, description = "Malformed date", body = ErrorSchema),
        (status = 404, description = "City not found", body = ErrorSchema),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["temperatures"],
    operation_id = "listTemperaturesByCity"
)]
#[get("/temperatures/cities/{id}")]
pub async fn list_temperatures_by_city(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    query: web::Query<DateRangeQuery>,
) -> ApiResult<web::Json<Vec<TemperatureResponse>>> {
    let range = query.into_inner().into_range()?;
    let readings = state
        .temperatures_query
        .list_by_city(path.into_inner(), range)
        .await?;
    Ok(reading_json(readings))
}

/// List the readings of every city in an existing country.
#[utoipa::path(
    get,
    path = "/api/temperatures/countries/{id}",
    params(("id" = i64, Path, description = "Country identifier"), DateRangeQuery),
    responses(
        (status = 200, description = "Readings of the country", body = [TemperatureResponse]),
        (status = 400, description = "Malformed date", body = ErrorSchema),
        (status = 404, description = "Country not found", body = ErrorSchema),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["temperatures"],
    operation_id = "listTemperaturesByCountry"
)]
#[get("/temperatures/countries/{id}")]
pub async fn list_temperatures_by_country(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    query: web::Query<DateRangeQuery>,
) -> ApiResult<web::Json<Vec<TemperatureResponse>>> {
    let range = query.into_inner().into_range()?;
    let readings = state
        .temperatures_query
        .list_by_country(path.into_inner(), range)
        .await?;
    Ok(reading_json(readings))
}

/// Change a reading's city and value; the timestamp is kept.
#[utoipa::path(
    put,
    path = "/api/temperatures/{id}",
    params(("id" = i64, Path, description = "Reading identifier")),
    request_body = TemperatureUpdatePayload,
    responses(
        (status = 200, description = "Reading updated", body = MessageResponse),
        (status = 400, description = "Invalid input or id mismatch", body = ErrorSchema),
        (status = 404, description = "Reading or city not found", body = ErrorSchema),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["temperatures"],
    operation_id = "updateTemperature"
)]
#[put("/temperatures/{id}")]
pub async fn update_temperature(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<TemperatureUpdatePayload>,
) -> ApiResult<web::Json<MessageResponse>> {
    let id = path.into_inner();
    let request = parse_update_payload(id, payload.into_inner())?;
    state.temperatures.update(id, request).await?;
    Ok(web::Json(MessageResponse::new(
        "Temperature updated successfully",
    )))
}

/// Delete a reading.
#[utoipa::path(
    delete,
    path = "/api/temperatures/{id}",
    params(("id" = i64, Path, description = "Reading identifier")),
    responses(
        (status = 200, description = "Reading deleted", body = MessageResponse),
        (status = 400, description = "Store failure", body = ErrorSchema),
        (status = 404, description = "Temperature not found", body = ErrorSchema)
    ),
    tags = ["temperatures"],
    operation_id = "deleteTemperature"
)]
#[delete("/temperatures/{id}")]
pub async fn delete_temperature(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<MessageResponse>> {
    state.temperatures.delete(path.into_inner()).await?;
    Ok(web::Json(MessageResponse::new(
        "Temperature deleted successfully",
    )))
}

#[cfg(test)]
#[path = "temperatures_tests.rs"]
mod tests;
