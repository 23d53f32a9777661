//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use actix_web::App;
use actix_web::test as actix_test;
use rstest::rstest;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[rstest]
#[case(Error::invalid_request("Invalid input"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("City not found"), StatusCode::NOT_FOUND)]
#[case(Error::conflict("Country already exists"), StatusCode::CONFLICT)]
#[case(Error::internal("An error occurred"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), status);
}

#[rstest]
#[actix_web::test]
async fn body_is_the_bare_message_and_header_the_trace_id() {
    let error = Error::internal("relation \"countries\" does not exist").with_trace_id(TRACE_ID);
    let response = ResponseError::error_response(&error);

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .expect("trace-id header is set")
        .to_str()
        .expect("ascii header");
    assert_eq!(header, TRACE_ID);

    let bytes = to_bytes(response.into_body()).await.expect("body");
    let body: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
    assert_eq!(
        body,
        serde_json::json!({"error": "relation \"countries\" does not exist"})
    );
}

#[rstest]
fn missing_trace_id_omits_the_header() {
    let response = ResponseError::error_response(&Error::not_found("Country not found"));
    assert!(response.headers().get(TRACE_ID_HEADER).is_none());
}

#[derive(Debug, serde::Deserialize)]
struct EchoBody {
    #[expect(dead_code, reason = "only deserialisation is exercised")]
    value: f64,
}

async fn echo(_body: web::Json<EchoBody>, _id: web::Path<i64>) -> HttpResponse {
    HttpResponse::Ok().finish()
}

#[rstest]
#[case("/1", "{not json", StatusCode::BAD_REQUEST, "Invalid input")]
#[case("/1", r#"{"value": "warm"}"#, StatusCode::BAD_REQUEST, "Invalid input")]
#[case("/abc", r#"{"value": 1.5}"#, StatusCode::BAD_REQUEST, "Invalid identifier")]
#[case("/1", r#"{"value": 1.5}"#, StatusCode::OK, "")]
#[actix_web::test]
async fn extractor_failures_share_the_error_shape(
    #[case] uri: &str,
    #[case] payload: &str,
    #[case] status: StatusCode,
    #[case] message: &str,
) {
    let app = actix_test::init_service(
        App::new()
            .app_data(json_config())
            .app_data(path_config())
            .route("/{id}", web::post().to(echo)),
    )
    .await;
    let req = actix_test::TestRequest::post()
        .uri(uri)
        .insert_header(("content-type", "application/json"))
        .set_payload(payload.to_owned())
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), status);
    if !message.is_empty() {
        let body: ErrorBody = actix_test::read_body_json(res).await;
        assert_eq!(body.error, message);
    }
}
