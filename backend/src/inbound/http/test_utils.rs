//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, web};
use actix_web::test as actix_test;
use rstest::fixture;
use serde_json::{Value, json};

use crate::inbound::http::api_scope;
use crate::inbound::http::state::HttpState;
use crate::test_support::InMemoryStore;

/// Status and decoded JSON body of a test response.
#[derive(Debug)]
pub struct Reply {
    pub status: StatusCode,
    pub body: Value,
}

/// API routes served over an [`InMemoryStore`].
pub struct StoreApp {
    pub store: Arc<InMemoryStore>,
    state: web::Data<HttpState>,
}

impl StoreApp {
    /// Run `request` through a fresh service sharing this store.
    pub async fn send(&self, request: actix_test::TestRequest) -> Reply {
        let app = actix_test::init_service(
            App::new()
                .app_data(self.state.clone())
                .service(api_scope()),
        )
        .await;
        let res = actix_test::call_service(&app, request.to_request()).await;
        let status = res.status();
        let bytes = actix_test::read_body(res).await;
        Reply {
            status,
            body: serde_json::from_slice(&bytes).unwrap_or(Value::Null),
        }
    }

    async fn created(&self, uri: &str, body: Value) -> i64 {
        let reply = self
            .send(actix_test::TestRequest::post().uri(uri).set_json(body))
            .await;
        assert_eq!(reply.status, StatusCode::CREATED, "{uri}: {}", reply.body);
        reply.body["id"].as_i64().expect("numeric id")
    }

    pub async fn create_country(&self, name: &str, lat: f64, lon: f64) -> i64 {
        self.created(
            "/api/countries",
            json!({"nume": name, "lat": lat, "lon": lon}),
        )
        .await
    }

    pub async fn create_city(&self, country_id: i64, name: &str, lat: f64, lon: f64) -> i64 {
        self.created(
            "/api/cities",
            json!({"idTara": country_id, "nume": name, "lat": lat, "lon": lon}),
        )
        .await
    }

    pub async fn record_temperature(&self, city_id: i64, value: f64, timestamp: &str) -> i64 {
        self.created(
            "/api/temperatures",
            json!({"idOras": city_id, "valoare": value, "timestamp": timestamp}),
        )
        .await
    }
}

/// Empty store behind the full API scope.
#[fixture]
pub fn store_app() -> StoreApp {
    let store = Arc::new(InMemoryStore::new());
    let state = web::Data::new(InMemoryStore::http_state(&store));
    StoreApp { store, state }
}
