//! Backend entry-point: loads configuration, builds the connection pool and
//! serves the REST API.

mod server;

use std::fmt::Display;

use actix_web::web;
#[cfg(feature = "metrics")]
use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use weather_backend::inbound::http::health::HealthState;
use weather_backend::outbound::persistence::{DbPool, PoolConfig};
use weather_backend::settings::{DatabaseSettings, ServerSettings};

fn startup_error(context: &str, error: impl Display) -> std::io::Error {
    std::io::Error::other(format!("{context}: {error}"))
}

/// Build Prometheus middleware, logging and continuing without it on failure.
#[cfg(feature = "metrics")]
fn initialize_metrics<F, E>(make: F) -> Option<PrometheusMetrics>
where
    F: FnOnce() -> Result<PrometheusMetrics, E>,
    E: Display,
{
    match make() {
        Ok(metrics) => Some(metrics),
        Err(error) => {
            warn!(%error, "metrics initialisation failed; continuing without /metrics");
            None
        }
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let database =
        DatabaseSettings::from_env().map_err(|e| startup_error("database settings", e))?;
    let listener =
        ServerSettings::from_env().map_err(|e| startup_error("server settings", e))?;
    let bind_addr = listener
        .bind_addr()
        .map_err(|e| startup_error("server settings", e))?;
    let database_url = database
        .database_url()
        .map_err(|e| startup_error("database settings", e))?;

    let pool = DbPool::new(PoolConfig::new(database_url).with_max_size(database.pool_max_size))
        .await
        .map_err(|e| startup_error("database pool", e))?;

    let config = ServerConfig::new(bind_addr, pool);
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(initialize_metrics(|| {
        PrometheusMetricsBuilder::new("weather")
            .endpoint("/metrics")
            .build()
    }));

    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await
}

#[cfg(all(test, feature = "metrics"))]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn initialize_metrics_returns_none_on_error() {
        let metrics = initialize_metrics(|| -> Result<_, &str> { Err("boom") });
        assert!(metrics.is_none());
    }

    #[rstest]
    fn initialize_metrics_returns_metrics_on_success() {
        let metrics = initialize_metrics(|| {
            PrometheusMetricsBuilder::new("test")
                .endpoint("/metrics")
                .build()
        });
        assert!(metrics.is_some());
    }
}
