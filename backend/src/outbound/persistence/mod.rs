//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the geography repository ports backed by
//! PostgreSQL through `diesel-async` and a `bb8` connection pool.
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain types; existence checks and failure reporting live in the domain
//!   services.
//! - **Internal models**: row structs (`models.rs`) and the schema
//!   (`schema.rs`) never leave this module.
//! - **Typed errors**: every failure is mapped to `RepositoryError`.
//!
//! # Example
//!
//! ```no_run
//! use weather_backend::outbound::persistence::{DbPool, DieselCountryRepository, PoolConfig};
//!
//! # async fn wire() -> Result<(), weather_backend::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/weather")).await?;
//! let countries = DieselCountryRepository::new(pool);
//! # let _ = countries;
//! # Ok(())
//! # }
//! ```

mod diesel_city_repository;
mod diesel_country_repository;
mod diesel_error_mapping;
mod diesel_temperature_repository;
mod models;
mod pool;
mod schema;

pub use diesel_city_repository::DieselCityRepository;
pub use diesel_country_repository::DieselCountryRepository;
pub use diesel_temperature_repository::DieselTemperatureRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
