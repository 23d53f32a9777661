//! Domain primitives, aggregates and use-case services.
//!
//! Purpose: define the geography entities (countries, cities, temperature
//! readings), the rules applied before the store is touched, and the
//! per-endpoint reporting of store failures. Nothing here knows about HTTP or
//! SQL.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure with a client message.
//! - Country, City, TemperatureReading and their drafts.
//! - TemperatureFilter / DateRange / TemperatureScope: listing criteria.
//! - CountryService, CityService, TemperatureService: driving-port
//!   implementations over the repository ports.

pub mod calendar_date;
pub mod city;
pub mod city_service;
pub mod country;
pub mod country_service;
pub mod error;
pub mod ids;
pub mod ports;
pub mod store_failure;
pub mod temperature;
pub mod temperature_service;
pub mod trace_id;

pub use self::calendar_date::{DATE_FORMAT, has_date_shape};
pub use self::city::{City, CityDraft};
pub use self::city_service::CityService;
pub use self::country::{Country, CountryDraft};
pub use self::country_service::CountryService;
pub use self::error::{Error, ErrorCode};
pub use self::ids::{CityId, CountryId, TemperatureId};
pub use self::store_failure::StoreFailurePolicy;
pub use self::temperature::{
    DateRange, TemperatureChange, TemperatureDraft, TemperatureFilter, TemperatureReading,
    TemperatureScope,
};
pub use self::temperature_service::TemperatureService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

