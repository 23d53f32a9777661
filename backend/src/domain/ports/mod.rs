//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports (`*Command`, `*Query`) are what the HTTP adapter calls.
//! Driven ports (`*Repository`) are what the services call and the Diesel
//! adapters implement.

mod macros;
pub(crate) use macros::define_port_error;

mod city_command;
mod city_query;
mod city_repository;
mod country_command;
mod country_query;
mod country_repository;
mod repository_error;
mod temperature_command;
mod temperature_query;
mod temperature_repository;

#[cfg(test)]
pub use city_command::MockCityCommand;
pub use city_command::{CityCommand, CityRequest};
#[cfg(test)]
pub use city_query::MockCityQuery;
pub use city_query::CityQuery;
#[cfg(test)]
pub use city_repository::MockCityRepository;
pub use city_repository::CityRepository;
#[cfg(test)]
pub use country_command::MockCountryCommand;
pub use country_command::CountryCommand;
#[cfg(test)]
pub use country_query::MockCountryQuery;
pub use country_query::CountryQuery;
#[cfg(test)]
pub use country_repository::MockCountryRepository;
pub use country_repository::CountryRepository;
pub use repository_error::RepositoryError;
#[cfg(test)]
pub use temperature_command::MockTemperatureCommand;
pub use temperature_command::{
    ChangeTemperatureRequest, RecordTemperatureRequest, TemperatureCommand,
};
#[cfg(test)]
pub use temperature_query::MockTemperatureQuery;
pub use temperature_query::TemperatureQuery;
#[cfg(test)]
pub use temperature_repository::MockTemperatureRepository;
pub use temperature_repository::TemperatureRepository;
