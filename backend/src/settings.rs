//! Process configuration loaded once at start-up via OrthoConfig.
//!
//! Values come from the environment (`DB_*`, `SERVER_*`). The structs are
//! built in `main` and handed to server construction; nothing reads the
//! environment afterwards.

use std::ffi::OsString;
use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

/// Errors raised while assembling configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// The configuration sources could not be read or merged.
    #[error("failed to load configuration: {message}")]
    Load { message: String },

    /// A value without a default was not provided.
    #[error("missing configuration value {name}")]
    Missing { name: &'static str },

    /// A provided value is malformed.
    #[error("invalid configuration value {name}: {message}")]
    Invalid { name: &'static str, message: String },
}

fn load_error(err: impl std::fmt::Display) -> SettingsError {
    SettingsError::Load {
        message: err.to_string(),
    }
}

fn program_name() -> [OsString; 1] {
    [OsString::from(env!("CARGO_PKG_NAME"))]
}

/// Connection details for the PostgreSQL store.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DB")]
pub struct DatabaseSettings {
    /// Server host name.
    pub host: Option<String>,
    /// Server port.
    #[ortho_config(default = 5432)]
    pub port: u16,
    /// Login role.
    pub user: Option<String>,
    /// Login password.
    pub pass: Option<String>,
    /// Database name.
    pub name: Option<String>,
    /// Upper bound on pooled connections.
    #[ortho_config(default = 10)]
    pub pool_max_size: u32,
}

impl DatabaseSettings {
    /// Read settings from the environment only.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Load`] when a variable cannot be parsed.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::load_from_iter(program_name()).map_err(load_error)
    }

    /// Assemble a `postgres://` URL, percent-encoding the credentials.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Missing`] when the host, user or database
    /// name is unset, and [`SettingsError::Invalid`] when the host is not a
    /// valid URL host.
    ///
    /// # Examples
    /// ```
    /// use weather_backend::settings::DatabaseSettings;
    ///
    /// let settings = DatabaseSettings {
    ///     host: Some("db".into()),
    ///     port: 5432,
    ///     user: Some("weather".into()),
    ///     pass: Some("p@ss".into()),
    ///     name: Some("climate".into()),
    ///     pool_max_size: 10,
    /// };
    /// assert_eq!(
    ///     settings.database_url().expect("complete settings"),
    ///     "postgres://weather:p%40ss@db:5432/climate"
    /// );
    /// ```
    pub fn database_url(&self) -> Result<String, SettingsError> {
        let host = required(self.host.as_deref(), "DB_HOST")?;
        let user = required(self.user.as_deref(), "DB_USER")?;
        let name = required(self.name.as_deref(), "DB_NAME")?;

        let invalid = |_| SettingsError::Invalid {
            name: "DB_HOST",
            message: format!("cannot form a URL with host {host:?}"),
        };
        let mut url =
            Url::parse(&format!("postgres://{host}")).map_err(|err| SettingsError::Invalid {
                name: "DB_HOST",
                message: err.to_string(),
            })?;
        url.set_username(user).map_err(invalid)?;
        url.set_password(self.pass.as_deref()).map_err(invalid)?;
        url.set_port(Some(self.port)).map_err(invalid)?;
        url.set_path(name);
        Ok(url.into())
    }
}

fn required<'a>(value: Option<&'a str>, name: &'static str) -> Result<&'a str, SettingsError> {
    value
        .filter(|value| !value.is_empty())
        .ok_or(SettingsError::Missing { name })
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SERVER")]
pub struct ServerSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
}

impl ServerSettings {
    /// Read settings from the environment only.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Load`] when a variable cannot be parsed.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::load_from_iter(program_name()).map_err(load_error)
    }

    /// The listen address, defaulting to `0.0.0.0:5000`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Invalid`] when the value is not a socket
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        self.bind_addr
            .as_deref()
            .unwrap_or(DEFAULT_BIND_ADDR)
            .parse()
            .map_err(|err: std::net::AddrParseError| SettingsError::Invalid {
                name: "SERVER_BIND_ADDR",
                message: err.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for configuration parsing.

    use super::*;

    use env_lock::lock_env;
    use rstest::rstest;

    const DEFAULT_DB_PORT: u16 = 5432;
    const DEFAULT_POOL_MAX_SIZE: u32 = 10;

    const DB_VARS: [&str; 6] = [
        "DB_HOST",
        "DB_PORT",
        "DB_USER",
        "DB_PASS",
        "DB_NAME",
        "DB_POOL_MAX_SIZE",
    ];

    fn cleared_db_env() -> [(&'static str, Option<String>); 6] {
        DB_VARS.map(|name| (name, None))
    }

    #[rstest]
    fn database_defaults_apply_when_unset() {
        let _guard = lock_env(cleared_db_env());

        let settings = DatabaseSettings::from_env().expect("config should load");

        assert_eq!(settings.port, DEFAULT_DB_PORT);
        assert_eq!(settings.pool_max_size, DEFAULT_POOL_MAX_SIZE);
        assert_eq!(
            settings.database_url(),
            Err(SettingsError::Missing { name: "DB_HOST" })
        );
    }

    #[rstest]
    fn database_environment_overrides_are_respected() {
        let _guard = lock_env([
            ("DB_HOST", Some("localhost".to_owned())),
            ("DB_PORT", Some("6543".to_owned())),
            ("DB_USER", Some("weather".to_owned())),
            ("DB_PASS", None),
            ("DB_NAME", Some("climate".to_owned())),
            ("DB_POOL_MAX_SIZE", Some("3".to_owned())),
        ]);

        let settings = DatabaseSettings::from_env().expect("config should load");

        assert_eq!(settings.pool_max_size, 3);
        assert_eq!(
            settings.database_url().as_deref(),
            Ok("postgres://weather@localhost:6543/climate")
        );
    }

    #[rstest]
    #[case(None, None, "DB_USER")]
    #[case(Some("weather"), Some(""), "DB_NAME")]
    fn incomplete_database_settings_name_the_gap(
        #[case] user: Option<&str>,
        #[case] name: Option<&str>,
        #[case] missing: &str,
    ) {
        let settings = DatabaseSettings {
            host: Some("db".into()),
            port: DEFAULT_DB_PORT,
            user: user.map(str::to_owned),
            pass: None,
            name: name.map(str::to_owned),
            pool_max_size: DEFAULT_POOL_MAX_SIZE,
        };

        let err = settings.database_url().expect_err("incomplete settings");
        assert_eq!(err.to_string(), format!("missing configuration value {missing}"));
    }

    #[rstest]
    fn bind_addr_defaults_to_port_5000() {
        let _guard = lock_env([("SERVER_BIND_ADDR", None::<String>)]);

        let settings = ServerSettings::from_env().expect("config should load");

        assert_eq!(
            settings.bind_addr(),
            Ok("0.0.0.0:5000".parse().expect("valid address"))
        );
    }

    #[rstest]
    #[case("127.0.0.1:8080", true)]
    #[case("localhost", false)]
    fn bind_addr_must_be_a_socket_address(#[case] raw: &str, #[case] valid: bool) {
        let _guard = lock_env([("SERVER_BIND_ADDR", Some(raw.to_owned()))]);

        let settings = ServerSettings::from_env().expect("config should load");

        assert_eq!(settings.bind_addr().is_ok(), valid);
    }
}
