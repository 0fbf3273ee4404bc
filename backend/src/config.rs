//! Server configuration, read from environment variables.
//!
//! | Variable             | Default             |
//! |----------------------|---------------------|
//! | `DASHBOARD_HOST`     | `127.0.0.1`         |
//! | `DASHBOARD_PORT`     | `8080`              |
//! | `DASHBOARD_DATABASE` | `dashboards.sqlite` |

use std::env;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

const HOST_VAR: &str = "DASHBOARD_HOST";
const PORT_VAR: &str = "DASHBOARD_PORT";
const DATABASE_VAR: &str = "DASHBOARD_DATABASE";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATABASE: &str = "dashboards.sqlite";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a port number, got `{value}`")]
    InvalidPort {
        var: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup. Unset keys fall
    /// back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup(PORT_VAR) {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidPort {
                    var: PORT_VAR,
                    value,
                    source,
                })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: lookup(HOST_VAR).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            database_path: lookup(DATABASE_VAR)
                .unwrap_or_else(|| DEFAULT_DATABASE.to_string())
                .into(),
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
