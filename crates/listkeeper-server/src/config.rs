//! Server configuration read from environment variables.
//!
//! - `LISTKEEPER_DATABASE_URI` (required): store connection string, see
//!   [`listkeeper_store::DatabaseUri`]
//! - `LISTKEEPER_HOST`: listen address (default: "0.0.0.0")
//! - `LISTKEEPER_PORT`: listen port (default: "3001")
//! - `LISTKEEPER_DEBUG`: `1`/`true`/`on`/`yes` enables debug logging

use thiserror::Error;

pub const DATABASE_URI_VAR: &str = "LISTKEEPER_DATABASE_URI";
pub const HOST_VAR: &str = "LISTKEEPER_HOST";
pub const PORT_VAR: &str = "LISTKEEPER_PORT";
pub const DEBUG_VAR: &str = "LISTKEEPER_DEBUG";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3001;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_uri: String,
    pub host: String,
    pub port: u16,
    pub debug: bool,
}

impl ServerConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_uri = lookup(DATABASE_URI_VAR)
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing(DATABASE_URI_VAR))?;

        let host = lookup(HOST_VAR).unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup(PORT_VAR) {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                var: PORT_VAR,
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };

        let debug = lookup(DEBUG_VAR).map(|v| is_truthy(&v)).unwrap_or(false);

        Ok(ServerConfig {
            database_uri,
            host,
            port,
            debug,
        })
    }

    /// The `host:port` pair to bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Default tracing filter when `RUST_LOG` is unset.
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "info"
        }
    }
}

fn is_truthy(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "on" | "yes"
    )
}
