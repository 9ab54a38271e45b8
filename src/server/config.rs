//! Application configuration loaded from environment variables.

use crate::server::error::config::ConfigError;

static DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/citadel.db?mode=rwc";
static DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// Runtime configuration for the Citadel server
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Database connection URL, Postgres or SQLite
    pub database_url: String,
    /// Address the HTTP listener binds to
    pub bind_address: String,
    /// Port the HTTP listener binds to
    pub port: u16,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// # Environment
    /// - `DATABASE_URL` - Defaults to a SQLite file under `/tmp` when unset
    /// - `BIND_ADDRESS` - Defaults to `0.0.0.0`
    /// - `PORT` - Defaults to `3000`
    ///
    /// # Returns
    /// - `Ok(Config)` - Configuration read successfully
    /// - `Err(ConfigError::InvalidEnvValue)` - `PORT` is not a valid port number
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = match lookup("DATABASE_URL") {
            // Some hosting providers still hand out the legacy postgres:// scheme
            Some(url) if url.starts_with("postgres://") => {
                url.replacen("postgres://", "postgresql://", 1)
            }
            Some(url) => url,
            None => DEFAULT_DATABASE_URL.to_string(),
        };

        let bind_address =
            lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let port = match lookup("PORT") {
            Some(port) => port
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "PORT".to_string(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            bind_address,
            port,
        })
    }

    /// Address in `host:port` form for binding the TCP listener
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}
