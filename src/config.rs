//! Configuration loading from the environment and an optional TOML file.

use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Environment variable holding the PostgreSQL connection string.
pub const DATABASE_URL_ENV: &str = "NEON_DATABASE_URL";

/// Environment variable pointing at an optional TOML configuration file.
pub const CONFIG_PATH_ENV: &str = "OGE_CONFIG";

/// Environment variable overriding the bind host.
pub const HOST_ENV: &str = "HOST";

/// Environment variable overriding the bind port.
pub const PORT_ENV: &str = "PORT";

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is unset or empty.
    #[error("environment variable {0} is not set")]
    MissingVar(&'static str),
    /// Failed to read configuration file.
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse TOML configuration.
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// Invalid configuration value.
    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server configuration.
    pub server: ServerConfig,
    /// Database pool configuration.
    pub database: DatabaseConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port number to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// Returns the `host:port` string the listener binds to.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database pool configuration.
///
/// The connection string never comes from the TOML file; it is always read
/// from [`DATABASE_URL_ENV`].
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// PostgreSQL connection string.
    #[serde(skip)]
    pub url: String,
    /// Connections kept open while idle.
    pub min_connections: u32,
    /// Upper bound on concurrently open connections.
    pub max_connections: u32,
    /// How long a request waits for a free connection, in seconds.
    pub acquire_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            min_connections: 1,
            max_connections: 5,
            acquire_timeout_secs: 30,
        }
    }
}

// Keeps credentials embedded in the URL out of logs.
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &"<redacted>")
            .field("min_connections", &self.min_connections)
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout_secs", &self.acquire_timeout_secs)
            .finish()
    }
}

impl Config {
    /// Builds the configuration from the process environment.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingVar`] if [`DATABASE_URL_ENV`] is unset or
    /// empty, or another error if the optional config file or an override is
    /// invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration using `lookup` to resolve environment variables.
    ///
    /// # Errors
    /// See [`Config::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match non_empty(lookup(CONFIG_PATH_ENV)) {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        config.database.url =
            non_empty(lookup(DATABASE_URL_ENV)).ok_or(ConfigError::MissingVar(DATABASE_URL_ENV))?;

        if let Some(host) = non_empty(lookup(HOST_ENV)) {
            config.server.host = host;
        }
        if let Some(port) = non_empty(lookup(PORT_ENV)) {
            config.server.port = port
                .parse()
                .map_err(|_| ConfigError::InvalidValue(format!("{PORT_ENV} must be a valid port")))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    /// Returns error if file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    /// Returns error if content cannot be parsed.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration values.
    fn validate(&self) -> Result<(), ConfigError> {
        let db = &self.database;
        if db.max_connections == 0 {
            return Err(ConfigError::InvalidValue(
                "database.max_connections must be positive".to_string(),
            ));
        }
        if db.min_connections > db.max_connections {
            return Err(ConfigError::InvalidValue(format!(
                "database.min_connections ({}) exceeds max_connections ({})",
                db.min_connections, db.max_connections
            )));
        }
        if db.acquire_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue(
                "database.acquire_timeout_secs must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
