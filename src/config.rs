//! Process configuration read from the environment.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Default listening host.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default listening port.
pub const DEFAULT_PORT: u16 = 8080;

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The port is not a valid `u16`.
    #[error("invalid port '{0}'")]
    InvalidPort(String),
    /// A boolean flag holds an unrecognised value.
    #[error("invalid value '{value}' for {key}, expected true or false")]
    InvalidFlag {
        /// Environment variable name.
        key: &'static str,
        /// Rejected value.
        value: String,
    },
    /// The log format is not recognised.
    #[error("invalid log format '{0}', expected pretty or json")]
    InvalidLogFormat(String),
}

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidLogFormat(value.to_owned())),
        }
    }
}

/// Runtime configuration of the API process.
#[derive(Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Listening host.
    pub host: String,
    /// Listening port.
    pub port: u16,
    /// `PostgreSQL` connection URL; the in-memory store is used when unset.
    pub database_url: Option<String>,
    /// Whether to seed demo tasks into an empty store at startup.
    pub seed: bool,
    /// Tracing output format.
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            database_url: None,
            seed: true,
            log_format: LogFormat::Pretty,
        }
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database_url", &self.database_url.as_ref().map(|_| "<redacted>"))
            .field("seed", &self.seed)
            .field("log_format", &self.log_format)
            .finish()
    }
}

impl AppConfig {
    /// Reads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable holds an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`.
    ///
    /// Recognised keys: `TODO_HOST`, `TODO_PORT` (falling back to `PORT`),
    /// `DATABASE_URL`, `TODO_SEED`, and `TODO_LOG_FORMAT`. Empty values are
    /// treated as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable holds an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let port = match read("TODO_PORT").or_else(|| read("PORT")) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.port,
        };
        let seed = match read("TODO_SEED") {
            Some(raw) => parse_flag("TODO_SEED", &raw)?,
            None => defaults.seed,
        };
        let log_format = match read("TODO_LOG_FORMAT") {
            Some(raw) => raw.parse()?,
            None => defaults.log_format,
        };

        Ok(Self {
            host: read("TODO_HOST").unwrap_or(defaults.host),
            port,
            database_url: read("DATABASE_URL"),
            seed,
            log_format,
        })
    }

    /// Returns the `host:port` address to bind.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_flag(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key,
            value: raw.to_owned(),
        }),
    }
}
