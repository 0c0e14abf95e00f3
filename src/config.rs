use sqlx::postgres::PgConnectOptions;
use std::env;
use thiserror::Error;

/// Store settings that must all be present for the service to start.
pub const REQUIRED_KEYS: [&str; 5] = ["PGHOST", "PGPORT", "PGUSER", "PGPASSWORD", "PGDATABASE"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Every required key that was unset or empty, in `REQUIRED_KEYS` order.
    #[error("missing required configuration: {}", .0.join(", "))]
    Missing(Vec<&'static str>),

    #[error("{key} must be a valid port number (0-65535), got '{value}'")]
    InvalidPort { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub pg_host: String,
    pub pg_port: u16,
    pub pg_user: String,
    pub pg_password: String,
    pub pg_database: String,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// All missing store keys are collected before failing, so a single
    /// error names everything the operator still has to set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let missing: Vec<&'static str> = REQUIRED_KEYS
            .iter()
            .copied()
            .filter(|&key| present(key).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        let value_of = |key: &str| present(key).unwrap_or_default();

        let pg_port = parse_port("PGPORT", &value_of("PGPORT"))?;

        let service_port = match present("SERVICE_PORT") {
            Some(raw) => parse_port("SERVICE_PORT", &raw)?,
            None => 8080,
        };

        let service_host = present("SERVICE_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        Ok(Config {
            pg_host: value_of("PGHOST"),
            pg_port,
            pg_user: value_of("PGUSER"),
            pg_password: value_of("PGPASSWORD"),
            pg_database: value_of("PGDATABASE"),
            service_port,
            service_host,
        })
    }

    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.pg_host)
            .port(self.pg_port)
            .username(&self.pg_user)
            .password(&self.pg_password)
            .database(&self.pg_database)
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  PostgreSQL host: {}:{}", self.pg_host, self.pg_port);
        tracing::info!("  PostgreSQL user: {}", self.pg_user);
        tracing::info!("  PostgreSQL database: {}", self.pg_database);
        tracing::info!("  Service listening on: {}", self.listen_addr());
    }
}

fn parse_port(key: &'static str, raw: &str) -> Result<u16, ConfigError> {
    raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort {
        key,
        value: raw.to_string(),
    })
}
