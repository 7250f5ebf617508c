use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_MAX_CONNECTIONS: u32 = 20;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 2;
const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 30;
const DEFAULT_SLOW_ACQUIRE_THRESHOLD_MS: u64 = 5000;
const DEFAULT_CACHE_TTL_SECS: u64 = 300;
const DEFAULT_BCRYPT_COST: u32 = 12;

pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,

    pub host: String,
    pub port: u16,

    pub max_connections: u32,
    pub connect_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub slow_acquire_threshold_ms: u64,

    pub cache_ttl_secs: u64,
    pub bcrypt_cost: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            jwt_secret: std::env::var("JWT_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?,
            host: std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: parse_env_or("PORT", DEFAULT_PORT)?,
            max_connections: parse_env_or("DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
            connect_timeout_secs: parse_env_or(
                "DATABASE_CONNECT_TIMEOUT_SECS",
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?,
            idle_timeout_secs: parse_env_or(
                "DATABASE_IDLE_TIMEOUT_SECS",
                DEFAULT_IDLE_TIMEOUT_SECS,
            )?,
            slow_acquire_threshold_ms: parse_env_or(
                "DATABASE_SLOW_ACQUIRE_THRESHOLD_MS",
                DEFAULT_SLOW_ACQUIRE_THRESHOLD_MS,
            )?,
            cache_ttl_secs: parse_env_or("CACHE_TTL_SECS", DEFAULT_CACHE_TTL_SECS)?,
            bcrypt_cost: parse_env_or("BCRYPT_COST", DEFAULT_BCRYPT_COST)?,
        })
    }
}

/// Reads an optional environment variable, falling back to `default` when the
/// variable is unset and failing when it is set to an unparseable value.
fn parse_env_or<T: FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match std::env::var(name) {
        Ok(value) => value
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidEnvVar(name.to_string()).into()),
        Err(_) => Ok(default),
    }
}
