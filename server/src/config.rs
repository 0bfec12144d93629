//! Server configuration parsed from environment variables.

use std::path::PathBuf;
use std::time::Duration;

use axum::http::HeaderValue;
use chrono::TimeDelta;
use chrono_tz::Tz;

use crate::services::portal::DEFAULT_OPEN_CLASSROOMS_URL;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_BUILDINGS_PATH: &str = "buildings.json";
pub const DEFAULT_CAMPUS_TIMEZONE: Tz = chrono_tz::America::Toronto;
pub const DEFAULT_LOOKAHEAD_MINUTES: u32 = 60;
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    #[error("unknown CAMPUS_TIMEZONE: {0}")]
    InvalidTimezone(String),

    #[error("invalid CORS_ALLOW_ORIGIN: {0}")]
    InvalidCorsOrigin(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub buildings_path: PathBuf,
    pub open_classrooms_url: String,
    /// `None` allows any origin.
    pub cors_allow_origin: Option<HeaderValue>,
    pub campus_timezone: Tz,
    pub lookahead_minutes: u32,
    pub upstream_timeout_secs: u64,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 8000
    /// - `BUILDINGS_PATH`: default `buildings.json`
    /// - `OPEN_CLASSROOMS_URL`: portal open-classroom feed
    /// - `CORS_ALLOW_ORIGIN`: exact origin, or `*` (default)
    /// - `CAMPUS_TIMEZONE`: IANA name, default `America/Toronto`
    /// - `LOOKAHEAD_MINUTES`: default 60
    /// - `UPSTREAM_TIMEOUT_SECS`: default 30
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let buildings_path = std::env::var("BUILDINGS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_BUILDINGS_PATH));
        let open_classrooms_url =
            std::env::var("OPEN_CLASSROOMS_URL").unwrap_or_else(|_| DEFAULT_OPEN_CLASSROOMS_URL.to_string());
        let cors_allow_origin = parse_cors_origin(std::env::var("CORS_ALLOW_ORIGIN").ok().as_deref())?;
        let campus_timezone = parse_timezone(std::env::var("CAMPUS_TIMEZONE").ok().as_deref())?;

        Ok(Self {
            port,
            buildings_path,
            open_classrooms_url,
            cors_allow_origin,
            campus_timezone,
            lookahead_minutes: env_parse("LOOKAHEAD_MINUTES", DEFAULT_LOOKAHEAD_MINUTES),
            upstream_timeout_secs: env_parse("UPSTREAM_TIMEOUT_SECS", DEFAULT_UPSTREAM_TIMEOUT_SECS),
        })
    }

    #[must_use]
    pub fn lookahead(&self) -> TimeDelta {
        TimeDelta::minutes(i64::from(self.lookahead_minutes))
    }

    #[must_use]
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(v) => v.parse().map_err(|_| ConfigError::InvalidPort(v.to_string())),
    }
}

fn parse_timezone(raw: Option<&str>) -> Result<Tz, ConfigError> {
    match raw {
        None => Ok(DEFAULT_CAMPUS_TIMEZONE),
        Some(v) => v.parse().map_err(|_| ConfigError::InvalidTimezone(v.to_string())),
    }
}

fn parse_cors_origin(raw: Option<&str>) -> Result<Option<HeaderValue>, ConfigError> {
    match raw.map(str::trim) {
        None | Some("*" | "") => Ok(None),
        Some(v) => HeaderValue::from_str(v)
            .map(Some)
            .map_err(|_| ConfigError::InvalidCorsOrigin(v.to_string())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
