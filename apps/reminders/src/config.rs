use std::net::SocketAddr;

use thiserror::Error;

const DEFAULT_BIND: &str = "127.0.0.1:8080";
pub const DEFAULT_BASE_PATH: &str = "/v1/reminders";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind: SocketAddr,
    pub base_path: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("REMINDERS_BIND '{0}' is not a socket address")]
    InvalidBind(String),
    #[error("REMINDERS_BASE_PATH '{0}' must start with '/'")]
    InvalidBasePath(String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_raw = lookup("REMINDERS_BIND").unwrap_or_else(|| DEFAULT_BIND.into());
        let bind = bind_raw
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBind(bind_raw.clone()))?;

        let base_raw = lookup("REMINDERS_BASE_PATH").unwrap_or_else(|| DEFAULT_BASE_PATH.into());
        let base_path = normalize_base_path(&base_raw)?;

        Ok(Self { bind, base_path })
    }
}

fn normalize_base_path(raw: &str) -> Result<String, ConfigError> {
    if !raw.starts_with('/') {
        return Err(ConfigError::InvalidBasePath(raw.to_string()));
    }
    let trimmed = raw.trim_end_matches('/');
    if trimmed.is_empty() {
        Ok("/".into())
    } else {
        Ok(trimmed.to_string())
    }
}
