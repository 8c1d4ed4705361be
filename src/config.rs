// src/config.rs
use std::env;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;
use url::Url;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_MAX_WORKERS: usize = 8;
const DEFAULT_API_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{name} has an invalid value {value:?}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the rental backend's REST API, e.g. `https://api.example.com/v1/`.
    pub api_base_url: Url,
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub api_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a config from any name -> value lookup, so tests don't touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let raw_base = lookup("PRICING_API_BASE_URL")
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::Missing("PRICING_API_BASE_URL"))?;
        let api_base_url = Url::parse(raw_base.trim()).map_err(|e| ConfigError::Invalid {
            name: "PRICING_API_BASE_URL",
            value: raw_base.clone(),
            reason: e.to_string(),
        })?;
        if api_base_url.cannot_be_a_base() {
            return Err(ConfigError::Invalid {
                name: "PRICING_API_BASE_URL",
                value: raw_base,
                reason: "not a hierarchical url".into(),
            });
        }

        let bind_addr = parse_or(&lookup, "PRICING_BIND_ADDR", DEFAULT_BIND_ADDR.parse().ok())?;
        let max_workers = parse_or(&lookup, "PRICING_MAX_WORKERS", Some(DEFAULT_MAX_WORKERS))?;
        let timeout_secs: u64 =
            parse_or(&lookup, "PRICING_API_TIMEOUT_SECS", Some(DEFAULT_API_TIMEOUT_SECS))?;

        if max_workers == 0 {
            return Err(ConfigError::Invalid {
                name: "PRICING_MAX_WORKERS",
                value: "0".into(),
                reason: "must be at least 1".into(),
            });
        }

        Ok(Self {
            api_base_url,
            bind_addr,
            max_workers,
            api_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: Option<T>) -> Result<T, ConfigError>
where
    F: Fn(&'static str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            name,
            value: raw.clone(),
            reason: e.to_string(),
        }),
        None => default.ok_or(ConfigError::Missing(name)),
    }
}
