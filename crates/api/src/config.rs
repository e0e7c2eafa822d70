//! Runtime configuration, read from the environment.

use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

pub const ENV_BIND_ADDR: &str = "MAGAZYN_BIND_ADDR";
pub const ENV_SESSION_IDLE_SECS: &str = "MAGAZYN_SESSION_IDLE_SECS";
pub const ENV_PRUNE_INTERVAL_SECS: &str = "MAGAZYN_PRUNE_INTERVAL_SECS";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}={value:?} is invalid: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    /// Sessions idle for this long are discarded.
    pub session_idle: Duration,
    /// How often the background task sweeps idle sessions.
    pub prune_interval: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            session_idle: Duration::from_secs(3600),
            prune_interval: Duration::from_secs(60),
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a config from an arbitrary variable source; unset variables keep
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_BIND_ADDR) {
            config.bind_addr = raw.trim().parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::Invalid {
                    var: ENV_BIND_ADDR,
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?;
        }
        if let Some(raw) = lookup(ENV_SESSION_IDLE_SECS) {
            config.session_idle = parse_secs(ENV_SESSION_IDLE_SECS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_PRUNE_INTERVAL_SECS) {
            config.prune_interval = parse_secs(ENV_PRUNE_INTERVAL_SECS, &raw)?;
        }

        Ok(config)
    }
}

fn parse_secs(var: &'static str, raw: &str) -> Result<Duration, ConfigError> {
    let invalid = |reason: String| ConfigError::Invalid {
        var,
        value: raw.to_string(),
        reason,
    };
    let secs: u64 = raw
        .trim()
        .parse()
        .map_err(|e: std::num::ParseIntError| invalid(e.to_string()))?;
    if secs == 0 {
        return Err(invalid("must be at least 1 second".to_string()));
    }
    Ok(Duration::from_secs(secs))
}
