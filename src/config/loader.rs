//! Load `AppConfig` from the process environment (after `.env`) or from any key lookup.

use crate::config::types::*;
use crate::error::ConfigError;
use std::net::SocketAddr;

pub const ENV_BIND: &str = "CASE_BRIDGE_BIND";
pub const ENV_LOG: &str = "RUST_LOG";
pub const ENV_BODY_LIMIT: &str = "CASE_BRIDGE_BODY_LIMIT";
pub const ENV_SEED: &str = "CASE_BRIDGE_SEED";

impl AppConfig {
    /// Read `.env` if present, then the process environment. Unset keys take their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from a key -> value lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = AppConfig::default();

        let bind_addr = match get(ENV_BIND) {
            Some(v) => v.parse::<SocketAddr>().map_err(|e| ConfigError::Invalid {
                key: ENV_BIND,
                value: v.clone(),
                reason: e.to_string(),
            })?,
            None => defaults.bind_addr,
        };
        let log_filter = get(ENV_LOG).unwrap_or(defaults.log_filter);
        let body_limit_bytes = match get(ENV_BODY_LIMIT) {
            Some(v) => match v.parse::<usize>() {
                Ok(0) => {
                    return Err(ConfigError::Invalid {
                        key: ENV_BODY_LIMIT,
                        value: v,
                        reason: "must be greater than zero".into(),
                    })
                }
                Ok(n) => n,
                Err(e) => {
                    return Err(ConfigError::Invalid {
                        key: ENV_BODY_LIMIT,
                        value: v,
                        reason: e.to_string(),
                    })
                }
            },
            None => defaults.body_limit_bytes,
        };
        let seed_demo_data = match get(ENV_SEED) {
            Some(v) => parse_bool(&v).ok_or_else(|| ConfigError::Invalid {
                key: ENV_SEED,
                value: v.clone(),
                reason: "expected true/false, 1/0, yes/no".into(),
            })?,
            None => defaults.seed_demo_data,
        };

        Ok(AppConfig {
            bind_addr,
            log_filter,
            body_limit_bytes,
            seed_demo_data,
        })
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
