//! Configuration management for the splash demo.
//!
//! Loads configuration from environment variables with sensible defaults.

use serde::{Deserialize, Serialize};
use splash_runtime::StoreConfig;
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Errors from reading configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `SPLASH_STRATEGY` names no known strategy
    #[error("unknown strategy {0:?} (expected local, context or store)")]
    UnknownStrategy(String),

    /// A numeric or boolean variable did not parse
    #[error("invalid value {value:?} for {key}")]
    InvalidValue {
        /// Variable name
        key: &'static str,
        /// Raw value found
        value: String,
    },
}

/// Where the counter lives
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Inside the counter page
    Local,
    /// In a provider shared through context handles
    Context,
    /// In the centralized store
    #[default]
    Store,
}

impl FromStr for Strategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "context" => Ok(Self::Context),
            "store" => Ok(Self::Store),
            _ => Err(ConfigError::UnknownStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Local => "local",
            Self::Context => "context",
            Self::Store => "store",
        })
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Which sharing strategy the demo runs
    pub strategy: Strategy,
    /// Actions kept in the store's history (0 disables it)
    pub history_capacity: usize,
    /// Capacity of the effect action broadcast
    pub broadcast_capacity: usize,
    /// Graceful shutdown timeout in seconds
    pub shutdown_timeout_secs: u64,
    /// Print Prometheus metrics on exit
    pub print_metrics: bool,
    /// Tracing filter directives
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            history_capacity: 64,
            broadcast_capacity: 16,
            shutdown_timeout_secs: 5,
            print_metrics: false,
            log_filter: "splash=debug,splash_runtime=debug".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set to something unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set to something unparseable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let strategy = match lookup("SPLASH_STRATEGY") {
            Some(raw) => raw.parse()?,
            None => defaults.strategy,
        };

        Ok(Self {
            strategy,
            history_capacity: parse_or(&lookup, "SPLASH_HISTORY_CAPACITY", defaults.history_capacity)?,
            broadcast_capacity: parse_or(
                &lookup,
                "SPLASH_BROADCAST_CAPACITY",
                defaults.broadcast_capacity,
            )?,
            shutdown_timeout_secs: parse_or(
                &lookup,
                "SPLASH_SHUTDOWN_TIMEOUT_SECS",
                defaults.shutdown_timeout_secs,
            )?,
            print_metrics: flag_or(&lookup, "SPLASH_PRINT_METRICS", defaults.print_metrics)?,
            log_filter: lookup("RUST_LOG").unwrap_or(defaults.log_filter),
        })
    }

    /// Graceful shutdown timeout
    #[must_use]
    pub const fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }

    /// Store settings derived from this configuration
    #[must_use]
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::default()
            .with_history_capacity(self.history_capacity)
            .with_broadcast_capacity(self.broadcast_capacity)
            .with_shutdown_timeout(self.shutdown_timeout())
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
        None => Ok(default),
    }
}

/// Booleans accept `true`/`false`, `1`/`0`, `yes`/`no` and `on`/`off`
fn flag_or<F>(lookup: &F, key: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue { key, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.strategy, Strategy::Store);
        assert_eq!(config.shutdown_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("SPLASH_STRATEGY", "Context"),
            ("SPLASH_HISTORY_CAPACITY", "0"),
            ("SPLASH_PRINT_METRICS", "true"),
            ("RUST_LOG", "warn"),
        ])
        .unwrap();

        assert_eq!(config.strategy, Strategy::Context);
        assert_eq!(config.history_capacity, 0);
        assert!(config.print_metrics);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_unknown_strategy() {
        assert_eq!(
            config_from(&[("SPLASH_STRATEGY", "redux")]),
            Err(ConfigError::UnknownStrategy("redux".to_string()))
        );
    }

    #[test]
    fn test_invalid_number() {
        let err = config_from(&[("SPLASH_BROADCAST_CAPACITY", "many")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: "SPLASH_BROADCAST_CAPACITY",
                value: "many".to_string()
            }
        );
    }

    #[test]
    fn test_flag_spellings() {
        for raw in ["1", "yes", "ON", "True"] {
            let config = config_from(&[("SPLASH_PRINT_METRICS", raw)]).unwrap();
            assert!(config.print_metrics, "{raw} should enable metrics");
        }
        for raw in ["0", "no", "off", "false"] {
            let config = config_from(&[("SPLASH_PRINT_METRICS", raw)]).unwrap();
            assert!(!config.print_metrics, "{raw} should disable metrics");
        }
        assert_eq!(
            config_from(&[("SPLASH_PRINT_METRICS", "maybe")]),
            Err(ConfigError::InvalidValue {
                key: "SPLASH_PRINT_METRICS",
                value: "maybe".to_string()
            })
        );
    }

    #[test]
    fn test_strategy_display_round_trips() {
        for strategy in [Strategy::Local, Strategy::Context, Strategy::Store] {
            assert_eq!(strategy.to_string().parse::<Strategy>(), Ok(strategy));
        }
    }
}
