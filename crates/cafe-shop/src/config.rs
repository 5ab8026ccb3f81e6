//! Runtime configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `CAFE_LOG` - default tracing filter when `RUST_LOG` is unset (default: info)
//! - `CAFE_ACTOR_BUFFER` - request channel capacity of every store (default: 32)
//! - `CAFE_CURRENCY` - currency label used when printing amounts (default: Tk)

use thiserror::Error;

const DEFAULT_LOG: &str = "info";
const DEFAULT_ACTOR_BUFFER: usize = 32;
const DEFAULT_CURRENCY: &str = "Tk";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CafeConfig {
    pub log_filter: String,
    /// Always greater than zero.
    pub actor_buffer: usize,
    pub currency: String,
}

impl Default for CafeConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG.to_string(),
            actor_buffer: DEFAULT_ACTOR_BUFFER,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl CafeConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `CAFE_ACTOR_BUFFER` is not a positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, which returns `None` for unset keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get_or_default = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let actor_buffer = match lookup("CAFE_ACTOR_BUFFER") {
            Some(raw) if !raw.trim().is_empty() => raw.trim().parse::<usize>().map_err(|e| {
                ConfigError::InvalidEnvVar("CAFE_ACTOR_BUFFER".to_string(), e.to_string())
            })?,
            _ => DEFAULT_ACTOR_BUFFER,
        };
        if actor_buffer == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "CAFE_ACTOR_BUFFER".to_string(),
                "must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            log_filter: get_or_default("CAFE_LOG", DEFAULT_LOG),
            actor_buffer,
            currency: get_or_default("CAFE_CURRENCY", DEFAULT_CURRENCY),
        })
    }
}
