//! Registry configuration, loaded from environment variables.

use thiserror::Error;

/// Bounded request queue size for the registry actor.
pub const CHANNEL_CAPACITY_VAR: &str = "ORDER_REGISTRY_CHANNEL_CAPACITY";

const DEFAULT_CHANNEL_CAPACITY: usize = 32;

/// Errors raised while reading configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Runtime settings for the order registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// How many requests may queue before senders wait. At least 1.
    pub channel_capacity: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl RegistryConfig {
    /// Load configuration from the process environment. Unset variables take defaults.
    ///
    /// # Errors
    /// Returns an error if a variable is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](RegistryConfig::from_env), reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let channel_capacity = match lookup(CHANNEL_CAPACITY_VAR) {
            None => DEFAULT_CHANNEL_CAPACITY,
            Some(raw) => parse_capacity(&raw)?,
        };
        Ok(Self { channel_capacity })
    }
}

fn parse_capacity(raw: &str) -> Result<usize, ConfigError> {
    let invalid = |reason: &str| {
        ConfigError::InvalidEnvVar(CHANNEL_CAPACITY_VAR.to_string(), reason.to_string())
    };
    let capacity: usize = raw
        .trim()
        .parse()
        .map_err(|_| invalid("expected a positive integer"))?;
    if capacity == 0 {
        return Err(invalid("must be at least 1"));
    }
    Ok(capacity)
}
