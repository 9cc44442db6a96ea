//! services/engine/src/config.rs
//!
//! Defines the engine's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The
//! `.env` file is used for local development.

use std::time::Duration;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Duration of the simulated lecture analysis step.
    pub processing_delay: Duration,
    /// Lower bound of the assistant's simulated thinking pause.
    pub thinking_delay_base: Duration,
    /// Upper bound of the random jitter added on top of the base pause.
    pub thinking_delay_jitter: Duration,
    pub log_level: Level,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            processing_delay: Duration::from_millis(3000),
            thinking_delay_base: Duration::from_millis(800),
            thinking_delay_jitter: Duration::from_millis(1200),
            log_level: Level::INFO,
        }
    }
}

impl EngineConfig {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for
    /// development, but this is skipped in test environments to ensure tests
    /// are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination.
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        let defaults = Self::default();

        let processing_delay =
            duration_var("PROCESSING_DELAY_MS", defaults.processing_delay)?;
        let thinking_delay_base =
            duration_var("THINKING_DELAY_BASE_MS", defaults.thinking_delay_base)?;
        let thinking_delay_jitter =
            duration_var("THINKING_DELAY_JITTER_MS", defaults.thinking_delay_jitter)?;

        let log_level_str = std::env::var("RUST_LOG").unwrap_or_else(|_| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        Ok(Self {
            processing_delay,
            thinking_delay_base,
            thinking_delay_jitter,
            log_level,
        })
    }
}

/// Reads a millisecond duration from the environment, falling back to
/// `default` when the variable is unset.
fn duration_var(name: &str, default: Duration) -> Result<Duration, ConfigError> {
    match std::env::var(name) {
        Ok(raw) => {
            let millis = raw.parse::<u64>().map_err(|e| {
                ConfigError::InvalidValue(name.to_string(), e.to_string())
            })?;
            Ok(Duration::from_millis(millis))
        }
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_simulated_latency_windows() {
        let config = EngineConfig::default();
        assert_eq!(config.processing_delay, Duration::from_millis(3000));
        assert_eq!(config.thinking_delay_base, Duration::from_millis(800));
        assert_eq!(config.thinking_delay_jitter, Duration::from_millis(1200));
        assert_eq!(config.log_level, Level::INFO);
    }

    #[test]
    fn duration_vars_fall_back_and_reject_garbage() {
        let fallback = Duration::from_millis(42);
        assert_eq!(
            duration_var("ENGINE_TEST_UNSET_DELAY_MS", fallback).unwrap(),
            fallback
        );

        std::env::set_var("ENGINE_TEST_BAD_DELAY_MS", "soon");
        assert!(duration_var("ENGINE_TEST_BAD_DELAY_MS", fallback).is_err());
        std::env::remove_var("ENGINE_TEST_BAD_DELAY_MS");
    }
}
