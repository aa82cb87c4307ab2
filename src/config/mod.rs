//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `AI_ACT_ASSESSMENT` prefix and nested values use double underscores as separators.
//! Every setting has a default, so an empty environment yields a working config.
//!
//! # Example
//!
//! ```no_run
//! use ai_act_assessment::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Notices stay visible for {}s", config.notices.ttl_secs);
//! ```

mod error;
mod input;
mod logging;
mod notices;
mod output;

pub use error::{ConfigError, ValidationError};
pub use input::InputConfig;
pub use logging::LoggingConfig;
pub use notices::NoticeConfig;
pub use output::{OutputConfig, OutputFormat};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Validation notice behaviour
    #[serde(default)]
    pub notices: NoticeConfig,

    /// Result rendering
    #[serde(default)]
    pub output: OutputConfig,

    /// Scripted answers
    #[serde(default)]
    pub input: InputConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `AI_ACT_ASSESSMENT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `AI_ACT_ASSESSMENT__OUTPUT__FORMAT=json` -> `output.format = json`
    /// - `AI_ACT_ASSESSMENT__NOTICES__TTL_SECS=8` -> `notices.ttl_secs = 8`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("AI_ACT_ASSESSMENT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        self.notices.validate()?;
        self.input.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("AI_ACT_ASSESSMENT__OUTPUT__FORMAT");
        env::remove_var("AI_ACT_ASSESSMENT__NOTICES__TTL_SECS");
        env::remove_var("AI_ACT_ASSESSMENT__LOGGING__LEVEL");
        env::remove_var("AI_ACT_ASSESSMENT__LOGGING__JSON");
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.notices.ttl_secs, 5);
        assert!(config.input.answers_file.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("AI_ACT_ASSESSMENT__OUTPUT__FORMAT", "json");
        env::set_var("AI_ACT_ASSESSMENT__NOTICES__TTL_SECS", "8");
        env::set_var("AI_ACT_ASSESSMENT__LOGGING__LEVEL", "debug");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.notices.ttl_secs, 8);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_validate_rejects_bad_ttl() {
        let config = AppConfig {
            notices: NoticeConfig { ttl_secs: 0 },
            ..AppConfig::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidNoticeTtl));
    }
}
