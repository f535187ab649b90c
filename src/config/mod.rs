//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PEACE_BRIDGE` prefix and nested values use double underscores as separators.
//! Every setting has a default, so an empty environment is a valid configuration.
//!
//! # Example
//!
//! ```no_run
//! use peace_bridge::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Greeting: {}", config.chat.greeting);
//! ```

mod chat;
mod error;
mod logging;

pub use chat::ChatConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Logging configuration (level, output format)
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Chat surface configuration (greeting, fallback, driver output)
    #[serde(default)]
    pub chat: ChatConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PEACE_BRIDGE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PEACE_BRIDGE__LOGGING__LEVEL=debug` -> `logging.level = "debug"`
    /// - `PEACE_BRIDGE__CHAT__TYPING_DELAY_MS=600` -> `chat.typing_delay_ms = 600`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PEACE_BRIDGE")
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
        self.chat.validate()?;
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

    const VARS: [&str; 4] = [
        "PEACE_BRIDGE__LOGGING__LEVEL",
        "PEACE_BRIDGE__LOGGING__JSON",
        "PEACE_BRIDGE__CHAT__TYPING_DELAY_MS",
        "PEACE_BRIDGE__CHAT__GREETING",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.chat.greeting, ChatConfig::default().greeting);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PEACE_BRIDGE__LOGGING__LEVEL", "debug");
        env::set_var("PEACE_BRIDGE__LOGGING__JSON", "true");
        env::set_var("PEACE_BRIDGE__CHAT__TYPING_DELAY_MS", "600");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
        assert_eq!(config.chat.typing_delay_ms, 600);
    }

    #[test]
    fn test_validate_rejects_bad_level() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PEACE_BRIDGE__LOGGING__LEVEL", "chatty");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidLogLevel(_))
        ));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }
}
