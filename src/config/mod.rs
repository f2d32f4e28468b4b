//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `REPLY_ASSISTANT` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use reply_assistant::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod ai;
mod database;
mod error;
mod server;

pub use ai::AiConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, timeouts)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (PostgreSQL connection)
    pub database: DatabaseConfig,

    /// Completion provider configuration (OpenAI)
    #[serde(default)]
    pub ai: AiConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `REPLY_ASSISTANT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `REPLY_ASSISTANT__SERVER__PORT=5000` -> `server.port = 5000`
    /// - `REPLY_ASSISTANT__DATABASE__URL=...` -> `database.url = ...`
    /// - `REPLY_ASSISTANT__AI__OPENAI_API_KEY=...` -> `ai.openai_api_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Required environment variables are missing
    /// - Values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("REPLY_ASSISTANT")
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
        self.server.validate()?;
        self.database.validate()?;
        self.ai.validate()?;

        // The technical flow makes two sequential provider calls.
        let provider_secs = self.ai.timeout_secs;
        if self.server.request_timeout_secs < provider_secs.saturating_mul(2) {
            return Err(ValidationError::RequestTimeoutTooShort {
                request_secs: self.server.request_timeout_secs,
                provider_secs,
            });
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ReasoningEffort;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "REPLY_ASSISTANT__DATABASE__URL",
        "REPLY_ASSISTANT__SERVER__PORT",
        "REPLY_ASSISTANT__SERVER__ENVIRONMENT",
        "REPLY_ASSISTANT__AI__OPENAI_API_KEY",
        "REPLY_ASSISTANT__AI__DEFAULT_MODEL",
        "REPLY_ASSISTANT__AI__REASONING_EFFORT",
    ];

    fn set_minimal_env() {
        env::set_var(
            "REPLY_ASSISTANT__DATABASE__URL",
            "postgresql://test@localhost/replies",
        );
    }

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.database.url, "postgresql://test@localhost/replies");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_without_api_key() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.environment, Environment::Development);
        assert!(!config.ai.has_openai());
        assert_eq!(config.ai.default_model, "gpt-4o-mini");
    }

    #[test]
    fn test_ai_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("REPLY_ASSISTANT__AI__OPENAI_API_KEY", "sk-test");
        env::set_var("REPLY_ASSISTANT__AI__DEFAULT_MODEL", "gpt-4.1");
        env::set_var("REPLY_ASSISTANT__AI__REASONING_EFFORT", "high");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.ai.api_key(), Some("sk-test"));
        assert_eq!(config.ai.default_model, "gpt-4.1");
        assert_eq!(config.ai.reasoning_effort, ReasoningEffort::High);
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("REPLY_ASSISTANT__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("REPLY_ASSISTANT__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
    }

    fn config_with_timeouts(request_secs: u64, provider_secs: u64) -> AppConfig {
        AppConfig {
            server: ServerConfig {
                request_timeout_secs: request_secs,
                ..ServerConfig::default()
            },
            database: DatabaseConfig {
                url: "postgresql://test@localhost/replies".to_string(),
                ..DatabaseConfig::default()
            },
            ai: AiConfig {
                timeout_secs: provider_secs,
                ..AiConfig::default()
            },
        }
    }

    #[test]
    fn test_default_timeouts_cover_technical_flow() {
        let server = ServerConfig::default();
        let ai = AiConfig::default();
        assert!(server.request_timeout_secs >= 2 * ai.timeout_secs);
    }

    #[test]
    fn test_request_timeout_must_cover_two_provider_calls() {
        let err = config_with_timeouts(120, 120).validate().unwrap_err();
        assert!(matches!(
            err,
            ValidationError::RequestTimeoutTooShort {
                request_secs: 120,
                provider_secs: 120
            }
        ));

        assert!(config_with_timeouts(240, 120).validate().is_ok());
    }

    #[test]
    fn test_largest_provider_timeout_is_usable() {
        let config = config_with_timeouts(2 * 600, 600);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_database_url_fails() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
