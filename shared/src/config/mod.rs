//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `environment` - Environment detection and logging configuration
//! - `pagination` - Defaults and limits for list endpoints

pub mod environment;
pub mod pagination;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use pagination::PaginationConfig;

/// Error raised while assembling the layered configuration
pub type ConfigError = ::config::ConfigError;

/// Prefix of environment variables overriding configuration values,
/// e.g. `SHAREIT__PAGINATION__MAX_SIZE=50`
pub const ENV_PREFIX: &str = "SHAREIT";

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Pagination configuration
    #[serde(default)]
    pub pagination: PaginationConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl AppConfig {
    /// Create the preset configuration for an environment
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            environment,
            logging: LoggingConfig::for_environment(environment),
            pagination: PaginationConfig::default(),
        }
    }

    /// Create configuration for development environment
    pub fn development() -> Self {
        Self::for_environment(Environment::Development)
    }

    /// Create configuration for production environment
    pub fn production() -> Self {
        let mut config = Self::for_environment(Environment::Production);
        config.pagination = PaginationConfig::default().with_max_size(50);
        config
    }

    /// Load configuration from `.env` files, the optional `config.<env>.toml`
    /// file and `SHAREIT__*` environment variables, layered over the preset
    /// of the detected environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let environment = Environment::from_env();
        dotenvy::from_filename(environment.env_file()).ok();

        let preset = match environment {
            Environment::Production => Self::production(),
            other => Self::for_environment(other),
        };

        ::config::Config::builder()
            .add_source(::config::Config::try_from(&preset)?)
            .add_source(::config::File::with_name(environment.config_file()).required(false))
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_development() {
        let config = AppConfig::default();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_production_preset() {
        let config = AppConfig::production();
        assert!(config.environment.is_production());
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.pagination.max_size, Some(50));
    }

    #[test]
    fn test_app_config_deserialization_with_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"environment": "staging"}"#).unwrap();
        assert_eq!(config.environment, Environment::Staging);
        assert_eq!(config.logging, LoggingConfig::default());
        assert_eq!(config.pagination, PaginationConfig::default());
    }
}
