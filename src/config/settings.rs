//! # Provider Settings
//!
//! Typed configuration with `validator` derives. Values are layered from
//! defaults, an optional file, and `HYPERPING_`-prefixed environment
//! variables (nesting separator `__`, e.g. `HYPERPING_FILTER__ABORT_ON_ERROR`).

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::{Validate, ValidationError};

use crate::errors::{ProviderError, Result};
use crate::filter::matchers::DEFAULT_REGEX_SIZE_LIMIT;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "HYPERPING";

/// Top-level provider configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ProviderConfig {
    /// Client-side filter evaluation
    #[validate(nested)]
    pub filter: FilterSettings,

    /// Logging configuration
    #[validate(nested)]
    pub observability: ObservabilityConfig,
}

impl ProviderConfig {
    /// Load configuration from `.env` and the environment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::load(None)
    }

    /// Load configuration from a TOML, YAML or JSON file, then the environment.
    ///
    /// Environment variables take precedence over file values.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load(Some(path.as_ref()))
    }

    fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        let config: Self = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        Validate::validate(self).map_err(ProviderError::from)?;
        Ok(())
    }
}

/// Filter engine settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct FilterSettings {
    /// Reuse compiled `name_regex` patterns across records
    pub cache_patterns: bool,

    #[validate(range(
        min = 1,
        max = 10000,
        message = "Max cached patterns must be between 1 and 10000"
    ))]
    pub max_cached_patterns: usize,

    /// Compiled regex size limit in bytes
    #[validate(range(min = 1024, message = "Regex size limit must be at least 1024 bytes"))]
    pub regex_size_limit: usize,

    /// Stop a list read at the first filter definition error
    pub abort_on_error: bool,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            cache_patterns: true,
            max_cached_patterns: 256,
            regex_size_limit: DEFAULT_REGEX_SIZE_LIMIT,
            abort_on_error: false,
        }
    }
}

/// Observability configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level or `EnvFilter` directive (e.g. `info,hyperping_provider=debug`)
    #[validate(
        length(min = 1, message = "Log level cannot be empty"),
        custom(function = "validate_log_level")
    )]
    pub log_level: String,

    /// Enable JSON structured logging
    pub json_logging: bool,

    #[validate(length(min = 1, message = "Service name cannot be empty"))]
    pub service_name: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logging: false,
            service_name: "hyperping-provider".to_string(),
        }
    }
}

fn validate_log_level(level: &str) -> std::result::Result<(), ValidationError> {
    tracing_subscriber::EnvFilter::try_new(level)
        .map(|_| ())
        .map_err(|_| ValidationError::new("invalid_log_level"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ProviderConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.filter.cache_patterns);
        assert_eq!(config.filter.max_cached_patterns, 256);
        assert_eq!(config.filter.regex_size_limit, 1024 * 1024);
        assert!(!config.filter.abort_on_error);
        assert_eq!(config.observability.log_level, "info");
        assert_eq!(config.observability.service_name, "hyperping-provider");
    }

    #[test]
    fn test_filter_settings_ranges() {
        let mut config = ProviderConfig::default();
        config.filter.max_cached_patterns = 0;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ProviderError::Validation { .. }));

        let mut config = ProviderConfig::default();
        config.filter.max_cached_patterns = 10_001;
        assert!(config.validate().is_err());

        let mut config = ProviderConfig::default();
        config.filter.regex_size_limit = 512;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_log_level_validation() {
        let mut config = ProviderConfig::default();
        config.observability.log_level = "debug,hyperping_provider=trace".to_string();
        assert!(config.validate().is_ok());

        config.observability.log_level = String::new();
        assert!(config.validate().is_err());

        config.observability.log_level = "hyperping_provider=loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_deserialization_uses_defaults() {
        let config: ProviderConfig =
            serde_json::from_str(r#"{"filter": {"abort_on_error": true}}"#).unwrap();
        assert!(config.filter.abort_on_error);
        assert_eq!(config.filter.max_cached_patterns, 256);
        assert_eq!(config.observability, ObservabilityConfig::default());
    }
}
