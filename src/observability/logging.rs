//! # Structured Logging
//!
//! Subscriber setup and span macros built on the tracing ecosystem.
//!
//! Logs go to stderr: a plugin host reads stdout for its own protocol. In
//! JSON mode each event is one JSON object with the span fields attached,
//! so every record of a list read can be correlated by `operation_id`.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{ObservabilityConfig, ProviderConfig};
use crate::errors::{ProviderError, Result};

/// Create a tracing span for one filter evaluation over a list.
///
/// ```rust,ignore
/// let span = filter_span!("monitor");
/// let span = filter_span!("monitor", records = 42);
/// ```
#[macro_export]
macro_rules! filter_span {
    ($kind:expr) => {
        tracing::debug_span!(
            "filter_records",
            kind = %$kind,
            operation_id = %uuid::Uuid::new_v4()
        )
    };
    ($kind:expr, $($field:tt)*) => {
        tracing::debug_span!(
            "filter_records",
            kind = %$kind,
            operation_id = %uuid::Uuid::new_v4(),
            $($field)*
        )
    };
}

/// Create a tracing span for configuration validation
#[macro_export]
macro_rules! validation_span {
    ($resource:expr) => {
        tracing::debug_span!(
            "validation",
            resource = %$resource,
            operation_id = %uuid::Uuid::new_v4()
        )
    };
    ($resource:expr, $($field:tt)*) => {
        tracing::debug_span!(
            "validation",
            resource = %$resource,
            operation_id = %uuid::Uuid::new_v4(),
            $($field)*
        )
    };
}

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. If a subscriber is
/// already installed (e.g. by the host or a test harness) this is a no-op.
pub fn init_logging(config: &ObservabilityConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level).map_err(|e| {
            ProviderError::config_with_source(
                format!("Invalid log level '{}'", config.log_level),
                Box::new(e),
            )
        })?,
    };

    let registry = tracing_subscriber::registry().with(filter);
    let installed = if config.json_logging {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };

    match installed {
        Ok(()) => tracing::debug!(
            service_name = %config.service_name,
            json = config.json_logging,
            "Logging initialized"
        ),
        Err(_) => tracing::debug!("Global subscriber already installed"),
    }
    Ok(())
}

/// Log the effective configuration
pub fn log_config_info(config: &ProviderConfig) {
    tracing::info!(
        service_name = %config.observability.service_name,
        log_level = %config.observability.log_level,
        json_logging = config.observability.json_logging,
        cache_patterns = config.filter.cache_patterns,
        max_cached_patterns = config.filter.max_cached_patterns,
        regex_size_limit = config.filter.regex_size_limit,
        abort_on_error = config.filter.abort_on_error,
        "Hyperping provider configuration"
    );
}
