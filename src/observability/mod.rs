//! # Observability
//!
//! Structured logging for filter evaluation and validation. Metrics and
//! distributed tracing are left to the host process.

pub mod logging;

pub use logging::{init_logging, log_config_info};
