//! # Configuration Management
//!
//! Settings for the filter engine and logging, loaded from defaults, an
//! optional file and the environment, and validated before use.

pub mod settings;

pub use settings::{FilterSettings, ObservabilityConfig, ProviderConfig, ENV_PREFIX};
