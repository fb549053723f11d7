//! # Hyperping Provider Core
//!
//! Client-side filtering and configuration validation for the Hyperping
//! infrastructure-as-code provider.
//!
//! ## Architecture
//!
//! ```text
//! list read → unfiltered records → FilterEngine (per record) → kept records
//!                                        ↓
//!                                   Diagnostics
//!
//! create/update → StatusPageConfig → validate_status_page → API call
//! ```
//!
//! ## Core Components
//!
//! - **Domain**: API records and the tri-state `OptionalValue` used by filters
//! - **Filter**: comparison primitives, `apply_all`, per-resource filters
//! - **Validation**: field validators and the status page service tree rules
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use hyperping_provider::{
//!     Diagnostics, FilterEngine, Monitor, MonitorFilter, OptionalValue, ProviderConfig, Result,
//! };
//!
//! fn main() -> Result<()> {
//!     let config = ProviderConfig::from_env()?;
//!     hyperping_provider::observability::init_logging(&config.observability)?;
//!
//!     let engine = FilterEngine::new(&config.filter);
//!     let filter = MonitorFilter {
//!         name_regex: OptionalValue::known(r"\[PROD\]-.*"),
//!         ..Default::default()
//!     };
//!     let diagnostics = Diagnostics::new();
//!     let monitors = vec![Monitor::new("mon_1", "[PROD]-API", "https")];
//!     let kept = engine.filter_records(monitors, Some(&filter), &diagnostics);
//!     assert_eq!(kept.len(), 1);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod filter;
pub mod observability;
pub mod validation;

// Re-export commonly used types and traits
pub use config::{FilterSettings, ObservabilityConfig, ProviderConfig};
pub use domain::{
    Healthcheck, HealthcheckConfig, Incident, IncidentUpdate, LocalizedText, Maintenance,
    Monitor, MonitorConfig, Named, OptionalBool, OptionalInt64, OptionalString, OptionalValue,
    Outage, OutageConfig, SectionConfig, ServiceConfig, StatusPage, StatusPageConfig,
    SubscriberConfig,
};
pub use errors::{ProviderError, Result};
pub use filter::{
    apply_all, Check, Diagnostic, Diagnostics, FilterEngine, HealthcheckFilter, IncidentFilter,
    MaintenanceFilter, MonitorFilter, NameFilter, OutageFilter, RecordFilter, Severity,
    StatusPageFilter,
};
pub use validation::{validate_service_tree, validate_status_page};

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name from Cargo.toml
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
