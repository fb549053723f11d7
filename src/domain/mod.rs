//! Domain layer
//!
//! Plain-data records as returned by the Hyperping list endpoints, the
//! user-declared resource configurations, and the tri-state optional value
//! used by filter configurations. Nothing here performs I/O.
//!
//! ## Module Organization
//!
//! - `value`: tri-state `OptionalValue<T>` (unset / unknown / known)
//! - `localized`: multi-language text
//! - `monitor`, `incident`, `maintenance`, `healthcheck`, `outage`,
//!   `statuspage`: one module per resource kind

pub mod healthcheck;
pub mod incident;
pub mod localized;
pub mod maintenance;
pub mod monitor;
pub mod outage;
pub mod statuspage;
pub mod value;

pub use healthcheck::{Healthcheck, HealthcheckConfig};
pub use incident::{Incident, IncidentUpdate};
pub use localized::LocalizedText;
pub use maintenance::Maintenance;
pub use monitor::{Monitor, MonitorConfig, RequestHeader};
pub use outage::{MonitorReference, Outage, OutageConfig};
pub use statuspage::{
    SectionConfig, ServiceConfig, StatusPage, StatusPageConfig, StatusPageSection,
    StatusPageService, StatusPageSettings, SubscriberConfig,
};
pub use value::{OptionalBool, OptionalInt64, OptionalString, OptionalValue};

/// A record with a display name that `name_regex` filters match against.
pub trait Named {
    fn name(&self) -> &str;
}
