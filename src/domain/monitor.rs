//! Monitor domain types
//!
//! Uptime monitors as returned by the monitors list endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Named;
use crate::validation::{
    validate_header_name, validate_monitor_port, validate_monitor_protocol,
    validate_no_control_characters,
};

/// An uptime monitor.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Monitor {
    /// Stable identifier (e.g. `mon_abc123`)
    pub uuid: String,

    /// Display name
    pub name: String,

    /// Checked URL or host
    pub url: String,

    /// Check protocol (http, port, icmp, ...)
    pub protocol: String,

    /// Owning project
    #[serde(rename = "projectUuid")]
    pub project_uuid: String,

    /// HTTP method for http checks
    pub http_method: String,

    /// Regions the monitor runs from
    pub regions: Vec<String>,

    /// Check frequency in seconds
    pub check_frequency: i64,

    /// Whether the monitor is paused
    pub paused: bool,

    /// Current status, `up` or `down` (read-only)
    pub status: String,
}

impl Monitor {
    /// Create a monitor with the fields the filter engine looks at
    pub fn new(
        uuid: impl Into<String>,
        name: impl Into<String>,
        protocol: impl Into<String>,
    ) -> Self {
        Self {
            uuid: uuid.into(),
            name: name.into(),
            protocol: protocol.into(),
            ..Default::default()
        }
    }

    /// Set paused flag
    pub fn with_paused(mut self, paused: bool) -> Self {
        self.paused = paused;
        self
    }

    /// Set status
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Set project
    pub fn with_project(mut self, project_uuid: impl Into<String>) -> Self {
        self.project_uuid = project_uuid.into();
        self
    }
}

impl Named for Monitor {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Monitor configuration validated before create/update.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "validate_monitor_port"))]
pub struct MonitorConfig {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,

    #[validate(length(min = 1, message = "URL is required"))]
    pub url: String,

    #[validate(custom(function = "validate_monitor_protocol"))]
    pub protocol: String,

    /// Required when `protocol` is `port`
    pub port: Option<i64>,

    #[validate(nested)]
    pub request_headers: Vec<RequestHeader>,
}

/// A custom HTTP header sent with each check
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
pub struct RequestHeader {
    #[validate(custom(function = "validate_header_name"))]
    pub name: String,

    #[validate(custom(function = "validate_no_control_characters"))]
    pub value: String,
}
