//! Outage domain types

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Named;
use crate::validation::{validate_iso8601, validate_uuid_format};

/// Simplified monitor embedded in outage responses
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorReference {
    pub uuid: String,
    pub name: String,
    pub url: String,
    pub protocol: String,
}

/// A detected or manually created outage.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Outage {
    pub uuid: String,
    pub start_date: String,

    /// None while ongoing
    pub end_date: Option<String>,

    pub duration_ms: i64,
    pub status_code: i64,
    pub description: String,

    /// manual or automatic
    pub outage_type: String,
    pub is_resolved: bool,
    pub detected_location: String,
    pub monitor: MonitorReference,
}

impl Outage {
    pub fn new(uuid: impl Into<String>, monitor_uuid: impl Into<String>, monitor_name: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            monitor: MonitorReference {
                uuid: monitor_uuid.into(),
                name: monitor_name.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

impl Named for Outage {
    fn name(&self) -> &str {
        &self.monitor.name
    }
}

/// Manual outage configuration validated before create.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct OutageConfig {
    #[validate(custom(function = "validate_uuid_format"))]
    pub monitor_uuid: String,

    #[validate(custom(function = "validate_iso8601"))]
    pub start_date: String,

    /// None while ongoing
    #[validate(custom(function = "validate_iso8601"))]
    pub end_date: Option<String>,

    #[validate(range(min = 100, max = 599, message = "Status code must be between 100 and 599"))]
    pub status_code: i64,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[validate(custom(function = "validate_uuid_format"))]
    pub escalation_policy_uuid: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_request;

    #[test]
    fn outage_config_validation() {
        let config = OutageConfig {
            monitor_uuid: "mon_abc123".to_string(),
            start_date: "2026-01-29T10:00:00Z".to_string(),
            status_code: 503,
            description: "Gateway timeout".to_string(),
            ..Default::default()
        };
        assert!(validate_request(&config).is_ok());

        let err = validate_request(&OutageConfig {
            end_date: Some("tomorrow".to_string()),
            ..config.clone()
        })
        .unwrap_err();
        assert!(err.to_string().contains("end_date"));

        let err = validate_request(&OutageConfig {
            status_code: 42,
            ..config.clone()
        })
        .unwrap_err();
        assert!(err.to_string().contains("status_code"));

        let err = validate_request(&OutageConfig {
            monitor_uuid: "mon".to_string(),
            ..config
        })
        .unwrap_err();
        assert!(err.to_string().contains("monitor_uuid"));
    }

    #[test]
    fn monitor_name_is_the_name() {
        let outage: Outage = serde_json::from_str(
            r#"{"uuid": "out_1", "startDate": "2026-01-01T00:00:00Z", "endDate": null, "durationMs": 1200, "statusCode": 503, "outageType": "automatic", "isResolved": false, "monitor": {"uuid": "mon_1", "name": "API"}}"#,
        )
        .unwrap();
        assert_eq!(outage.name(), "API");
        assert_eq!(outage.end_date, None);
        assert_eq!(outage.status_code, 503);
    }
}
