//! Healthcheck (cron job heartbeat) domain types

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Named;
use crate::validation::{
    validate_cron_expression, validate_healthcheck_schedule, validate_period_type,
    validate_timezone, validate_uuid_format,
};

/// A heartbeat healthcheck pinged by the monitored job.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Healthcheck {
    /// Identifier (e.g. `tok_abc123def456`)
    pub uuid: String,
    pub name: String,

    #[serde(rename = "pingUrl")]
    pub ping_url: String,

    /// Cron expression, when scheduled by cron
    pub cron: String,
    pub tz: String,

    /// Period in seconds
    pub period: i64,

    #[serde(rename = "gracePeriod")]
    pub grace_period: i64,

    #[serde(rename = "isDown")]
    pub is_down: bool,

    #[serde(rename = "isPaused")]
    pub is_paused: bool,
}

impl Healthcheck {
    pub fn new(uuid: impl Into<String>, name: impl Into<String>, is_down: bool) -> Self {
        Self {
            uuid: uuid.into(),
            name: name.into(),
            is_down,
            ..Default::default()
        }
    }
}

impl Named for Healthcheck {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Healthcheck configuration validated before create/update.
///
/// Scheduled either by `cron` (with `timezone`) or by `period_value` and
/// `period_type`, never both.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "validate_healthcheck_schedule"))]
pub struct HealthcheckConfig {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,

    #[validate(custom(function = "validate_cron_expression"))]
    pub cron: Option<String>,

    #[validate(custom(function = "validate_timezone"))]
    pub timezone: Option<String>,

    pub period_value: Option<i64>,

    #[validate(custom(function = "validate_period_type"))]
    pub period_type: Option<String>,

    #[validate(range(min = 0, message = "Grace period must not be negative"))]
    pub grace_period_value: i64,

    #[validate(custom(function = "validate_period_type"))]
    pub grace_period_type: String,

    #[validate(custom(function = "validate_uuid_format"))]
    pub escalation_policy: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_request;

    fn nightly() -> HealthcheckConfig {
        HealthcheckConfig {
            name: "nightly-backup".to_string(),
            cron: Some("0 2 * * *".to_string()),
            timezone: Some("Europe/London".to_string()),
            grace_period_value: 15,
            grace_period_type: "minutes".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn cron_healthcheck_config_is_valid() {
        assert!(validate_request(&nightly()).is_ok());
    }

    #[test]
    fn healthcheck_config_rejects_bad_schedule_fields() {
        let mut config = nightly();
        config.cron = Some("0 25 * * *".to_string());
        let err = validate_request(&config).unwrap_err();
        assert!(err.to_string().contains("cron"));

        let mut config = nightly();
        config.timezone = Some("Europe/Atlantis".to_string());
        let err = validate_request(&config).unwrap_err();
        assert!(err.to_string().contains("timezone"));

        let mut config = nightly();
        config.escalation_policy = Some("policy".to_string());
        let err = validate_request(&config).unwrap_err();
        assert!(err.to_string().contains("escalation_policy"));

        let mut config = nightly();
        config.grace_period_type = "fortnights".to_string();
        assert!(validate_request(&config).is_err());
    }

    #[test]
    fn deserializes_camel_case_flags() {
        let hc: Healthcheck = serde_json::from_str(
            r#"{"uuid": "tok_1", "name": "nightly-backup", "pingUrl": "https://ping/tok_1", "isDown": true, "isPaused": false, "gracePeriod": 300}"#,
        )
        .unwrap();
        assert!(hc.is_down);
        assert_eq!(hc.grace_period, 300);
        assert_eq!(hc.name(), "nightly-backup");
    }
}
