//! Reusable field validators
//!
//! Each validator has the `validator` crate's custom function shape so it
//! can be attached with `#[validate(custom(function = "..."))]`.

use chrono::DateTime;
use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;
use url::Url;
use validator::ValidationError;

use crate::domain::{HealthcheckConfig, MonitorConfig, StatusPageConfig, SubscriberConfig};

lazy_static! {
    /// `#RRGGBB`
    static ref HEX_COLOR_REGEX: Regex = Regex::new(r"^#[0-9A-Fa-f]{6}$").unwrap();

    static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap();

    /// Single DNS label: alphanumeric and hyphen, no leading/trailing hyphen (1-63 chars)
    static ref SUBDOMAIN_REGEX: Regex =
        Regex::new(r"^[a-zA-Z0-9]([a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?$").unwrap();
}

/// Header names users may not override (compared case-insensitively)
const RESERVED_HEADER_NAMES: &[&str] = &[
    "authorization",
    "host",
    "cookie",
    "set-cookie",
    "proxy-authorization",
    "transfer-encoding",
];

/// Bounds and accepted names for one cron field
struct CronField {
    label: &'static str,
    min: u32,
    max: u32,
    names: &'static [(&'static str, u32)],
}

const MONTH_NAMES: &[(&str, u32)] = &[
    ("jan", 1),
    ("feb", 2),
    ("mar", 3),
    ("apr", 4),
    ("may", 5),
    ("jun", 6),
    ("jul", 7),
    ("aug", 8),
    ("sep", 9),
    ("oct", 10),
    ("nov", 11),
    ("dec", 12),
];

const WEEKDAY_NAMES: &[(&str, u32)] = &[
    ("sun", 0),
    ("mon", 1),
    ("tue", 2),
    ("wed", 3),
    ("thu", 4),
    ("fri", 5),
    ("sat", 6),
];

const CRON_FIELDS: [CronField; 5] = [
    CronField { label: "minute", min: 0, max: 59, names: &[] },
    CronField { label: "hour", min: 0, max: 23, names: &[] },
    CronField { label: "day of month", min: 1, max: 31, names: &[] },
    CronField { label: "month", min: 1, max: 12, names: MONTH_NAMES },
    CronField { label: "day of week", min: 0, max: 6, names: WEEKDAY_NAMES },
];

const MONITOR_PROTOCOLS: &[&str] = &["http", "port", "icmp"];

const PERIOD_TYPES: &[&str] = &["seconds", "minutes", "hours", "days"];

const SUBSCRIBER_TYPES: &[&str] = &["email", "sms", "teams"];

/// Shortest accepted resource identifier
const MIN_RESOURCE_ID_LEN: usize = 8;

fn error_with_message(code: &'static str, message: String) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Owned(message))
}

fn one_of(code: &'static str, value: &str, allowed: &[&str]) -> Result<(), ValidationError> {
    if !allowed.contains(&value) {
        return Err(error_with_message(
            code,
            format!("'{}' must be one of: {}", value, allowed.join(", ")),
        ));
    }
    Ok(())
}

/// Validate a `#RRGGBB` color
pub fn validate_hex_color(value: &str) -> Result<(), ValidationError> {
    if !HEX_COLOR_REGEX.is_match(value) {
        return Err(error_with_message(
            "invalid_hex_color",
            format!("'{}' must be a 6-digit hex color (e.g. '#ff5733')", value),
        ));
    }
    Ok(())
}

/// Reject CR, LF and NUL, which would allow header injection
pub fn validate_no_control_characters(value: &str) -> Result<(), ValidationError> {
    if value.contains(['\r', '\n', '\0']) {
        return Err(error_with_message(
            "control_characters",
            "value must not contain control characters (CR, LF, NULL)".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_reserved_header_name(value: &str) -> Result<(), ValidationError> {
    let lower = value.to_ascii_lowercase();
    if RESERVED_HEADER_NAMES.contains(&lower.as_str()) {
        return Err(error_with_message(
            "reserved_header_name",
            format!("header name '{}' is reserved and cannot be overridden", value),
        ));
    }
    Ok(())
}

/// Header names must be free of control characters and not reserved
pub fn validate_header_name(value: &str) -> Result<(), ValidationError> {
    validate_no_control_characters(value)?;
    validate_reserved_header_name(value)
}

/// Validate an ISO 8601 / RFC 3339 timestamp (e.g. `2026-01-29T10:00:00Z`)
pub fn validate_iso8601(value: &str) -> Result<(), ValidationError> {
    DateTime::parse_from_rfc3339(value).map_err(|e| {
        error_with_message(
            "invalid_iso8601",
            format!("'{}' is not an ISO 8601 timestamp: {}", value, e),
        )
    })?;
    Ok(())
}

/// Validate an absolute `http` or `https` URL with a host
pub fn validate_url_format(value: &str) -> Result<(), ValidationError> {
    let valid = Url::parse(value)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.host_str().is_some())
        .unwrap_or(false);
    if !valid {
        return Err(error_with_message(
            "invalid_url",
            format!("'{}' must be a valid HTTP or HTTPS URL", value),
        ));
    }
    Ok(())
}

pub fn validate_email_format(value: &str) -> Result<(), ValidationError> {
    if !EMAIL_REGEX.is_match(value) {
        return Err(error_with_message(
            "invalid_email",
            format!("'{}' is not a valid email address", value),
        ));
    }
    Ok(())
}

/// Validate a five-field cron expression (`minute hour day month weekday`).
///
/// Each field accepts `*` or `?`, numbers, month and weekday names, ranges,
/// steps and comma-separated lists, all within the field's bounds.
pub fn validate_cron_expression(value: &str) -> Result<(), ValidationError> {
    let invalid = |reason: String| {
        error_with_message(
            "invalid_cron_expression",
            format!("'{}' is not a valid cron expression: {}", value, reason),
        )
    };

    let fields: Vec<&str> = value.split_whitespace().collect();
    if fields.len() != CRON_FIELDS.len() {
        return Err(invalid(format!(
            "expected 5 fields (minute hour day month weekday), got {}",
            fields.len()
        )));
    }

    for (expr, field) in fields.iter().zip(CRON_FIELDS.iter()) {
        for part in expr.split(',') {
            check_cron_range(part, field).map_err(&invalid)?;
        }
    }
    Ok(())
}

fn check_cron_range(part: &str, field: &CronField) -> Result<(), String> {
    let (range, step) = match part.split_once('/') {
        Some((range, step)) => (range, Some(step)),
        None => (part, None),
    };

    let (start, end) = if range == "*" || range == "?" {
        (field.min, field.max)
    } else {
        match range.split_once('-') {
            Some((low, high)) => (
                parse_cron_value(low, field)?,
                parse_cron_value(high, field)?,
            ),
            // `5/15` runs from 5 to the end of the field
            None if step.is_some() => (parse_cron_value(range, field)?, field.max),
            None => {
                let single = parse_cron_value(range, field)?;
                (single, single)
            }
        }
    };

    if let Some(step) = step {
        let step: u32 = step
            .parse()
            .map_err(|_| format!("invalid step '{}' in {}", step, field.label))?;
        if step == 0 {
            return Err(format!("step of zero in {}", field.label));
        }
    }
    if start < field.min {
        return Err(format!(
            "{} value {} is below minimum {}",
            field.label, start, field.min
        ));
    }
    if end > field.max {
        return Err(format!(
            "{} value {} is above maximum {}",
            field.label, end, field.max
        ));
    }
    if start > end {
        return Err(format!(
            "{} range {}-{} starts after it ends",
            field.label, start, end
        ));
    }
    Ok(())
}

fn parse_cron_value(token: &str, field: &CronField) -> Result<u32, String> {
    let lower = token.to_ascii_lowercase();
    if let Some((_, value)) = field.names.iter().find(|(name, _)| *name == lower) {
        return Ok(*value);
    }
    token
        .parse()
        .map_err(|_| format!("unrecognised {} value '{}'", field.label, token))
}

/// Validate an IANA timezone name (e.g. `Europe/London`, `UTC`)
pub fn validate_timezone(value: &str) -> Result<(), ValidationError> {
    value.parse::<chrono_tz::Tz>().map_err(|_| {
        error_with_message(
            "invalid_timezone",
            format!(
                "'{}' is not a valid IANA timezone (e.g. 'America/New_York', 'Europe/London', 'UTC')",
                value
            ),
        )
    })?;
    Ok(())
}

/// Accept a standard UUID or a prefixed resource ID such as `mon_abc123`
pub fn validate_uuid_format(value: &str) -> Result<(), ValidationError> {
    if value.len() < MIN_RESOURCE_ID_LEN {
        return Err(error_with_message(
            "invalid_uuid",
            format!("'{}' is too short to be a UUID or resource ID", value),
        ));
    }
    if !value.contains(['-', '_']) {
        return Err(error_with_message(
            "invalid_uuid",
            format!(
                "'{}' is neither a UUID (xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx) nor a resource ID (prefix_xxxxx)",
                value
            ),
        ));
    }
    Ok(())
}

pub fn validate_port(port: i64) -> Result<(), ValidationError> {
    if !(1..=65535).contains(&port) {
        return Err(error_with_message(
            "invalid_port",
            format!("port must be between 1 and 65535, got {}", port),
        ));
    }
    Ok(())
}

/// Validate a hosted subdomain label (e.g. `acme-status`)
pub fn validate_subdomain(value: &str) -> Result<(), ValidationError> {
    if !SUBDOMAIN_REGEX.is_match(value) {
        return Err(error_with_message(
            "invalid_subdomain",
            format!("'{}' is not a valid subdomain", value),
        ));
    }
    Ok(())
}

/// Either a custom hostname or a hosted subdomain must be configured
pub fn validate_hostname_or_subdomain(config: &StatusPageConfig) -> Result<(), ValidationError> {
    let has_hostname = config.hostname.as_deref().is_some_and(|h| !h.is_empty());
    let has_subdomain = config
        .hosted_subdomain
        .as_deref()
        .is_some_and(|s| !s.is_empty());

    if !has_hostname && !has_subdomain {
        return Err(error_with_message(
            "hostname_or_subdomain",
            "Either 'hostname' or 'hosted_subdomain' must be set".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_monitor_protocol(value: &str) -> Result<(), ValidationError> {
    one_of("invalid_protocol", value, MONITOR_PROTOCOLS)
}

/// Healthcheck period units
pub fn validate_period_type(value: &str) -> Result<(), ValidationError> {
    one_of("invalid_period_type", value, PERIOD_TYPES)
}

pub fn validate_subscriber_type(value: &str) -> Result<(), ValidationError> {
    one_of("invalid_subscriber_type", value, SUBSCRIBER_TYPES)
}

/// Port monitors need a port; any port given must be in range
pub fn validate_monitor_port(config: &MonitorConfig) -> Result<(), ValidationError> {
    match config.port {
        Some(port) => validate_port(port),
        None if config.protocol == "port" => Err(error_with_message(
            "port_required",
            "'port' is required when protocol is 'port'".to_string(),
        )),
        None => Ok(()),
    }
}

/// A healthcheck runs on either a cron schedule with a timezone or a period
pub fn validate_healthcheck_schedule(config: &HealthcheckConfig) -> Result<(), ValidationError> {
    match (&config.cron, config.period_value) {
        (Some(_), Some(_)) => Err(error_with_message(
            "schedule_conflict",
            "'cron' and 'period_value' are mutually exclusive".to_string(),
        )),
        (Some(_), None) if config.timezone.is_none() => Err(error_with_message(
            "timezone_required",
            "'timezone' is required when 'cron' is set".to_string(),
        )),
        (None, Some(_)) if config.period_type.is_none() => Err(error_with_message(
            "period_type_required",
            "'period_type' is required when 'period_value' is set".to_string(),
        )),
        (None, None) => Err(error_with_message(
            "schedule_required",
            "Either 'cron' or 'period_value' must be set".to_string(),
        )),
        _ => Ok(()),
    }
}

/// The contact field matching the subscriber type must be present
pub fn validate_subscriber_contact(config: &SubscriberConfig) -> Result<(), ValidationError> {
    let (field, present) = match config.subscriber_type.as_str() {
        "email" => ("email", config.email.is_some()),
        "sms" => ("phone", config.phone.is_some()),
        "teams" => ("teams_webhook_url", config.teams_webhook_url.is_some()),
        // rejected by the type validator
        _ => return Ok(()),
    };
    if !present {
        return Err(error_with_message(
            "contact_required",
            format!(
                "'{}' is required when type is '{}'",
                field, config.subscriber_type
            ),
        ));
    }
    Ok(())
}
