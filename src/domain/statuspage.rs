//! Status page domain types
//!
//! Two views of a status page live here: the records returned by the status
//! pages list endpoint, and the user-declared configuration (sections and
//! their service tree) that is validated before every create or update.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{LocalizedText, Named, OptionalBool, OptionalString};
use crate::validation::{
    validate_email_format, validate_hex_color, validate_hostname_or_subdomain,
    validate_no_control_characters, validate_subdomain, validate_subscriber_contact,
    validate_subscriber_type, validate_url_format,
};

/// A status page as returned by the API.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusPage {
    /// Identifier (e.g. `sp_abc123xyz`)
    pub uuid: String,
    pub name: String,

    /// Custom domain, if configured
    pub hostname: Option<String>,

    /// Hosted subdomain (e.g. `mycompany.hyperping.app`)
    #[serde(rename = "hostedsubdomain")]
    pub hosted_subdomain: String,

    /// Active URL
    pub url: String,

    pub password_protected: bool,
    pub settings: StatusPageSettings,
    pub sections: Vec<StatusPageSection>,
}

impl StatusPage {
    pub fn new(uuid: impl Into<String>, display_name: impl Into<String>) -> Self {
        let display_name = display_name.into();
        Self {
            uuid: uuid.into(),
            name: display_name.clone(),
            settings: StatusPageSettings {
                name: display_name,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }
}

impl Named for StatusPage {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Subset of status page settings relevant to this crate
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusPageSettings {
    /// Display name shown on the page
    pub name: String,
    pub languages: Vec<String>,
    pub default_language: String,
}

/// A section of services on a status page (API view)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusPageSection {
    pub name: LocalizedText,
    pub is_split: bool,
    pub services: Vec<StatusPageService>,
}

/// A monitor or group entry within a section (API view)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusPageService {
    pub id: String,
    pub uuid: String,
    pub name: LocalizedText,
    pub is_group: bool,
    pub show_uptime: bool,
    pub show_response_times: bool,

    /// Nested services when `is_group`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<StatusPageService>,
}

/// A section as declared in configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionConfig {
    pub name: LocalizedText,
    pub is_split: OptionalBool,
    pub services: Vec<ServiceConfig>,
}

impl SectionConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: LocalizedText::en(name),
            ..Default::default()
        }
    }

    pub fn with_service(mut self, service: ServiceConfig) -> Self {
        self.services.push(service);
        self
    }
}

/// A service tree node as declared in configuration.
///
/// A flat node references a monitor by `uuid`; a group node has a localized
/// name and one or more child services but no identifier of its own.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Monitor UUID; omitted for group entries
    pub uuid: OptionalString,
    pub name: LocalizedText,
    pub is_group: OptionalBool,
    pub show_uptime: OptionalBool,
    pub show_response_times: OptionalBool,
    pub services: Vec<ServiceConfig>,
}

impl ServiceConfig {
    /// A flat service pointing at a monitor
    pub fn monitor(uuid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            uuid: OptionalString::Known(uuid.into()),
            name: LocalizedText::en(name),
            ..Default::default()
        }
    }

    /// A group service with the given children
    pub fn group(name: impl Into<String>, services: Vec<ServiceConfig>) -> Self {
        Self {
            name: LocalizedText::en(name),
            is_group: OptionalBool::Known(true),
            services,
            ..Default::default()
        }
    }

    /// Whether the node is marked as a group; unset or unknown means flat
    pub fn is_group(&self) -> bool {
        matches!(self.is_group, OptionalBool::Known(true))
    }
}

/// Status page configuration validated before create/update.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "validate_hostname_or_subdomain"))]
pub struct StatusPageConfig {
    #[validate(
        length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"),
        custom(function = "validate_no_control_characters")
    )]
    pub name: String,

    #[validate(custom(function = "validate_subdomain"))]
    pub hosted_subdomain: Option<String>,

    #[validate(length(min = 1, max = 253, message = "Hostname must be between 1 and 253 characters"))]
    pub hostname: Option<String>,

    #[validate(custom(function = "validate_hex_color"))]
    pub accent_color: Option<String>,

    /// Link to the main website
    #[validate(custom(function = "validate_url_format"))]
    pub website: Option<String>,

    #[validate(length(min = 1, message = "At least one language is required"))]
    pub languages: Vec<String>,

    pub sections: Vec<SectionConfig>,
}

/// A status page subscriber validated before create.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "validate_subscriber_contact"))]
pub struct SubscriberConfig {
    #[validate(length(min = 1, message = "Status page UUID is required"))]
    pub statuspage_uuid: String,

    /// email, sms or teams
    #[serde(rename = "type")]
    #[validate(custom(function = "validate_subscriber_type"))]
    pub subscriber_type: String,

    #[validate(custom(function = "validate_email_format"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub teams_webhook_url: Option<String>,
}
