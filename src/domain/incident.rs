//! Incident domain types

use serde::{Deserialize, Serialize};

use super::{LocalizedText, Named};

/// A status page incident.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Incident {
    pub uuid: String,

    /// ISO 8601 timestamp
    pub date: String,

    pub title: LocalizedText,
    pub text: LocalizedText,

    /// Incident type (outage, incident, ...)
    #[serde(rename = "type")]
    pub incident_type: String,

    /// Severity (minor, major, critical) when the API reports one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,

    #[serde(rename = "affectedComponents")]
    pub affected_components: Vec<String>,

    #[serde(rename = "statuspages")]
    pub status_pages: Vec<String>,

    /// Timeline of status updates
    pub updates: Vec<IncidentUpdate>,
}

/// A status update posted on an incident.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IncidentUpdate {
    pub uuid: String,

    /// ISO 8601 timestamp
    pub date: String,

    pub text: LocalizedText,

    /// investigating, identified, update, monitoring or resolved
    #[serde(rename = "type")]
    pub update_type: String,
}

impl IncidentUpdate {
    pub fn new(date: impl Into<String>, update_type: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            update_type: update_type.into(),
            ..Default::default()
        }
    }
}

impl Incident {
    pub fn new(uuid: impl Into<String>, title: impl Into<String>, incident_type: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            title: LocalizedText::en(title),
            incident_type: incident_type.into(),
            ..Default::default()
        }
    }

    pub fn with_severity(mut self, severity: impl Into<String>) -> Self {
        self.severity = Some(severity.into());
        self
    }

    pub fn with_update(mut self, update: IncidentUpdate) -> Self {
        self.updates.push(update);
        self
    }

    /// Type of the most recent update, or None before the first update.
    ///
    /// Updates are ordered by date; on equal dates the later entry wins.
    pub fn current_status(&self) -> Option<&str> {
        self.updates
            .iter()
            .max_by(|a, b| a.date.cmp(&b.date))
            .map(|update| update.update_type.as_str())
    }
}

impl Named for Incident {
    fn name(&self) -> &str {
        self.title.english()
    }
}
