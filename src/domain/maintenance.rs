//! Maintenance window domain types

use serde::{Deserialize, Serialize};

use super::{LocalizedText, Named};

/// A scheduled maintenance window.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Maintenance {
    pub uuid: String,

    /// Internal name
    pub name: String,

    /// Public title shown on status pages
    pub title: LocalizedText,
    pub text: LocalizedText,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,

    pub timezone: String,

    /// Affected monitor UUIDs
    pub monitors: Vec<String>,

    #[serde(rename = "statuspages")]
    pub status_pages: Vec<String>,

    /// upcoming, ongoing or completed (read-only)
    pub status: String,
}

impl Maintenance {
    pub fn new(uuid: impl Into<String>, name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            name: name.into(),
            title: LocalizedText::en(title),
            ..Default::default()
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }
}

impl Named for Maintenance {
    fn name(&self) -> &str {
        self.title.english()
    }
}
