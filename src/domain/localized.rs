//! Multi-language text

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Language code → text, as used for titles and names on status pages,
/// incidents and maintenance windows.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText(BTreeMap<String, String>);

impl LocalizedText {
    /// Create an empty text
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a text with only an English entry
    pub fn en(text: impl Into<String>) -> Self {
        Self::new().with("en", text)
    }

    /// Add a translation (builder pattern)
    pub fn with(mut self, language: impl Into<String>, text: impl Into<String>) -> Self {
        self.0.insert(language.into(), text.into());
        self
    }

    /// Text for a language
    pub fn get(&self, language: &str) -> Option<&str> {
        self.0.get(language).map(String::as_str)
    }

    /// English text, or empty when there is no English entry
    pub fn english(&self) -> &str {
        self.get("en").unwrap_or_default()
    }

    /// English text if present, otherwise the first translation by language code
    pub fn preferred(&self) -> Option<&str> {
        self.get("en")
            .or_else(|| self.0.values().next().map(String::as_str))
    }

    /// Configured languages
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
