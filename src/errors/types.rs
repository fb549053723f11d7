//! # Error Types
//!
//! Error types for the provider core using `thiserror`.

use crate::filter::Diagnostic;

/// Custom result type for provider operations
pub type Result<T> = std::result::Result<T, ProviderError>;

/// Main error type for the provider core
#[derive(thiserror::Error, Debug)]
pub enum ProviderError {
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Structural or field validation errors
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// Invalid filter definition (malformed regex, unrecognised value)
    #[error("Invalid filter definition for '{field}': {message}")]
    FilterDefinition {
        field: String,
        pattern: String,
        message: String,
        #[source]
        source: Option<regex::Error>,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {context}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        context: String,
    },
}

impl ProviderError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn config_with_source<S: Into<String>>(
        message: S,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(source),
        }
    }

    /// Create a validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
            field: None,
        }
    }

    /// Create a validation error with field information
    pub fn validation_field<S: Into<String>, F: Into<String>>(message: S, field: F) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a filter definition error from a regex compilation failure
    pub fn filter_definition<F: Into<String>, P: Into<String>>(
        field: F,
        pattern: P,
        source: regex::Error,
    ) -> Self {
        Self::FilterDefinition {
            field: field.into(),
            pattern: pattern.into(),
            message: source.to_string(),
            source: Some(source),
        }
    }

    /// Create a filter definition error for a value outside the accepted vocabulary
    pub fn invalid_filter_value<F: Into<String>, V: Into<String>, M: Into<String>>(
        field: F,
        value: V,
        message: M,
    ) -> Self {
        Self::FilterDefinition {
            field: field.into(),
            pattern: value.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Check if this error should be retried.
    ///
    /// Filter definition and validation errors are user-input errors and are
    /// never transient.
    pub fn is_retryable(&self) -> bool {
        false
    }

    /// Field path the error refers to, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            ProviderError::Validation { field, .. } => field.as_deref(),
            ProviderError::FilterDefinition { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Render the error as a user-facing diagnostic
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ProviderError::Validation { message, field } => {
                let detail = match field {
                    Some(field) => format!("{} (at {})", message, field),
                    None => message.clone(),
                };
                Diagnostic::error("Invalid configuration", detail)
            }
            ProviderError::FilterDefinition {
                field,
                message,
                source: Some(_),
                ..
            } => Diagnostic::error(
                "Invalid filter regex",
                format!("Failed to compile {} pattern: {}", field, message),
            ),
            ProviderError::FilterDefinition { message, .. } => {
                Diagnostic::error("Invalid filter status", message.clone())
            }
            other => Diagnostic::error("Provider error", other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            source: error,
            context: "JSON serialization failed".to_string(),
        }
    }
}

impl From<config::ConfigError> for ProviderError {
    fn from(error: config::ConfigError) -> Self {
        Self::config_with_source("Configuration loading failed", Box::new(error))
    }
}

impl From<validator::ValidationErrors> for ProviderError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages = Vec::new();
        collect_validation_messages(&errors, "", &mut messages);
        Self::validation(format!("Validation failed: {}", messages.join("; ")))
    }
}

/// Flatten nested validation errors into `path: message` entries, sorted by field
fn collect_validation_messages(
    errors: &validator::ValidationErrors,
    prefix: &str,
    out: &mut Vec<String>,
) {
    use validator::ValidationErrorsKind;

    let mut entries: Vec<_> = errors.errors().iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    for (field, kind) in entries {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                let error_messages: Vec<String> = field_errors
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map_or_else(|| e.code.to_string(), |m| m.to_string())
                    })
                    .collect();
                out.push(format!("{}: {}", path, error_messages.join(", ")));
            }
            ValidationErrorsKind::Struct(nested) => {
                collect_validation_messages(nested, &path, out);
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_validation_messages(nested, &format!("{}[{}]", path, index), out);
                }
            }
        }
    }
}
