//! Diagnostic sink shared across predicate evaluation
//!
//! Filter definition errors are reported here rather than returned, so a bad
//! pattern excludes records without aborting the surrounding list read. The
//! sink is shared by reference and internally synchronised, which lets a
//! caller evaluate records concurrently against a single sink.

use serde::Serialize;
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Diagnostic severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A single user-facing diagnostic
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
}

impl Diagnostic {
    pub fn error<S: Into<String>, D: Into<String>>(summary: S, detail: D) -> Self {
        Self {
            severity: Severity::Error,
            summary: summary.into(),
            detail: detail.into(),
        }
    }

    pub fn warning<S: Into<String>, D: Into<String>>(summary: S, detail: D) -> Self {
        Self {
            severity: Severity::Warning,
            summary: summary.into(),
            detail: detail.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.severity, self.summary, self.detail)
    }
}

/// Caller-owned accumulator of diagnostics.
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Mutex<Vec<Diagnostic>>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, Vec<Diagnostic>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append a diagnostic
    pub fn push(&self, diagnostic: Diagnostic) {
        self.entries().push(diagnostic);
    }

    /// Append an error diagnostic
    pub fn add_error<S: Into<String>, D: Into<String>>(&self, summary: S, detail: D) {
        self.push(Diagnostic::error(summary, detail));
    }

    /// Append a warning diagnostic
    pub fn add_warning<S: Into<String>, D: Into<String>>(&self, summary: S, detail: D) {
        self.push(Diagnostic::warning(summary, detail));
    }

    /// Append every diagnostic from another sink
    pub fn append(&self, other: Diagnostics) {
        let other = other.into_vec();
        self.entries().extend(other);
    }

    pub fn has_error(&self) -> bool {
        self.entries().iter().any(Diagnostic::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.entries().iter().filter(|d| d.is_error()).count()
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Copy of the diagnostics collected so far
    pub fn snapshot(&self) -> Vec<Diagnostic> {
        self.entries().clone()
    }

    /// Error diagnostics collected so far
    pub fn errors(&self) -> Vec<Diagnostic> {
        self.entries().iter().filter(|d| d.is_error()).cloned().collect()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
