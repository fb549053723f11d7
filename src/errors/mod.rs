//! # Error Handling
//!
//! Error types for the Hyperping provider core, defined with `thiserror`.
//!
//! Two failure kinds matter to callers: a *filter definition error* (a
//! `name_regex` that does not compile, or an unrecognised filter value) and a
//! *structural validation error* (an invalid status page service tree).
//! Neither is ever retried.

pub mod types;

pub use types::{ProviderError, Result};
