//! # Validation Module
//!
//! Configuration validation run before any mutating API call:
//! 1. Field validation through the `validator` derive and the reusable
//!    validators in [`fields`]
//! 2. Cross-field rules attached as `validator` schema functions
//! 3. Structural validation of the status page service tree
//!
//! All failures are `ProviderError::Validation` and are never retried.

use validator::Validate;

use crate::domain::StatusPageConfig;
use crate::errors::Result;

pub mod fields;
pub mod service_tree;

pub use fields::*;
pub use service_tree::{validate_service_tree, FLAT_WITHOUT_UUID, GROUP_WITHOUT_SERVICES};

/// Validate any structure that implements Validate trait
pub fn validate_request<T: Validate>(request: &T) -> Result<()> {
    request.validate()?;
    Ok(())
}

/// Validate a status page configuration before create or update.
///
/// Field rules run first, then the hostname-or-subdomain rule, then the
/// service tree. The first failure is returned.
pub fn validate_status_page(config: &StatusPageConfig) -> Result<()> {
    validate_request(config)?;
    validate_service_tree(&config.sections)
}
