//! Status page service tree validation
//!
//! A section holds services; a service is either flat (references a monitor
//! by uuid) or a group holding child services. Trees are checked before any
//! create or update so invalid configuration never reaches the API.

use tracing::{debug, warn};

use crate::domain::{OptionalValue, SectionConfig, ServiceConfig};
use crate::errors::{ProviderError, Result};

pub const GROUP_WITHOUT_SERVICES: &str = "group service must have at least one nested service";
pub const FLAT_WITHOUT_UUID: &str = "uuid required for non-group service";

/// Validate every section's service tree.
///
/// Nodes are visited depth-first in configuration order and the first
/// violation is returned with its path (e.g. `sections[0].services[1]`).
/// The tree is never modified.
pub fn validate_service_tree(sections: &[SectionConfig]) -> Result<()> {
    let span = crate::validation_span!("service_tree");
    let _guard = span.enter();

    for (section_index, section) in sections.iter().enumerate() {
        let path = format!("sections[{}]", section_index);
        if let Err(e) = validate_services(&section.services, &path) {
            warn!(field = e.field().unwrap_or_default(), error = %e, "Rejected status page service tree");
            return Err(e);
        }
    }

    debug!(sections = sections.len(), "Service tree validated");
    Ok(())
}

fn validate_services(services: &[ServiceConfig], parent: &str) -> Result<()> {
    for (index, service) in services.iter().enumerate() {
        let path = format!("{}.services[{}]", parent, index);
        validate_service(service, &path)?;
    }
    Ok(())
}

fn validate_service(service: &ServiceConfig, path: &str) -> Result<()> {
    if service.is_group() {
        if service.services.is_empty() {
            return Err(ProviderError::validation_field(GROUP_WITHOUT_SERVICES, path));
        }
        return validate_services(&service.services, path);
    }

    // An unknown uuid refers to a monitor created in the same apply.
    let has_uuid = match &service.uuid {
        OptionalValue::Known(uuid) => !uuid.is_empty(),
        OptionalValue::Unknown => true,
        OptionalValue::Unset => false,
    };
    if !has_uuid {
        return Err(ProviderError::validation_field(FLAT_WITHOUT_UUID, path));
    }
    Ok(())
}
