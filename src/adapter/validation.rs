//! Request validation
//!
//! Rejects malformed or unsupported requests before any network call.
//! Checks run in a fixed order and the first failure is returned.

use super::types::PageRequest;
use crate::config::Config;
use crate::datasource::EntityKind;
use crate::error::{Error, Result};

/// Largest page the datasource is asked for
pub const MAX_PAGE_SIZE: i64 = 100;

/// The parts of a request established by validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedRequest<'a> {
    /// Requested entity kind
    pub entity: EntityKind,
    /// Non-empty datasource token
    pub token: &'a str,
}

/// Validate the fields of a `GetPage` request
pub fn validate_get_page_request(request: &PageRequest) -> Result<ValidatedRequest<'_>> {
    Config::from_value(&request.config)
        .and_then(|config| config.validate())
        .map_err(|e| Error::invalid_config(format!("Provided config is invalid: {e}.")))?;

    let token = match &request.auth {
        Some(auth) if !auth.http_authorization.is_empty() => auth.http_authorization.as_str(),
        _ => {
            return Err(Error::invalid_config(
                "PagerDuty auth is missing required token.",
            ))
        }
    };

    let Some(entity) = EntityKind::from_external_id(&request.entity.external_id) else {
        return Err(Error::invalid_entity_config(
            "Provided entity external ID is invalid.",
        ));
    };

    if !request.entity.child_entities.is_empty() {
        return Err(Error::invalid_entity_config(
            "Requested entity does not support child entities.",
        ));
    }

    if request.page_size > MAX_PAGE_SIZE {
        return Err(Error::invalid_page_request(format!(
            "Provided page size ({}) exceeds maximum ({MAX_PAGE_SIZE}).",
            request.page_size
        )));
    }

    Ok(ValidatedRequest { entity, token })
}
