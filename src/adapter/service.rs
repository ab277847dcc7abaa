//! The `GetPage` service

use super::types::{Page, PageRequest};
use super::validation::{validate_get_page_request, ValidatedRequest};
use crate::datasource::{self, Client, EntityKind};
use crate::error::{Error, Result};
use crate::http::classify_status;
use crate::normalize::{
    convert_json_object_list, default_date_time_formats, AttributeConfig, NormalizeOptions,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Serves `GetPage` requests against a datasource client
#[derive(Clone)]
pub struct Adapter {
    client: Arc<dyn Client>,
}

impl Adapter {
    /// Create an adapter around a datasource client
    pub fn new(client: impl Client + 'static) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Create an adapter around a shared datasource client
    pub fn from_shared(client: Arc<dyn Client>) -> Self {
        Self { client }
    }

    /// Validate the request, then fetch and normalize one page
    pub async fn get_page(&self, request: &PageRequest) -> Result<Page> {
        let validated = validate_get_page_request(request)?;
        self.request_page_from_datasource(request, validated).await
    }

    /// Fetch one page for an already validated request
    pub async fn request_page_from_datasource(
        &self,
        request: &PageRequest,
        validated: ValidatedRequest<'_>,
    ) -> Result<Page> {
        let req = datasource::Request {
            base_url: normalize_address(&request.address),
            token: validated.token.to_string(),
            page_size: request.page_size,
            entity: validated.entity,
            cursor: request.cursor.clone(),
            timeout: request.timeout(),
        };

        let resp = self.client.get_page(&req).await?;

        if let Some(err) = classify_status(resp.status_code, &resp.retry_after_header) {
            warn!(
                entity = %validated.entity,
                status = resp.status_code,
                retry_after = %resp.retry_after_header,
                "Datasource returned an error status"
            );
            return Err(err);
        }

        let options = NormalizeOptions::new()
            .with_json_path_attribute_names()
            .with_date_time_formats(default_date_time_formats());

        let attributes = with_entity_unique_id(&request.entity.attributes, validated.entity);

        let objects = convert_json_object_list(&attributes, &resp.objects, &options)
            .map_err(|e| {
                Error::internal(format!(
                    "Failed to convert datasource response objects: {e}."
                ))
            })?;

        debug!(
            entity = %validated.entity,
            count = objects.len(),
            next_cursor = %resp.next_cursor,
            "Fetched page"
        );

        Ok(Page {
            objects,
            next_cursor: resp.next_cursor,
        })
    }
}

impl std::fmt::Debug for Adapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Adapter").finish_non_exhaustive()
    }
}

/// The entity's own identifier attribute is always treated as unique,
/// whether or not the caller flagged it.
fn with_entity_unique_id(
    attributes: &[AttributeConfig],
    entity: EntityKind,
) -> Vec<AttributeConfig> {
    attributes
        .iter()
        .cloned()
        .map(|mut attribute| {
            attribute.unique_id |= attribute.external_id == entity.unique_id_attribute();
            attribute
        })
        .collect()
}

/// Force a datasource address onto https.
///
/// `http://` is upgraded, a missing scheme gets `https://`, and trailing
/// slashes are dropped so paths join cleanly.
pub fn normalize_address(address: &str) -> String {
    let address = address.trim_end_matches('/');

    if address.starts_with("https://") {
        address.to_string()
    } else if let Some(rest) = address.strip_prefix("http://") {
        format!("https://{rest}")
    } else {
        format!("https://{address}")
    }
}
