//! Request and response types for `GetPage`

use crate::normalize::{AttributeConfig, Object};
use crate::types::JsonValue;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Credentials for the datasource
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthCredentials {
    /// Authorization header value, forwarded verbatim
    #[serde(default)]
    pub http_authorization: String,
}

/// Entity being requested and the attributes to return
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityConfig {
    /// Entity kind external ID (e.g. "teams")
    pub external_id: String,

    /// Attributes to extract from each record
    #[serde(default)]
    pub attributes: Vec<AttributeConfig>,

    /// Nested entities to expand (unsupported, must be empty)
    #[serde(default)]
    pub child_entities: Vec<EntityConfig>,
}

/// A request for one page of an entity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Datasource configuration, validated against [`crate::config::Config`]
    #[serde(default)]
    pub config: JsonValue,

    /// Datasource credentials
    #[serde(default)]
    pub auth: Option<AuthCredentials>,

    /// Requested entity
    pub entity: EntityConfig,

    /// Maximum number of records in the page
    pub page_size: i64,

    /// Cursor returned by the previous page, empty for the first page
    #[serde(default)]
    pub cursor: String,

    /// Datasource address
    pub address: String,

    /// Overall deadline for the call in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

impl PageRequest {
    /// Caller-supplied deadline, if any
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

/// One page of normalized objects
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Page {
    /// Objects in datasource order
    pub objects: Vec<Object>,

    /// Cursor for the next page, empty when there are no more pages
    pub next_cursor: String,
}
