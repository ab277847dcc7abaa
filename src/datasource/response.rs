//! Response envelope decoding
//!
//! PagerDuty wraps list results as:
//!
//! ```text
//! { "teams": [ {..}, .. ], "limit": 25, "offset": 0, "more": true }
//! ```
//!
//! where the record key is the entity's external ID.

use super::entity::EntityKind;
use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue};
use serde::Deserialize;

/// Decoded list envelope
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    limit: Option<i64>,
    #[serde(default)]
    offset: Option<i64>,
    #[serde(default)]
    more: Option<bool>,
    /// Remaining top-level keys, one of which holds the records
    #[serde(flatten)]
    records: JsonObject,
}

/// Decode a response body into raw records and the next cursor.
///
/// A missing or `null` record array is treated as an empty page.
pub fn parse_response(body: &[u8], entity: EntityKind) -> Result<(Vec<JsonObject>, String)> {
    let mut envelope: Envelope = serde_json::from_slice(body).map_err(unmarshal_error)?;

    let objects = match envelope.records.remove(entity.external_id()) {
        None | Some(JsonValue::Null) => Vec::new(),
        Some(records) => serde_json::from_value(records).map_err(unmarshal_error)?,
    };

    // null pagination fields read as their zero values
    let cursor = next_cursor(
        envelope.limit.unwrap_or_default(),
        envelope.offset.unwrap_or_default(),
        envelope.more.unwrap_or_default(),
    )?;

    Ok((objects, cursor))
}

/// Derive the cursor for the page after this one.
///
/// Returns an empty string once the datasource reports no more pages.
pub fn next_cursor(limit: i64, offset: i64, more: bool) -> Result<String> {
    if !more {
        return Ok(String::new());
    }

    limit
        .checked_add(offset)
        .map(|next| next.to_string())
        .ok_or_else(|| {
            Error::internal(format!(
                "Datasource pagination overflowed (limit {limit}, offset {offset})."
            ))
        })
}

fn unmarshal_error(err: serde_json::Error) -> Error {
    Error::internal(format!("Failed to unmarshal the datasource response: {err}."))
}
