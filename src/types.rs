//! Common types used throughout the adapter
//!
//! Shared type aliases for the raw JSON shapes exchanged with the datasource.

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type, the raw shape of one datasource record
pub type JsonObject = serde_json::Map<String, JsonValue>;
