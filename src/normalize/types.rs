//! Normalization types

use super::datetime::DateTimeFormat;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Target type of an attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    String,
    Int64,
    Double,
    Bool,
    DateTime,
}

impl AttributeType {
    /// Name used in error messages
    pub fn as_str(self) -> &'static str {
        match self {
            AttributeType::String => "string",
            AttributeType::Int64 => "int64",
            AttributeType::Double => "double",
            AttributeType::Bool => "bool",
            AttributeType::DateTime => "date_time",
        }
    }
}

/// One attribute requested by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeConfig {
    /// Field name (or `$.`-prefixed path) in the raw record
    pub external_id: String,

    /// Type the value is converted to
    #[serde(rename = "type")]
    pub attribute_type: AttributeType,

    /// Whether the value is an array of `attribute_type`
    #[serde(default)]
    pub list: bool,

    /// Whether the attribute identifies the record
    #[serde(default)]
    pub unique_id: bool,
}

impl AttributeConfig {
    /// Create a scalar attribute
    pub fn new(external_id: impl Into<String>, attribute_type: AttributeType) -> Self {
        Self {
            external_id: external_id.into(),
            attribute_type,
            list: false,
            unique_id: false,
        }
    }

    /// Mark the attribute as a list
    #[must_use]
    pub fn list(mut self) -> Self {
        self.list = true;
        self
    }

    /// Mark the attribute as the record's unique identifier
    #[must_use]
    pub fn unique_id(mut self) -> Self {
        self.unique_id = true;
        self
    }
}

/// A converted attribute value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    String(String),
    Int64(i64),
    Double(f64),
    Bool(bool),
    DateTime(DateTime<Utc>),
    List(Vec<AttributeValue>),
}

/// A normalized record, keyed by attribute external ID
pub type Object = BTreeMap<String, AttributeValue>;

/// Options controlling conversion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Resolve `$.a.b` attribute names as paths into nested objects
    pub json_path_attribute_names: bool,
    /// Accepted date-time formats, tried in order
    pub date_time_formats: Vec<DateTimeFormat>,
}

impl NormalizeOptions {
    /// Create options with no JSON paths and no date-time formats
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable JSON path attribute names
    #[must_use]
    pub fn with_json_path_attribute_names(mut self) -> Self {
        self.json_path_attribute_names = true;
        self
    }

    /// Set the accepted date-time formats
    #[must_use]
    pub fn with_date_time_formats(mut self, formats: impl IntoIterator<Item = DateTimeFormat>) -> Self {
        self.date_time_formats = formats.into_iter().collect();
        self
    }
}

/// Conversion failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("object {index} is missing unique ID attribute '{attribute}'")]
    MissingUniqueId { index: usize, attribute: String },

    #[error("attribute '{attribute}' of object {index} is not a valid {expected}: {found}")]
    TypeMismatch {
        index: usize,
        attribute: String,
        expected: &'static str,
        found: String,
    },

    #[error("attribute '{attribute}' of object {index} is a list attribute but holds {found}")]
    NotAList {
        index: usize,
        attribute: String,
        found: String,
    },

    #[error("attribute '{attribute}' of object {index} has unsupported date-time value '{value}'")]
    InvalidDateTime {
        index: usize,
        attribute: String,
        value: String,
    },
}
