//! Object normalization module
//!
//! Converts raw datasource records into typed attribute maps described by the
//! caller's attribute schema.
//!
//! # Overview
//!
//! Each requested attribute names a field of the raw record (optionally as a
//! `$.`-prefixed JSON path into nested objects) and the type it must be
//! converted to. Date-time attributes are parsed against an ordered list of
//! accepted formats.

mod converter;
mod datetime;
mod types;

pub use converter::convert_json_object_list;
pub use datetime::{default_date_time_formats, parse_date_time, DateTimeFormat};
pub use types::{
    AttributeConfig, AttributeType, AttributeValue, NormalizeError, NormalizeOptions, Object,
};

#[cfg(test)]
mod tests;
