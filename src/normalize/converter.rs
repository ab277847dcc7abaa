//! Record conversion

use super::datetime::parse_date_time;
use super::types::{
    AttributeConfig, AttributeType, AttributeValue, NormalizeError, NormalizeOptions, Object,
};
use crate::types::{JsonObject, JsonValue};

/// Convert raw records into normalized objects.
///
/// Only the requested attributes are kept. Missing and `null` values are
/// omitted, except for unique ID attributes which every record must carry.
pub fn convert_json_object_list(
    attributes: &[AttributeConfig],
    objects: &[JsonObject],
    options: &NormalizeOptions,
) -> Result<Vec<Object>, NormalizeError> {
    objects
        .iter()
        .enumerate()
        .map(|(index, object)| convert_object(index, attributes, object, options))
        .collect()
}

fn convert_object(
    index: usize,
    attributes: &[AttributeConfig],
    object: &JsonObject,
    options: &NormalizeOptions,
) -> Result<Object, NormalizeError> {
    let mut converted = Object::new();

    for attribute in attributes {
        let value = lookup(object, &attribute.external_id, options.json_path_attribute_names)
            .filter(|v| !v.is_null());

        let Some(value) = value else {
            if attribute.unique_id {
                return Err(NormalizeError::MissingUniqueId {
                    index,
                    attribute: attribute.external_id.clone(),
                });
            }
            continue;
        };

        let converted_value = if attribute.list {
            let JsonValue::Array(items) = value else {
                return Err(NormalizeError::NotAList {
                    index,
                    attribute: attribute.external_id.clone(),
                    found: value.to_string(),
                });
            };
            let values = items
                .iter()
                .filter(|item| !item.is_null())
                .map(|item| convert_scalar(index, attribute, item, options))
                .collect::<Result<Vec<_>, _>>()?;
            AttributeValue::List(values)
        } else {
            convert_scalar(index, attribute, value, options)?
        };

        converted.insert(attribute.external_id.clone(), converted_value);
    }

    Ok(converted)
}

/// Resolve an attribute name against a record
fn lookup<'a>(object: &'a JsonObject, external_id: &str, json_path: bool) -> Option<&'a JsonValue> {
    let path = match external_id.strip_prefix("$.") {
        Some(path) if json_path => path,
        _ => return object.get(external_id),
    };

    let mut parts = path.split('.');
    let mut current = object.get(parts.next()?)?;
    for part in parts {
        current = current.as_object()?.get(part)?;
    }
    Some(current)
}

fn convert_scalar(
    index: usize,
    attribute: &AttributeConfig,
    value: &JsonValue,
    options: &NormalizeOptions,
) -> Result<AttributeValue, NormalizeError> {
    let mismatch = || NormalizeError::TypeMismatch {
        index,
        attribute: attribute.external_id.clone(),
        expected: attribute.attribute_type.as_str(),
        found: value.to_string(),
    };

    match attribute.attribute_type {
        AttributeType::String => value
            .as_str()
            .map(|s| AttributeValue::String(s.to_string()))
            .ok_or_else(mismatch),
        AttributeType::Int64 => value
            .as_i64()
            .or_else(|| {
                // Integral floats such as 3.0
                value
                    .as_f64()
                    .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                    .map(|f| f as i64)
            })
            .map(AttributeValue::Int64)
            .ok_or_else(mismatch),
        AttributeType::Double => value
            .as_f64()
            .map(AttributeValue::Double)
            .ok_or_else(mismatch),
        AttributeType::Bool => value
            .as_bool()
            .map(AttributeValue::Bool)
            .ok_or_else(mismatch),
        AttributeType::DateTime => {
            let raw = value.as_str().ok_or_else(mismatch)?;
            parse_date_time(raw, &options.date_time_formats)
                .map(AttributeValue::DateTime)
                .ok_or_else(|| NormalizeError::InvalidDateTime {
                    index,
                    attribute: attribute.external_id.clone(),
                    value: raw.to_string(),
                })
        }
    }
}
