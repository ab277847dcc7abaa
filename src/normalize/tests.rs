//! Tests for the normalization module

use super::*;
use crate::types::JsonObject;
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;

fn records(value: serde_json::Value) -> Vec<JsonObject> {
    serde_json::from_value(value).unwrap()
}

fn options() -> NormalizeOptions {
    NormalizeOptions::new()
        .with_json_path_attribute_names()
        .with_date_time_formats(default_date_time_formats())
}

// ============================================================================
// Date-Time Tests
// ============================================================================

#[test]
fn test_parse_rfc3339() {
    let formats = default_date_time_formats();
    assert_eq!(
        parse_date_time("2024-01-15T10:30:00Z", &formats),
        Some(Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap())
    );
    assert_eq!(
        parse_date_time("2024-01-15T12:30:00+02:00", &formats),
        Some(Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap())
    );
}

#[test]
fn test_parse_rfc3339_nanoseconds() {
    let parsed = parse_date_time("2024-01-15T10:30:00.123456789Z", &default_date_time_formats())
        .unwrap();
    assert_eq!(parsed.timestamp_subsec_nanos(), 123_456_789);
}

#[test]
fn test_parse_millis_with_compact_offset() {
    let parsed =
        parse_date_time("2024-01-15T17:30:00.250+0700", &default_date_time_formats()).unwrap();
    assert_eq!(
        parsed,
        Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
            + chrono::Duration::milliseconds(250)
    );
}

#[test]
fn test_parse_bare_date_is_utc_midnight() {
    assert_eq!(
        parse_date_time("2024-01-15", &default_date_time_formats()),
        Some(Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap())
    );
}

#[test]
fn test_parse_unsupported_date_time() {
    let formats = default_date_time_formats();
    assert_eq!(parse_date_time("15/01/2024", &formats), None);
    assert_eq!(parse_date_time("", &formats), None);
    assert_eq!(parse_date_time("2024-01-15T10:30:00Z", &[]), None);
}

// ============================================================================
// Conversion Tests
// ============================================================================

#[test]
fn test_convert_scalar_attributes() {
    let attributes = vec![
        AttributeConfig::new("id", AttributeType::String).unique_id(),
        AttributeConfig::new("name", AttributeType::String),
        AttributeConfig::new("member_count", AttributeType::Int64),
        AttributeConfig::new("score", AttributeType::Double),
        AttributeConfig::new("default_role", AttributeType::Bool),
        AttributeConfig::new("created_at", AttributeType::DateTime),
    ];
    let objects = records(json!([{
        "id": "PQ9K7I8",
        "name": "Engineering",
        "member_count": 12,
        "score": 0.5,
        "default_role": true,
        "created_at": "2024-01-15",
        "summary": "ignored"
    }]));

    let converted = convert_json_object_list(&attributes, &objects, &options()).unwrap();

    assert_eq!(converted.len(), 1);
    let team = &converted[0];
    assert_eq!(team.len(), 6);
    assert_eq!(team["id"], AttributeValue::String("PQ9K7I8".to_string()));
    assert_eq!(team["member_count"], AttributeValue::Int64(12));
    assert_eq!(team["score"], AttributeValue::Double(0.5));
    assert_eq!(team["default_role"], AttributeValue::Bool(true));
    assert_eq!(
        team["created_at"],
        AttributeValue::DateTime(Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap())
    );
    assert!(!team.contains_key("summary"));
}

#[test]
fn test_convert_preserves_order() {
    let attributes = vec![AttributeConfig::new("id", AttributeType::String)];
    let objects = records(json!([{"id": "1"}, {"id": "2"}, {"id": "3"}]));

    let converted = convert_json_object_list(&attributes, &objects, &options()).unwrap();

    let ids: Vec<_> = converted.iter().map(|o| o["id"].clone()).collect();
    assert_eq!(
        ids,
        vec![
            AttributeValue::String("1".to_string()),
            AttributeValue::String("2".to_string()),
            AttributeValue::String("3".to_string()),
        ]
    );
}

#[test]
fn test_convert_omits_null_and_missing() {
    let attributes = vec![
        AttributeConfig::new("id", AttributeType::String),
        AttributeConfig::new("description", AttributeType::String),
        AttributeConfig::new("parent", AttributeType::String),
    ];
    let objects = records(json!([{"id": "1", "description": null}]));

    let converted = convert_json_object_list(&attributes, &objects, &options()).unwrap();

    assert_eq!(converted[0].len(), 1);
    assert!(converted[0].contains_key("id"));
}

#[test]
fn test_convert_json_path_attribute() {
    let attributes = vec![AttributeConfig::new("$.parent.id", AttributeType::String)];
    let objects = records(json!([{"parent": {"id": "P1", "type": "team_reference"}}]));

    let converted = convert_json_object_list(&attributes, &objects, &options()).unwrap();
    assert_eq!(
        converted[0]["$.parent.id"],
        AttributeValue::String("P1".to_string())
    );

    // Without JSON path support the name is a literal key
    let literal = convert_json_object_list(&attributes, &objects, &NormalizeOptions::new()).unwrap();
    assert!(literal[0].is_empty());
}

#[test]
fn test_convert_list_attribute() {
    let attributes = vec![AttributeConfig::new("tags", AttributeType::String).list()];
    let objects = records(json!([{"tags": ["ops", null, "oncall"]}]));

    let converted = convert_json_object_list(&attributes, &objects, &options()).unwrap();

    assert_eq!(
        converted[0]["tags"],
        AttributeValue::List(vec![
            AttributeValue::String("ops".to_string()),
            AttributeValue::String("oncall".to_string()),
        ])
    );
}

#[test]
fn test_convert_list_attribute_requires_array() {
    let attributes = vec![AttributeConfig::new("tags", AttributeType::String).list()];
    let objects = records(json!([{"tags": "ops"}]));

    let err = convert_json_object_list(&attributes, &objects, &options()).unwrap_err();
    assert!(matches!(err, NormalizeError::NotAList { index: 0, .. }));
}

#[test]
fn test_convert_missing_unique_id() {
    let attributes = vec![AttributeConfig::new("id", AttributeType::String).unique_id()];
    let objects = records(json!([{"id": "1"}, {"name": "no id"}]));

    let err = convert_json_object_list(&attributes, &objects, &options()).unwrap_err();
    assert_eq!(
        err,
        NormalizeError::MissingUniqueId {
            index: 1,
            attribute: "id".to_string()
        }
    );
    assert_eq!(err.to_string(), "object 1 is missing unique ID attribute 'id'");
}

#[test]
fn test_convert_type_mismatch() {
    let attributes = vec![AttributeConfig::new("member_count", AttributeType::Int64)];
    let objects = records(json!([{"member_count": "twelve"}]));

    let err = convert_json_object_list(&attributes, &objects, &options()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "attribute 'member_count' of object 0 is not a valid int64: \"twelve\""
    );
}

#[test]
fn test_convert_integral_float_to_int64() {
    let attributes = vec![AttributeConfig::new("n", AttributeType::Int64)];
    let objects = records(json!([{"n": 3.0}]));
    let converted = convert_json_object_list(&attributes, &objects, &options()).unwrap();
    assert_eq!(converted[0]["n"], AttributeValue::Int64(3));

    let objects = records(json!([{"n": 3.5}]));
    assert!(convert_json_object_list(&attributes, &objects, &options()).is_err());
}

#[test]
fn test_convert_invalid_date_time() {
    let attributes = vec![AttributeConfig::new("created_at", AttributeType::DateTime)];
    let objects = records(json!([{"created_at": "yesterday"}]));

    let err = convert_json_object_list(&attributes, &objects, &options()).unwrap_err();
    assert!(matches!(err, NormalizeError::InvalidDateTime { .. }));
}

#[test]
fn test_convert_empty_input() {
    let attributes = vec![AttributeConfig::new("id", AttributeType::String).unique_id()];
    let converted = convert_json_object_list(&attributes, &[], &options()).unwrap();
    assert!(converted.is_empty());
}

#[test]
fn test_attribute_config_deserialize() {
    let attribute: AttributeConfig =
        serde_json::from_value(json!({"external_id": "id", "type": "string", "unique_id": true}))
            .unwrap();
    assert_eq!(attribute, AttributeConfig::new("id", AttributeType::String).unique_id());
}

#[test]
fn test_attribute_value_serialize() {
    let mut object = Object::new();
    object.insert("id".to_string(), AttributeValue::String("1".to_string()));
    object.insert(
        "created_at".to_string(),
        AttributeValue::DateTime(Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap()),
    );
    object.insert(
        "tags".to_string(),
        AttributeValue::List(vec![AttributeValue::Int64(1)]),
    );

    assert_eq!(
        serde_json::to_value(&object).unwrap(),
        json!({"id": "1", "created_at": "2024-01-15T00:00:00Z", "tags": [1]})
    );
}
