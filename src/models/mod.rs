//
//  activecampaign
//  models/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Typed Models
//!
//! Data-holder types for the resources the client builds locally before a
//! create or update call: [`Contact`] and [`Deal`].
//!
//! Each model has two explicit JSON shapes:
//!
//! | Conversion | Shape | Used for |
//! |------------|-------|----------|
//! | `to_map` / `from_map` | Flat field mapping | Comparisons, round trips |
//! | `to_envelope` / `from_envelope` | `{"contact": {...}}` | Request and response bodies |
//!
//! Relationships (deal to contact, contact to account) are plain id
//! strings; no model owns another.

mod contact;
mod deal;

pub use contact::{Contact, CONTACT_KEY};
pub use deal::{Deal, DealBuilder, DEAL_KEY};

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::api::common::{Error, Result};

/// Returns the object stored under `key` in an envelope.
pub(crate) fn envelope_body<'a>(envelope: &'a Value, key: &str) -> Result<&'a Map<String, Value>> {
    envelope
        .get(key)
        .and_then(Value::as_object)
        .ok_or_else(|| Error::Validation(format!("expected an object under '{}'", key)))
}

/// Deserializes `null` as the type's default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserializes `null` and `""` as `None`.
pub(crate) fn empty_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(de::Error::invalid_type(
            de::Unexpected::Other(&other.to_string()),
            &"a string or number",
        )),
    }
}

/// Deserializes a string, number or `null` into a `String`, `null` as `""`.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(empty_as_none(deserializer)?.unwrap_or_default())
}

/// Deserializes a custom-field mapping.
///
/// Accepts an object, `null`, or an array. PHP-style empty arrays (`[]`),
/// the API's `[{"field": "1", "value": "x"}]` list form and bare id lists
/// such as `["1", "2"]` are all folded into a mapping keyed by field id.
/// Bare ids carry a `null` value.
pub(crate) fn field_map<'de, D>(
    deserializer: D,
) -> std::result::Result<BTreeMap<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(BTreeMap::new()),
        Some(Value::Object(map)) => Ok(map.into_iter().collect()),
        Some(Value::Array(items)) => items
            .into_iter()
            .map(|item| -> std::result::Result<(String, Value), D::Error> {
                match item {
                    Value::String(id) => return Ok((id, Value::Null)),
                    Value::Number(id) => return Ok((id.to_string(), Value::Null)),
                    _ => {}
                }
                let field = item
                    .get("field")
                    .or_else(|| item.get("customFieldId"))
                    .and_then(|f| match f {
                        Value::String(s) => Some(s.clone()),
                        Value::Number(n) => Some(n.to_string()),
                        _ => None,
                    })
                    .ok_or_else(|| {
                        <D::Error as de::Error>::custom("custom field entry has no field id")
                    })?;
                let value = item
                    .get("value")
                    .or_else(|| item.get("fieldValue"))
                    .cloned()
                    .unwrap_or(Value::Null);
                Ok((field, value))
            })
            .collect(),
        Some(other) => Err(de::Error::invalid_type(
            de::Unexpected::Other(&other.to_string()),
            &"an object or an array of field values",
        )),
    }
}

/// Visitor accepting an integer or a string holding one.
///
/// The API renders numeric fields such as `value` as strings in responses.
struct IntOrString;

impl<'de> Visitor<'de> for IntOrString {
    type Value = i64;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an integer or a string containing an integer")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<i64, E> {
        Ok(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<i64, E> {
        i64::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<i64, E> {
        v.trim()
            .parse()
            .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

pub(crate) fn int_or_string<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(IntOrString)
}

pub(crate) fn opt_int_or_string<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Wrapper(#[serde(deserialize_with = "int_or_string")] i64);

    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(value) => Wrapper::deserialize(value)
            .map(|Wrapper(n)| Some(n))
            .map_err(de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(deserialize_with = "int_or_string")]
        value: i64,
        #[serde(default, deserialize_with = "opt_int_or_string")]
        percentage: Option<i64>,
        #[serde(default, deserialize_with = "empty_as_none")]
        stage: Option<String>,
        #[serde(default, deserialize_with = "null_as_default")]
        phone: String,
    }

    #[test]
    fn test_numeric_strings_are_accepted() {
        let sample: Sample = serde_json::from_value(json!({
            "value": "15000",
            "percentage": "40",
            "stage": 3,
            "phone": null
        }))
        .unwrap();
        assert_eq!(sample.value, 15000);
        assert_eq!(sample.percentage, Some(40));
        assert_eq!(sample.stage.as_deref(), Some("3"));
        assert_eq!(sample.phone, "");
    }

    #[test]
    fn test_empty_values_become_absent() {
        let sample: Sample = serde_json::from_value(json!({
            "value": 1,
            "percentage": null,
            "stage": ""
        }))
        .unwrap();
        assert_eq!(sample.percentage, None);
        assert_eq!(sample.stage, None);
    }

    #[test]
    fn test_non_numeric_value_is_rejected() {
        let result = serde_json::from_value::<Sample>(json!({"value": "lots"}));
        assert!(result.is_err());
    }

    #[derive(Debug, Deserialize)]
    struct Fields {
        #[serde(default, deserialize_with = "field_map")]
        fields: BTreeMap<String, Value>,
    }

    #[test]
    fn test_field_map_shapes() {
        let empty: Fields = serde_json::from_value(json!({"fields": []})).unwrap();
        assert!(empty.fields.is_empty());

        let listed: Fields = serde_json::from_value(json!({
            "fields": [{"field": 1, "value": "Gold"}, {"customFieldId": "2", "fieldValue": 10}]
        }))
        .unwrap();
        assert_eq!(listed.fields.get("1"), Some(&json!("Gold")));
        assert_eq!(listed.fields.get("2"), Some(&json!(10)));

        let mapped: Fields = serde_json::from_value(json!({"fields": {"3": "x"}})).unwrap();
        assert_eq!(mapped.fields.get("3"), Some(&json!("x")));

        assert!(serde_json::from_value::<Fields>(json!({"fields": "nope"})).is_err());
    }

    #[test]
    fn test_field_map_bare_ids() {
        let ids: Fields = serde_json::from_value(json!({"fields": ["1", 2]})).unwrap();
        assert_eq!(ids.fields.len(), 2);
        assert_eq!(ids.fields.get("1"), Some(&Value::Null));
        assert_eq!(ids.fields.get("2"), Some(&Value::Null));

        assert!(serde_json::from_value::<Fields>(json!({"fields": [{"value": "x"}]})).is_err());
    }

    #[test]
    fn test_envelope_body_requires_object() {
        let envelope = json!({"deal": {"title": "x"}});
        assert!(envelope_body(&envelope, "deal").is_ok());
        assert!(matches!(
            envelope_body(&envelope, "contact"),
            Err(Error::Validation(_))
        ));
    }
}
