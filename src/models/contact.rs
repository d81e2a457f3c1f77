//
//  activecampaign
//  models/contact.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Contact model.
//!
//! A [`Contact`] is identified by its email address; every other field is
//! optional and defaults to an empty string or an empty mapping.
//!
//! # Example
//!
//! ```rust
//! use activecampaign::models::Contact;
//! use serde_json::json;
//!
//! let contact = Contact::new("jane@example.com")
//!     .with_first_name("Jane")
//!     .with_last_name("Doe")
//!     .with_field_value("7", "Gold");
//!
//! assert_eq!(contact.to_envelope()["contact"]["first_name"], json!("Jane"));
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::{envelope_body, field_map, lenient_string};
use crate::api::common::{Error, Result};

/// Envelope key wrapping a contact in request and response bodies.
pub const CONTACT_KEY: &str = "contact";

/// Response-style name keys read when the wire key is absent.
const NAME_FALLBACKS: [(&str, &str); 2] = [("first_name", "firstName"), ("last_name", "lastName")];

/// A contact as sent to and received from the contacts endpoints.
///
/// # Fields
///
/// | Field | Wire key | Default |
/// |-------|----------|---------|
/// | email | `email` | required |
/// | first name | `first_name` (`from_map` falls back to `firstName`) | `""` |
/// | last name | `last_name` (`from_map` falls back to `lastName`) | `""` |
/// | phone | `phone` | `""` |
/// | custom fields | `fieldValues` | `{}` |
/// | organization id | `orgid` | `""` |
///
/// # Example
///
/// ```rust
/// use activecampaign::models::Contact;
///
/// let mut contact = Contact::new("jane@example.com");
/// contact.set_phone("+1 555 0100").set_orgid("12");
///
/// let copy = Contact::from_map(&contact.to_map())?;
/// assert_eq!(copy, contact);
/// # Ok::<(), activecampaign::api::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    email: String,

    #[serde(default, deserialize_with = "lenient_string")]
    first_name: String,

    #[serde(default, deserialize_with = "lenient_string")]
    last_name: String,

    #[serde(default, deserialize_with = "lenient_string")]
    phone: String,

    #[serde(rename = "fieldValues", default, deserialize_with = "field_map")]
    field_values: BTreeMap<String, Value>,

    #[serde(default, deserialize_with = "lenient_string")]
    orgid: String,
}

impl Contact {
    /// Creates a contact with only an email address.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            first_name: String::new(),
            last_name: String::new(),
            phone: String::new(),
            field_values: BTreeMap::new(),
            orgid: String::new(),
        }
    }

    /// Rebuilds a contact from its flat mapping.
    ///
    /// Keys other than the contact fields (such as `id` or `cdate` in API
    /// responses) are ignored, and `null` values count as unset. The API's
    /// `firstName` and `lastName` are read only when `first_name` and
    /// `last_name` are absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `email` is missing or a field has
    /// an unusable type.
    pub fn from_map(map: &Map<String, Value>) -> Result<Self> {
        let mut map = map.clone();
        for (wire, fallback) in NAME_FALLBACKS {
            if let Some(value) = map.remove(fallback) {
                map.entry(wire).or_insert(value);
            }
        }

        serde_json::from_value(Value::Object(map))
            .map_err(|e| Error::Validation(format!("invalid contact: {}", e)))
    }

    /// Rebuilds a contact from a `{"contact": {...}}` envelope.
    pub fn from_envelope(envelope: &Value) -> Result<Self> {
        Self::from_map(envelope_body(envelope, CONTACT_KEY)?)
    }

    /// Returns the flat mapping of all six fields.
    pub fn to_map(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }

    /// Returns the `{"contact": {...}}` request body.
    pub fn to_envelope(&self) -> Value {
        json!({ CONTACT_KEY: self.to_map() })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn field_values(&self) -> &BTreeMap<String, Value> {
        &self.field_values
    }

    pub fn orgid(&self) -> &str {
        &self.orgid
    }

    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.set_first_name(first_name);
        self
    }

    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.set_last_name(last_name);
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.set_phone(phone);
        self
    }

    pub fn with_field_values(mut self, field_values: BTreeMap<String, Value>) -> Self {
        self.set_field_values(field_values);
        self
    }

    /// Adds or replaces a single custom field value.
    pub fn with_field_value(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.field_values.insert(field.into(), value.into());
        self
    }

    pub fn with_orgid(mut self, orgid: impl Into<String>) -> Self {
        self.set_orgid(orgid);
        self
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) -> &mut Self {
        self.first_name = first_name.into();
        self
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) -> &mut Self {
        self.last_name = last_name.into();
        self
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) -> &mut Self {
        self.phone = phone.into();
        self
    }

    pub fn set_field_values(&mut self, field_values: BTreeMap<String, Value>) -> &mut Self {
        self.field_values = field_values;
        self
    }

    pub fn set_orgid(&mut self, orgid: impl Into<String>) -> &mut Self {
        self.orgid = orgid.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_contact_defaults() {
        let contact = Contact::new("a@example.com");
        assert_eq!(
            Value::Object(contact.to_map()),
            json!({
                "email": "a@example.com",
                "first_name": "",
                "last_name": "",
                "phone": "",
                "fieldValues": {},
                "orgid": ""
            })
        );
    }

    #[test]
    fn test_fluent_setters_mutate_same_value() {
        let mut contact = Contact::new("a@example.com");
        contact
            .set_first_name("Ada")
            .set_last_name("Lovelace")
            .set_phone("0100")
            .set_orgid("9");
        assert_eq!(contact.first_name(), "Ada");
        assert_eq!(contact.last_name(), "Lovelace");
        assert_eq!(contact.phone(), "0100");
        assert_eq!(contact.orgid(), "9");
        assert_eq!(contact.email(), "a@example.com");
    }

    #[test]
    fn test_round_trip_through_map() {
        let contact = Contact::new("a@example.com")
            .with_first_name("Ada")
            .with_phone("0100")
            .with_field_value("1", "Gold")
            .with_field_value("2", 3);
        let rebuilt = Contact::from_map(&contact.to_map()).unwrap();
        assert_eq!(rebuilt, contact);
    }

    #[test]
    fn test_envelope_shape_and_round_trip() {
        let contact = Contact::new("a@example.com").with_last_name("Byron");
        let envelope = contact.to_envelope();
        assert_eq!(envelope["contact"]["last_name"], json!("Byron"));
        assert_eq!(Contact::from_envelope(&envelope).unwrap(), contact);
    }

    #[test]
    fn test_from_api_response_shape() {
        let response = json!({
            "email": "a@example.com",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "phone": null,
            "orgid": 0,
            "fieldValues": [],
            "id": "42",
            "cdate": "2024-01-01T00:00:00-06:00"
        });
        let contact = Contact::from_map(response.as_object().unwrap()).unwrap();
        assert_eq!(contact.first_name(), "Ada");
        assert_eq!(contact.last_name(), "Lovelace");
        assert_eq!(contact.phone(), "");
        assert_eq!(contact.orgid(), "0");
        assert!(contact.field_values().is_empty());
    }

    #[test]
    fn test_wire_name_wins_over_response_name() {
        let map = json!({
            "email": "a@example.com",
            "first_name": "Ada",
            "firstName": "Augusta",
            "last_name": "King",
            "lastName": "King"
        });
        let contact = Contact::from_map(map.as_object().unwrap()).unwrap();
        assert_eq!(contact.first_name(), "Ada");
        assert_eq!(contact.last_name(), "King");
    }

    #[test]
    fn test_bare_field_ids_from_create_response() {
        let map = json!({
            "email": "a@example.com",
            "firstName": "Ada",
            "fieldValues": ["1", "2"],
            "id": "113"
        });
        let contact = Contact::from_map(map.as_object().unwrap()).unwrap();
        assert_eq!(contact.first_name(), "Ada");
        assert_eq!(
            contact.field_values().keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["1", "2"]
        );
    }

    #[test]
    fn test_missing_email_is_rejected() {
        let map = json!({"first_name": "Ada"});
        let result = Contact::from_map(map.as_object().unwrap());
        assert!(matches!(result, Err(Error::Validation(_))));
    }
}
