//
//  activecampaign
//  models/deal.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Deal model.
//!
//! A [`Deal`] always has a title, a value in minor currency units, a
//! currency and an owner, and belongs to a pipeline stage, a pipeline
//! (`group`), or both. Deals are built through [`DealBuilder`], which
//! rejects a deal with neither stage nor group.
//!
//! # Example
//!
//! ```rust
//! use activecampaign::models::Deal;
//!
//! let deal = Deal::builder("Enterprise plan", 450_000, "usd", "1")
//!     .stage("3")
//!     .contact("51")
//!     .build()?;
//!
//! assert_eq!(deal.to_envelope()["deal"]["value"], 450_000);
//! # Ok::<(), activecampaign::api::Error>(())
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::{empty_as_none, envelope_body, int_or_string, opt_int_or_string};
use crate::api::common::{Error, Result};

/// Envelope key wrapping a deal in request and response bodies.
pub const DEAL_KEY: &str = "deal";

/// A deal as sent to and received from the deals endpoints.
///
/// Unset optional fields serialize as `null`. Setters treat `""` and an
/// empty field map as unset, matching [`DealBuilder`].
///
/// # Fields
///
/// * `title`, `value`, `currency`, `owner` - Required
/// * `stage`, `group` - At least one is required
/// * `contact`, `account` - Related contact and account ids
/// * `fields` - Custom field values keyed by field id
/// * `description`, `percentage`, `status` - Optional details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    title: String,

    #[serde(deserialize_with = "int_or_string")]
    value: i64,

    currency: String,

    #[serde(deserialize_with = "super::lenient_string")]
    owner: String,

    #[serde(default, deserialize_with = "empty_as_none")]
    stage: Option<String>,

    #[serde(default, deserialize_with = "empty_as_none")]
    group: Option<String>,

    #[serde(default, deserialize_with = "empty_as_none")]
    contact: Option<String>,

    #[serde(default, deserialize_with = "empty_as_none")]
    account: Option<String>,

    #[serde(default, deserialize_with = "optional_fields")]
    fields: Option<BTreeMap<String, Value>>,

    #[serde(default, deserialize_with = "empty_as_none")]
    description: Option<String>,

    #[serde(default, deserialize_with = "opt_int_or_string")]
    percentage: Option<i64>,

    #[serde(default, deserialize_with = "empty_as_none")]
    status: Option<String>,
}

fn optional_fields<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<BTreeMap<String, Value>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(non_empty_fields(super::field_map(deserializer)?))
}

fn non_empty_fields(fields: BTreeMap<String, Value>) -> Option<BTreeMap<String, Value>> {
    if fields.is_empty() {
        None
    } else {
        Some(fields)
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Builder for [`Deal`].
///
/// Empty strings passed to the optional setters count as unset, so
/// `.stage("")` does not satisfy the stage-or-group rule.
#[derive(Debug, Clone)]
pub struct DealBuilder {
    deal: Deal,
}

impl DealBuilder {
    pub fn stage(mut self, stage: impl Into<String>) -> Self {
        self.deal.stage = non_empty(stage.into());
        self
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.deal.group = non_empty(group.into());
        self
    }

    pub fn contact(mut self, contact: impl Into<String>) -> Self {
        self.deal.contact = non_empty(contact.into());
        self
    }

    pub fn account(mut self, account: impl Into<String>) -> Self {
        self.deal.account = non_empty(account.into());
        self
    }

    pub fn fields(mut self, fields: BTreeMap<String, Value>) -> Self {
        self.deal.fields = non_empty_fields(fields);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.deal.description = non_empty(description.into());
        self
    }

    pub fn percentage(mut self, percentage: i64) -> Self {
        self.deal.percentage = Some(percentage);
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.deal.status = non_empty(status.into());
        self
    }

    /// Finishes the deal.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when neither stage nor group is set.
    pub fn build(self) -> Result<Deal> {
        self.deal.validate()?;
        Ok(self.deal)
    }
}

impl Deal {
    /// Starts a deal with its four required fields.
    pub fn builder(
        title: impl Into<String>,
        value: i64,
        currency: impl Into<String>,
        owner: impl Into<String>,
    ) -> DealBuilder {
        DealBuilder {
            deal: Deal {
                title: title.into(),
                value,
                currency: currency.into(),
                owner: owner.into(),
                stage: None,
                group: None,
                contact: None,
                account: None,
                fields: None,
                description: None,
                percentage: None,
                status: None,
            },
        }
    }

    fn validate(&self) -> Result<()> {
        if self.stage.is_none() && self.group.is_none() {
            return Err(Error::Validation(
                "Either the stage or group must be set".to_string(),
            ));
        }
        Ok(())
    }

    /// Rebuilds a deal from its flat mapping.
    ///
    /// Accepts the API's response shape, where `value` and `percentage`
    /// may be numeric strings and unrelated keys are present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if a required field is missing or
    /// neither stage nor group is present.
    pub fn from_map(map: &Map<String, Value>) -> Result<Self> {
        let deal: Deal = serde_json::from_value(Value::Object(map.clone()))
            .map_err(|e| Error::Validation(format!("invalid deal: {}", e)))?;
        deal.validate()?;
        Ok(deal)
    }

    /// Rebuilds a deal from a `{"deal": {...}}` envelope.
    pub fn from_envelope(envelope: &Value) -> Result<Self> {
        Self::from_map(envelope_body(envelope, DEAL_KEY)?)
    }

    /// Returns the flat mapping of all twelve fields.
    pub fn to_map(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }

    /// Returns the `{"deal": {...}}` request body.
    pub fn to_envelope(&self) -> Value {
        json!({ DEAL_KEY: self.to_map() })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn stage(&self) -> Option<&str> {
        self.stage.as_deref()
    }

    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    pub fn contact(&self) -> Option<&str> {
        self.contact.as_deref()
    }

    pub fn account(&self) -> Option<&str> {
        self.account.as_deref()
    }

    pub fn fields(&self) -> Option<&BTreeMap<String, Value>> {
        self.fields.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn percentage(&self) -> Option<i64> {
        self.percentage
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn with_stage(mut self, stage: impl Into<String>) -> Self {
        self.set_stage(stage);
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.set_group(group);
        self
    }

    pub fn with_contact(mut self, contact: impl Into<String>) -> Self {
        self.set_contact(contact);
        self
    }

    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.set_account(account);
        self
    }

    pub fn with_fields(mut self, fields: BTreeMap<String, Value>) -> Self {
        self.set_fields(fields);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.set_description(description);
        self
    }

    pub fn with_percentage(mut self, percentage: i64) -> Self {
        self.set_percentage(percentage);
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.set_status(status);
        self
    }

    pub fn set_stage(&mut self, stage: impl Into<String>) -> &mut Self {
        self.stage = non_empty(stage.into());
        self
    }

    pub fn set_group(&mut self, group: impl Into<String>) -> &mut Self {
        self.group = non_empty(group.into());
        self
    }

    pub fn set_contact(&mut self, contact: impl Into<String>) -> &mut Self {
        self.contact = non_empty(contact.into());
        self
    }

    pub fn set_account(&mut self, account: impl Into<String>) -> &mut Self {
        self.account = non_empty(account.into());
        self
    }

    pub fn set_fields(&mut self, fields: BTreeMap<String, Value>) -> &mut Self {
        self.fields = non_empty_fields(fields);
        self
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = non_empty(description.into());
        self
    }

    pub fn set_percentage(&mut self, percentage: i64) -> &mut Self {
        self.percentage = Some(percentage);
        self
    }

    pub fn set_status(&mut self, status: impl Into<String>) -> &mut Self {
        self.status = non_empty(status.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> DealBuilder {
        Deal::builder("Renewal", 12_500, "usd", "1")
    }

    #[test]
    fn test_stage_or_group_required() {
        assert!(matches!(base().build(), Err(Error::Validation(_))));
        assert!(matches!(
            base().stage("").group("").build(),
            Err(Error::Validation(_))
        ));
        assert!(base().stage("2").build().is_ok());
        assert!(base().group("1").build().is_ok());
        assert!(base().stage("2").group("1").build().is_ok());
    }

    #[test]
    fn test_unset_fields_serialize_as_null() {
        let deal = base().group("1").build().unwrap();
        assert_eq!(
            deal.to_envelope(),
            json!({
                "deal": {
                    "title": "Renewal",
                    "value": 12500,
                    "currency": "usd",
                    "owner": "1",
                    "stage": null,
                    "group": "1",
                    "contact": null,
                    "account": null,
                    "fields": null,
                    "description": null,
                    "percentage": null,
                    "status": null
                }
            })
        );
    }

    #[test]
    fn test_round_trip_through_map() {
        let mut fields = BTreeMap::new();
        fields.insert("4".to_string(), json!("Q3"));

        let deal = base()
            .stage("2")
            .contact("51")
            .account("8")
            .fields(fields)
            .description("Annual renewal")
            .percentage(60)
            .status("0")
            .build()
            .unwrap();

        assert_eq!(Deal::from_map(&deal.to_map()).unwrap(), deal);
        assert_eq!(Deal::from_envelope(&deal.to_envelope()).unwrap(), deal);
    }

    #[test]
    fn test_setters_after_build() {
        let mut deal = base().stage("2").build().unwrap().with_group("5");
        deal.set_percentage(10).set_status("1");
        assert_eq!(deal.group(), Some("5"));
        assert_eq!(deal.percentage(), Some(10));
        assert_eq!(deal.status(), Some("1"));
        assert_eq!(deal.value(), 12_500);
    }

    #[test]
    fn test_empty_setter_values_survive_round_trip() {
        let mut deal = base().stage("2").description("Annual").build().unwrap();
        deal.set_description("").set_fields(BTreeMap::new()).set_contact("");
        assert_eq!(deal.description(), None);
        assert_eq!(deal.fields(), None);
        assert_eq!(deal.contact(), None);
        assert_eq!(Deal::from_map(&deal.to_map()).unwrap(), deal);

        let cleared = base().stage("2").build().unwrap().with_group("7").with_stage("");
        assert_eq!(cleared.stage(), None);
        assert_eq!(Deal::from_map(&cleared.to_map()).unwrap(), cleared);
    }

    #[test]
    fn test_from_api_response_shape() {
        let response = json!({
            "id": "17",
            "title": "Renewal",
            "value": "12500",
            "currency": "usd",
            "owner": "1",
            "stage": "2",
            "group": "1",
            "percentage": "0",
            "status": "0",
            "description": ""
        });
        let deal = Deal::from_map(response.as_object().unwrap()).unwrap();
        assert_eq!(deal.value(), 12_500);
        assert_eq!(deal.percentage(), Some(0));
        assert_eq!(deal.description(), None);
    }

    #[test]
    fn test_from_map_enforces_rules() {
        let missing_title = json!({"value": 1, "currency": "usd", "owner": "1", "stage": "1"});
        assert!(matches!(
            Deal::from_map(missing_title.as_object().unwrap()),
            Err(Error::Validation(_))
        ));

        let no_stage = json!({"title": "x", "value": 1, "currency": "usd", "owner": "1"});
        assert!(matches!(
            Deal::from_map(no_stage.as_object().unwrap()),
            Err(Error::Validation(_))
        ));
    }
}
