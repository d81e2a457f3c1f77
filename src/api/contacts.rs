//
//  activecampaign
//  api/contacts.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Contact endpoints.
//!
//! | Method | Request | Unwraps |
//! |--------|---------|---------|
//! | [`list_contacts`](ActiveCampaignClient::list_contacts) | `GET /contacts` | `contacts` |
//! | [`get_contact`](ActiveCampaignClient::get_contact) | `GET /contacts/{id}` | `contact` |
//! | [`create_contact`](ActiveCampaignClient::create_contact) | `POST /contacts` | `contact` as [`Contact`] |
//! | [`update_contact`](ActiveCampaignClient::update_contact) | `PUT /contacts/{id}` | `contact` |
//!
//! # Example
//!
//! ```rust,no_run
//! use activecampaign::api::{ActiveCampaignClient, QueryParams};
//! use activecampaign::models::Contact;
//!
//! # async fn example() -> activecampaign::api::Result<()> {
//! let client = ActiveCampaignClient::new("https://acme.api-us1.com", "key")?;
//!
//! let created = client
//!     .create_contact(&Contact::new("jane@example.com").with_first_name("Jane"))
//!     .await?;
//! println!("Created {}", created.email());
//!
//! let matches = client
//!     .list_contacts(&QueryParams::new().param("email", "jane@example.com"))
//!     .await?;
//! # Ok(())
//! # }
//! ```

use serde::Serialize;
use serde_json::Value;

use super::client::{unwrap_key, ActiveCampaignClient};
use super::common::{Error, QueryParams, Result};
use crate::models::Contact;

impl ActiveCampaignClient {
    /// Lists contacts, filtered by `params` (e.g. `email`, `search`,
    /// `limit`, `offset`).
    pub async fn list_contacts(&self, params: &QueryParams) -> Result<Value> {
        let response = self.get("/contacts", params).await?;
        Ok(unwrap_key(response, "contacts"))
    }

    /// Fetches one contact by id.
    pub async fn get_contact(&self, id: &str) -> Result<Value> {
        let response = self
            .get(&format!("/contacts/{}", id), &QueryParams::new())
            .await?;
        Ok(unwrap_key(response, "contact"))
    }

    /// Creates a contact and returns it as the API stored it.
    ///
    /// The request body is the contact's envelope. The `contact` field of
    /// the response is rebuilt into a [`Contact`].
    ///
    /// # Errors
    ///
    /// In addition to request failures, returns [`Error::Validation`] when
    /// the response carries no usable `contact` object.
    pub async fn create_contact(&self, contact: &Contact) -> Result<Contact> {
        let response = self.post("/contacts", &contact.to_envelope()).await?;
        match unwrap_key(response, "contact") {
            Value::Object(map) => Contact::from_map(&map),
            _ => Err(Error::Validation(
                "create contact response has no contact object".to_string(),
            )),
        }
    }

    /// Updates a contact. `data` is sent as-is, typically a
    /// [`Contact::to_envelope`] value.
    pub async fn update_contact<B>(&self, id: &str, data: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let response = self.put(&format!("/contacts/{}", id), data).await?;
        Ok(unwrap_key(response, "contact"))
    }
}
