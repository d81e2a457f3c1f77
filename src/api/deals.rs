//
//  activecampaign
//  api/deals.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Deal endpoints.
//!
//! | Method | Request | Unwraps |
//! |--------|---------|---------|
//! | [`list_deals`](ActiveCampaignClient::list_deals) | `GET /deals` | `deals` |
//! | [`get_deal`](ActiveCampaignClient::get_deal) | `GET /deals/{id}` | `deal` |
//! | [`get_deal_custom_field_data`](ActiveCampaignClient::get_deal_custom_field_data) | `GET /deals/{id}/dealCustomFieldData` | `dealCustomFieldData` |
//! | [`list_deal_custom_fields`](ActiveCampaignClient::list_deal_custom_fields) | `GET /dealCustomFieldMeta` | `dealCustomFieldMeta` |
//! | [`create_deal`](ActiveCampaignClient::create_deal) | `POST /deals` | `deal` |
//!
//! # Example
//!
//! ```rust,no_run
//! use activecampaign::api::ActiveCampaignClient;
//! use activecampaign::models::Deal;
//!
//! # async fn example() -> activecampaign::api::Result<()> {
//! let client = ActiveCampaignClient::new("https://acme.api-us1.com", "key")?;
//! let deal = Deal::builder("Pilot", 99_00, "usd", "1").group("1").build()?;
//!
//! let created = client.create_deal(&deal.to_envelope()).await?;
//! println!("Deal id: {}", created["id"]);
//! # Ok(())
//! # }
//! ```

use serde::Serialize;
use serde_json::Value;

use super::client::{unwrap_key, ActiveCampaignClient};
use super::common::{QueryParams, Result};

impl ActiveCampaignClient {
    pub async fn list_deals(&self, params: &QueryParams) -> Result<Value> {
        let response = self.get("/deals", params).await?;
        Ok(unwrap_key(response, "deals"))
    }

    pub async fn get_deal(&self, id: &str) -> Result<Value> {
        let response = self
            .get(&format!("/deals/{}", id), &QueryParams::new())
            .await?;
        Ok(unwrap_key(response, "deal"))
    }

    /// Fetches the custom field values stored on one deal.
    pub async fn get_deal_custom_field_data(&self, id: &str) -> Result<Value> {
        let response = self
            .get(&format!("/deals/{}/dealCustomFieldData", id), &QueryParams::new())
            .await?;
        Ok(unwrap_key(response, "dealCustomFieldData"))
    }

    /// Lists the custom field definitions for deals.
    pub async fn list_deal_custom_fields(&self, params: &QueryParams) -> Result<Value> {
        let response = self.get("/dealCustomFieldMeta", params).await?;
        Ok(unwrap_key(response, "dealCustomFieldMeta"))
    }

    /// Creates a deal. `data` is sent as-is, typically a
    /// [`Deal::to_envelope`](crate::models::Deal::to_envelope) value.
    pub async fn create_deal<B>(&self, data: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let response = self.post("/deals", data).await?;
        Ok(unwrap_key(response, "deal"))
    }
}
