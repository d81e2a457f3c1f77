//
//  activecampaign
//  api/accounts.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Account endpoints.
//!
//! Accounts are the organizations contacts belong to. Bodies are passed
//! through untouched, e.g. `{"account": {"name": "Acme"}}`.
//!
//! | Method | Request | Unwraps |
//! |--------|---------|---------|
//! | [`list_accounts`](ActiveCampaignClient::list_accounts) | `GET /accounts` | `accounts` |
//! | [`get_account`](ActiveCampaignClient::get_account) | `GET /accounts/{id}` | `account` |
//! | [`create_account`](ActiveCampaignClient::create_account) | `POST /accounts` | `account` |
//! | [`update_account`](ActiveCampaignClient::update_account) | `PUT /accounts/{id}` | `account` |
//! | [`create_account_contact`](ActiveCampaignClient::create_account_contact) | `POST /accountContacts` | `accountContact` |
//! | [`list_account_custom_fields`](ActiveCampaignClient::list_account_custom_fields) | `GET /accountCustomFieldMeta` | `accountCustomFieldMeta` |

use serde::Serialize;
use serde_json::Value;

use super::client::{unwrap_key, ActiveCampaignClient};
use super::common::{QueryParams, Result};

impl ActiveCampaignClient {
    pub async fn list_accounts(&self, params: &QueryParams) -> Result<Value> {
        let response = self.get("/accounts", params).await?;
        Ok(unwrap_key(response, "accounts"))
    }

    pub async fn get_account(&self, id: &str) -> Result<Value> {
        let response = self
            .get(&format!("/accounts/{}", id), &QueryParams::new())
            .await?;
        Ok(unwrap_key(response, "account"))
    }

    pub async fn create_account<B>(&self, data: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let response = self.post("/accounts", data).await?;
        Ok(unwrap_key(response, "account"))
    }

    pub async fn update_account<B>(&self, id: &str, data: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let response = self.put(&format!("/accounts/{}", id), data).await?;
        Ok(unwrap_key(response, "account"))
    }

    /// Associates a contact with an account.
    ///
    /// `data` is the association body, e.g.
    /// `{"accountContact": {"contact": 1, "account": 2, "jobTitle": "CTO"}}`.
    pub async fn create_account_contact<B>(&self, data: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let response = self.post("/accountContacts", data).await?;
        Ok(unwrap_key(response, "accountContact"))
    }

    /// Lists the custom field definitions for accounts.
    pub async fn list_account_custom_fields(&self, params: &QueryParams) -> Result<Value> {
        let response = self.get("/accountCustomFieldMeta", params).await?;
        Ok(unwrap_key(response, "accountCustomFieldMeta"))
    }
}
