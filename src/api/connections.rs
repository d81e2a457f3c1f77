//
//  activecampaign
//  api/connections.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! E-commerce connection endpoints.
//!
//! A connection links the account to an external store. Customers and
//! orders are always created against one, so the client can hold a
//! default connection id (see
//! [`with_connection_id`](ActiveCampaignClient::with_connection_id)).

use serde::Serialize;
use serde_json::Value;

use super::client::{unwrap_key, ActiveCampaignClient};
use super::common::{Error, QueryParams, Result};

impl ActiveCampaignClient {
    pub async fn list_connections(&self, params: &QueryParams) -> Result<Value> {
        let response = self.get("/connections", params).await?;
        Ok(unwrap_key(response, "connections"))
    }

    pub async fn get_connection(&self, id: &str) -> Result<Value> {
        let response = self
            .get(&format!("/connections/{}", id), &QueryParams::new())
            .await?;
        Ok(unwrap_key(response, "connection"))
    }

    pub async fn create_connection<B>(&self, data: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let response = self.post("/connections", data).await?;
        Ok(unwrap_key(response, "connection"))
    }

    pub async fn update_connection<B>(&self, id: &str, data: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let response = self.put(&format!("/connections/{}", id), data).await?;
        Ok(unwrap_key(response, "connection"))
    }

    /// Lists the customers of a connection.
    ///
    /// `connection_id` falls back to the client's default connection id.
    /// The whole decoded response is returned, including any `meta` block.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] without sending a request when no id is
    /// given and the client has no default.
    pub async fn get_connection_customers(
        &self,
        connection_id: Option<&str>,
        params: &QueryParams,
    ) -> Result<Value> {
        let id = connection_id
            .or_else(|| self.connection_id())
            .ok_or_else(|| {
                Error::Validation(
                    "no connection id given and no default connection id configured".to_string(),
                )
            })?;

        self.get(&format!("/connections/{}/customers", id), params)
            .await
    }
}
