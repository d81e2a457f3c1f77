//
//  activecampaign
//  api/ecommerce.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! E-commerce customer and order endpoints.
//!
//! | Method | Request | Returns |
//! |--------|---------|---------|
//! | [`list_customers`](ActiveCampaignClient::list_customers) | `GET /ecomCustomers` | `ecomCustomers` |
//! | [`create_customer`](ActiveCampaignClient::create_customer) | `POST /ecomCustomers` | `ecomCustomer` |
//! | [`list_orders`](ActiveCampaignClient::list_orders) | `GET /ecomOrders` | `ecomOrders` |
//! | [`create_order`](ActiveCampaignClient::create_order) | `POST /ecomOrders` | whole response |

use serde::Serialize;
use serde_json::Value;

use super::client::{unwrap_key, ActiveCampaignClient};
use super::common::{QueryParams, Result};

impl ActiveCampaignClient {
    pub async fn list_customers(&self, params: &QueryParams) -> Result<Value> {
        let response = self.get("/ecomCustomers", params).await?;
        Ok(unwrap_key(response, "ecomCustomers"))
    }

    /// Creates an e-commerce customer, e.g.
    /// `{"ecomCustomer": {"connectionid": "1", "externalid": "56789", "email": "jane@example.com"}}`.
    pub async fn create_customer<B>(&self, data: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let response = self.post("/ecomCustomers", data).await?;
        Ok(unwrap_key(response, "ecomCustomer"))
    }

    pub async fn list_orders(&self, params: &QueryParams) -> Result<Value> {
        let response = self.get("/ecomOrders", params).await?;
        Ok(unwrap_key(response, "ecomOrders"))
    }

    /// Creates an e-commerce order.
    ///
    /// Unlike the other create methods this returns the whole decoded
    /// response, so callers also see the `connections`, `ecomOrderProducts`
    /// and `ecomCustomers` siblings of `ecomOrder`.
    pub async fn create_order<B>(&self, data: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.post("/ecomOrders", data).await
    }
}
