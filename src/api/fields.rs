//
//  activecampaign
//  api/fields.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Contact custom field endpoints.

use serde_json::Value;

use super::client::{unwrap_key, ActiveCampaignClient};
use super::common::{QueryParams, Result};

impl ActiveCampaignClient {
    /// Lists contact custom field definitions (`GET /fields`, unwraps
    /// `fields`). The ids returned here are the keys of
    /// [`Contact::field_values`](crate::models::Contact::field_values).
    pub async fn list_custom_fields(&self, params: &QueryParams) -> Result<Value> {
        let response = self.get("/fields", params).await?;
        Ok(unwrap_key(response, "fields"))
    }
}
