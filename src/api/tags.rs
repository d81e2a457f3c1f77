//
//  activecampaign
//  api/tags.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Tag and contact-tag endpoints.

use serde_json::{json, Value};

use super::client::{unwrap_key, ActiveCampaignClient};
use super::common::{QueryParams, Result};

impl ActiveCampaignClient {
    /// Lists tags (`GET /tags`, unwraps `tags`).
    pub async fn list_tags(&self, params: &QueryParams) -> Result<Value> {
        let response = self.get("/tags", params).await?;
        Ok(unwrap_key(response, "tags"))
    }

    /// Applies a tag to a contact.
    ///
    /// Sends `{"contactTag": {"contact": <contact_id>, "tag": <tag_id>}}` to
    /// `POST /contactTags/` and unwraps `contactTag`.
    pub async fn add_tag_to_contact(&self, contact_id: u64, tag_id: u64) -> Result<Value> {
        let body = json!({
            "contactTag": {
                "contact": contact_id,
                "tag": tag_id,
            }
        });
        let response = self.post("/contactTags/", &body).await?;
        Ok(unwrap_key(response, "contactTag"))
    }
}
