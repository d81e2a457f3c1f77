//
//  activecampaign
//  config/accounts.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Account Configuration
//!
//! Per-account settings and the helpers that keep stored values in a
//! canonical form.
//!
//! Each ActiveCampaign account has its own API host, shown in the account
//! settings under *Developer*:
//!
//! ```text
//! https://<account>.api-us1.com
//! ```
//!
//! Users often paste the full API root (`.../api/3`) or leave off the scheme,
//! so [`normalize_api_url`] is applied before a URL is stored.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::api::client::API_PATH;

/// Account key holding the API host URL.
pub const API_URL_KEY: &str = "api_url";

/// Account key holding the API token.
pub const API_KEY_KEY: &str = "api_key";

/// Account key holding the default e-commerce connection id.
pub const CONNECTION_ID_KEY: &str = "connection_id";

/// Every key accepted by `ac config get|set|unset`.
pub const ACCOUNT_KEYS: [&str; 3] = [API_URL_KEY, API_KEY_KEY, CONNECTION_ID_KEY];

/// Name used for the first account when none is given.
pub const DEFAULT_ACCOUNT_NAME: &str = "default";

/// Settings for a single ActiveCampaign account.
///
/// Empty `api_url`/`api_key` strings mean "not configured".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AccountConfig {
    /// API host, e.g. `https://acme.api-us1.com`
    #[serde(default)]
    pub api_url: String,

    /// API token sent as the `api_key` query parameter
    #[serde(default)]
    pub api_key: String,

    /// Default connection for e-commerce calls
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_id: Option<String>,
}

impl AccountConfig {
    /// Creates an account with a normalized URL and no default connection.
    pub fn new(api_url: &str, api_key: impl Into<String>) -> Self {
        Self {
            api_url: normalize_api_url(api_url),
            api_key: api_key.into(),
            connection_id: None,
        }
    }

    /// Whether both the URL and the key are present.
    pub fn is_complete(&self) -> bool {
        !self.api_url.is_empty() && !self.api_key.is_empty()
    }

    /// Reads a key. Unset values come back as `None`.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let value = match key {
            API_URL_KEY => Some(self.api_url.clone()),
            API_KEY_KEY => Some(self.api_key.clone()),
            CONNECTION_ID_KEY => self.connection_id.clone(),
            _ => bail!(unknown_key(key)),
        };
        Ok(value.filter(|v| !v.is_empty()))
    }

    /// Writes a key. URLs are normalized before they are stored.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            API_URL_KEY => self.api_url = normalize_api_url(value),
            API_KEY_KEY => self.api_key = value.trim().to_string(),
            CONNECTION_ID_KEY => {
                let value = value.trim();
                self.connection_id = (!value.is_empty()).then(|| value.to_string());
            }
            _ => bail!(unknown_key(key)),
        }
        Ok(())
    }

    /// Clears a key.
    pub fn unset(&mut self, key: &str) -> Result<()> {
        match key {
            API_URL_KEY => self.api_url.clear(),
            API_KEY_KEY => self.api_key.clear(),
            CONNECTION_ID_KEY => self.connection_id = None,
            _ => bail!(unknown_key(key)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> String {
    format!(
        "Unknown config key '{}'. Valid keys: {}",
        key,
        ACCOUNT_KEYS.join(", ")
    )
}

/// Returns whether `key` is one of [`ACCOUNT_KEYS`].
pub fn is_account_key(key: &str) -> bool {
    ACCOUNT_KEYS.contains(&key)
}

/// Normalize an account API URL.
///
/// Adds `https://` when no scheme is given, then strips trailing slashes and
/// a trailing `/api/3` so the stored value is the bare host URL.
///
/// # Examples
///
/// ```rust
/// use activecampaign::config::normalize_api_url;
///
/// assert_eq!(normalize_api_url("acme.api-us1.com"), "https://acme.api-us1.com");
/// assert_eq!(normalize_api_url("https://acme.api-us1.com/api/3/"), "https://acme.api-us1.com");
/// assert_eq!(normalize_api_url("http://localhost:8080/"), "http://localhost:8080");
/// ```
pub fn normalize_api_url(url: &str) -> String {
    let url = url.trim();
    if url.is_empty() {
        return String::new();
    }

    let url = if url.starts_with("https://") || url.starts_with("http://") {
        url.to_string()
    } else {
        format!("https://{}", url)
    };

    let url = url.trim_end_matches('/');
    let url = url.strip_suffix(API_PATH).unwrap_or(url);
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_api_url() {
        assert_eq!(normalize_api_url("acme.api-us1.com"), "https://acme.api-us1.com");
        assert_eq!(normalize_api_url(" https://acme.api-us1.com// "), "https://acme.api-us1.com");
        assert_eq!(normalize_api_url("https://acme.api-us1.com/api/3"), "https://acme.api-us1.com");
        assert_eq!(normalize_api_url("http://127.0.0.1:1234/api/3/"), "http://127.0.0.1:1234");
        assert_eq!(normalize_api_url(""), "");
    }

    #[test]
    fn test_set_get_unset() {
        let mut account = AccountConfig::default();
        assert!(!account.is_complete());

        account.set("api_url", "acme.api-us1.com/").unwrap();
        account.set("api_key", " secret ").unwrap();
        account.set("connection_id", "4").unwrap();

        assert!(account.is_complete());
        assert_eq!(account.get("api_url").unwrap().as_deref(), Some("https://acme.api-us1.com"));
        assert_eq!(account.get("api_key").unwrap().as_deref(), Some("secret"));
        assert_eq!(account.get("connection_id").unwrap().as_deref(), Some("4"));

        account.unset("connection_id").unwrap();
        account.unset("api_key").unwrap();
        assert_eq!(account.get("connection_id").unwrap(), None);
        assert_eq!(account.get("api_key").unwrap(), None);
        assert!(!account.is_complete());
    }

    #[test]
    fn test_unknown_key() {
        let mut account = AccountConfig::default();
        let err = account.set("editor", "vim").unwrap_err();
        assert!(err.to_string().contains("Unknown config key 'editor'"));
        assert!(account.get("editor").is_err());
        assert!(account.unset("editor").is_err());
        assert!(!is_account_key("editor"));
        assert!(is_account_key("api_key"));
    }

    #[test]
    fn test_empty_connection_id_clears() {
        let mut account = AccountConfig::default();
        account.set("connection_id", "2").unwrap();
        account.set("connection_id", "  ").unwrap();
        assert_eq!(account.connection_id, None);
    }
}
