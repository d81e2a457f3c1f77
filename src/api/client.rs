//
//  activecampaign
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client Wrapper for the ActiveCampaign API
//!
//! This module provides the core HTTP client for the ActiveCampaign v3 REST
//! API. It owns the account configuration and the single request executor
//! that every endpoint method goes through.
//!
//! ## Features
//!
//! - API key injection as a query parameter on every request
//! - JSON serialization of request bodies for POST and PUT
//! - Detection of failures from the status code and the body `status` field
//! - Custom User-Agent header
//!
//! The endpoint methods themselves live in the resource modules
//! ([`contacts`](super::contacts), [`deals`](super::deals), ...) as further
//! `impl ActiveCampaignClient` blocks.

use std::fmt;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use super::common::{Error, QueryParams, Result, UNKNOWN_ERROR_MESSAGE};
use crate::config::AccountConfig;

/// Version prefix every endpoint path is rooted under.
pub const API_PATH: &str = "/api/3";

/// Extracts the error message from a decoded response body.
///
/// ActiveCampaign reports failures as:
/// ```json
/// {"status": "error", "error": "Human readable message"}
/// ```
///
/// A string `error` is returned as-is. Any other non-null `error` value is
/// rendered as compact JSON. When the field is absent the message is
/// [`UNKNOWN_ERROR_MESSAGE`].
pub fn error_message(body: &Value) -> String {
    match body.get("error") {
        Some(Value::String(message)) => message.clone(),
        Some(Value::Null) | None => UNKNOWN_ERROR_MESSAGE.to_string(),
        Some(other) => other.to_string(),
    }
}

/// Builds an [`Error::Api`] from a failed response.
///
/// # Parameters
///
/// * `status` - The HTTP status code
/// * `body` - The raw response body, which may be empty or not JSON at all
///
/// # Returns
///
/// Returns an [`Error::Api`] carrying the status code and the message found
/// by [`error_message`], or the default message when the body does not
/// decode.
pub fn format_api_error(status: StatusCode, body: &str) -> Error {
    let message = serde_json::from_str::<Value>(body)
        .map(|json| error_message(&json))
        .unwrap_or_else(|_| UNKNOWN_ERROR_MESSAGE.to_string());

    Error::Api {
        status: status.as_u16(),
        message,
    }
}

/// Takes the value stored under `key` out of a decoded response.
///
/// Returns [`Value::Null`] when the response has no such key, matching how
/// the API omits empty resources.
pub(crate) fn unwrap_key(mut response: Value, key: &str) -> Value {
    match response.get_mut(key) {
        Some(value) => value.take(),
        None => {
            tracing::debug!(key, "response has no field to unwrap");
            Value::Null
        }
    }
}

/// Normalizes an account base URL.
///
/// Trailing slashes and a trailing [`API_PATH`] are removed so that
/// `https://acme.api-us1.com/api/3/` and `https://acme.api-us1.com` name the
/// same account.
///
/// # Example
///
/// ```rust
/// use activecampaign::api::client::trim_base_url;
///
/// assert_eq!(trim_base_url("https://acme.api-us1.com/api/3/"), "https://acme.api-us1.com");
/// assert_eq!(trim_base_url("https://acme.api-us1.com"), "https://acme.api-us1.com");
/// ```
pub fn trim_base_url(base_url: &str) -> &str {
    let trimmed = base_url.trim().trim_end_matches('/');
    trimmed
        .strip_suffix(API_PATH)
        .unwrap_or(trimmed)
        .trim_end_matches('/')
}

/// The main HTTP client for the ActiveCampaign API.
///
/// The client holds three pieces of configuration, all fixed once built:
/// the account base URL, the API key, and an optional default connection
/// id used by [`get_connection_customers`](Self::get_connection_customers).
/// It keeps no other state and can be reused for any number of sequential
/// calls.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use activecampaign::api::ActiveCampaignClient;
///
/// let client = ActiveCampaignClient::new("https://acme.api-us1.com", "your-api-key")?
///     .with_connection_id("3");
/// # Ok::<(), activecampaign::api::Error>(())
/// ```
///
/// # Requests
///
/// Each request is sent to `base_url + /api/3 + endpoint`, with the API key
/// appended to the query string and a `Content-Type: application/json`
/// header. A request fails when the status is outside `200..300` or when
/// the decoded body has `"status": "error"`.
#[derive(Clone)]
pub struct ActiveCampaignClient {
    /// The underlying HTTP client
    http: Client,
    /// The account base URL, without trailing slash or API prefix
    base_url: String,
    /// The API key sent as the `api_key` query parameter
    api_key: String,
    /// Connection used when a connection-scoped call names none
    connection_id: Option<String>,
}

impl fmt::Debug for ActiveCampaignClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActiveCampaignClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("connection_id", &self.connection_id)
            .finish()
    }
}

impl ActiveCampaignClient {
    /// Creates a new client for an account.
    ///
    /// # Parameters
    ///
    /// * `base_url` - The account API URL (e.g., `https://acme.api-us1.com`).
    ///   A trailing `/api/3` is accepted and removed.
    /// * `api_key` - The account API key
    ///
    /// # Returns
    ///
    /// Returns `Ok(ActiveCampaignClient)` on success.
    ///
    /// # Errors
    ///
    /// - [`Error::Validation`] if the base URL is not an absolute http(s)
    ///   URL or the API key is empty
    /// - [`Error::Transport`] if the HTTP client could not be created
    ///
    /// # Example
    ///
    /// ```rust
    /// use activecampaign::api::ActiveCampaignClient;
    ///
    /// let client = ActiveCampaignClient::new("https://acme.api-us1.com/", "key")?;
    /// assert_eq!(client.base_url(), "https://acme.api-us1.com");
    /// assert!(client.connection_id().is_none());
    /// # Ok::<(), activecampaign::api::Error>(())
    /// ```
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let base_url = trim_base_url(base_url).to_string();

        let parsed = Url::parse(&base_url)
            .map_err(|e| Error::Validation(format!("invalid base URL '{}': {}", base_url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::Validation(format!(
                "base URL '{}' must use http or https",
                base_url
            )));
        }

        if api_key.trim().is_empty() {
            return Err(Error::Validation("API key must not be empty".to_string()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .user_agent(format!("{}/{}", crate::APP_NAME, crate::VERSION))
            .build()?;

        Ok(Self {
            http,
            base_url,
            api_key: api_key.trim().to_string(),
            connection_id: None,
        })
    }

    /// Creates a client from a stored account configuration.
    ///
    /// The account's `connection_id`, when present, becomes the default
    /// connection id.
    ///
    /// # Example
    ///
    /// ```rust
    /// use activecampaign::api::ActiveCampaignClient;
    /// use activecampaign::config::AccountConfig;
    ///
    /// let account = AccountConfig {
    ///     api_url: "https://acme.api-us1.com".to_string(),
    ///     api_key: "key".to_string(),
    ///     connection_id: Some("2".to_string()),
    /// };
    ///
    /// let client = ActiveCampaignClient::from_config(&account)?;
    /// assert_eq!(client.connection_id(), Some("2"));
    /// # Ok::<(), activecampaign::api::Error>(())
    /// ```
    pub fn from_config(config: &AccountConfig) -> Result<Self> {
        let client = Self::new(&config.api_url, &config.api_key)?;
        Ok(match &config.connection_id {
            Some(id) => client.with_connection_id(id.clone()),
            None => client,
        })
    }

    /// Sets the default connection id.
    ///
    /// This method uses the builder pattern and returns `self` for chaining.
    pub fn with_connection_id(mut self, connection_id: impl Into<String>) -> Self {
        self.connection_id = Some(connection_id.into());
        self
    }

    /// Replaces the default connection id on an existing client.
    pub fn set_connection_id(&mut self, connection_id: Option<String>) {
        self.connection_id = connection_id;
    }

    /// Returns the default connection id, if one is configured.
    pub fn connection_id(&self) -> Option<&str> {
        self.connection_id.as_deref()
    }

    /// Returns the account base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the full URL for an endpoint, without the query string.
    ///
    /// ```rust
    /// use activecampaign::api::ActiveCampaignClient;
    ///
    /// let client = ActiveCampaignClient::new("https://acme.api-us1.com", "key")?;
    /// assert_eq!(
    ///     client.endpoint_url("/contacts/7"),
    ///     "https://acme.api-us1.com/api/3/contacts/7"
    /// );
    /// # Ok::<(), activecampaign::api::Error>(())
    /// ```
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}{}", self.base_url, API_PATH, endpoint)
    }

    /// Sends a request and returns the decoded JSON body.
    ///
    /// This is the single request executor behind every endpoint method.
    /// The query string is `params` followed by the API key. The body is
    /// serialized as JSON and only sent for POST and PUT.
    ///
    /// # Parameters
    ///
    /// * `method` - The HTTP method (GET, POST or PUT)
    /// * `endpoint` - Path relative to the API root (e.g., `/contacts`)
    /// * `params` - Query parameters to send with the request
    /// * `body` - The request body for POST and PUT
    ///
    /// # Returns
    ///
    /// Returns the decoded response. An empty success body decodes to
    /// [`Value::Null`].
    ///
    /// # Errors
    ///
    /// - [`Error::Transport`] if the request could not be completed or the
    ///   success body is not valid JSON
    /// - [`Error::Api`] if the status is outside `200..300` or the body has
    ///   `"status": "error"`
    pub async fn request<B>(
        &self,
        method: Method,
        endpoint: &str,
        params: &QueryParams,
        body: Option<&B>,
    ) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint_url(endpoint);
        tracing::debug!(%method, endpoint, params = params.len(), "sending request");

        let mut request = self
            .http
            .request(method.clone(), &url)
            .query(&params.with_api_key(&self.api_key));

        if method == Method::POST || method == Method::PUT {
            if let Some(body) = body {
                request = request.json(body);
            }
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!(%method, endpoint, status = status.as_u16(), "received response");

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let err = format_api_error(status, &text);
            tracing::warn!(%method, endpoint, "{}", err);
            return Err(err);
        }

        if response.content_length() == Some(0) {
            return Ok(Value::Null);
        }

        let decoded: Value = response.json().await?;

        if decoded.get("status").and_then(Value::as_str) == Some("error") {
            let err = Error::Api {
                status: status.as_u16(),
                message: error_message(&decoded),
            };
            tracing::warn!(%method, endpoint, "{}", err);
            return Err(err);
        }

        Ok(decoded)
    }

    /// Makes a GET request with query parameters.
    pub async fn get(&self, endpoint: &str, params: &QueryParams) -> Result<Value> {
        self.request::<Value>(Method::GET, endpoint, params, None)
            .await
    }

    /// Makes a POST request with a JSON body.
    pub async fn post<B>(&self, endpoint: &str, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, endpoint, &QueryParams::new(), Some(body))
            .await
    }

    /// Makes a PUT request with a JSON body.
    pub async fn put<B>(&self, endpoint: &str, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.request(Method::PUT, endpoint, &QueryParams::new(), Some(body))
            .await
    }
}
