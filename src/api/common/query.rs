//
//  activecampaign
//  api/common/query.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Query parameters for list endpoints.
//!
//! The ActiveCampaign list endpoints accept filters such as `email`,
//! `search`, `limit` and `offset` as plain query-string pairs. The client
//! never interprets them; it only forwards them alongside the API key.
//!
//! # Example
//!
//! ```rust
//! use activecampaign::api::common::QueryParams;
//!
//! let params = QueryParams::new()
//!     .param("email", "jane@example.com")
//!     .limit(20);
//!
//! assert_eq!(params.get("limit"), Some("20"));
//! ```

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Name of the query parameter that carries the API key.
pub const API_KEY_PARAM: &str = "api_key";

/// Ordered key/value pairs sent as the query string of a request.
///
/// Values are stored already rendered to strings. Pairs keep insertion
/// order; setting an existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, replacing any earlier value for `key`.
    pub fn param(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.insert(key, value);
        self
    }

    /// In-place form of [`QueryParams::param`].
    pub fn insert(&mut self, key: impl Into<String>, value: impl Display) -> &mut Self {
        let key = key.into();
        let value = value.to_string();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key, value)),
        }
        self
    }

    /// Sets the `limit` filter.
    pub fn limit(self, limit: u32) -> Self {
        self.param("limit", limit)
    }

    /// Sets the `offset` filter.
    pub fn offset(self, offset: u32) -> Self {
        self.param("offset", offset)
    }

    /// Sets the `search` filter.
    pub fn search(self, term: impl Display) -> Self {
        self.param("search", term)
    }

    /// Returns the value stored for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the pairs to send, with `api_key` merged in last.
    ///
    /// A caller-supplied `api_key` pair is dropped so the configured key is
    /// the only one on the wire.
    pub fn with_api_key(&self, api_key: &str) -> Vec<(String, String)> {
        self.pairs
            .iter()
            .filter(|(k, _)| k != API_KEY_PARAM)
            .cloned()
            .chain(std::iter::once((API_KEY_PARAM.to_string(), api_key.to_string())))
            .collect()
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_replaces_existing_key() {
        let params = QueryParams::new()
            .param("limit", 10)
            .param("search", "acme")
            .param("limit", 50);
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("limit"), Some("50"));
        let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["limit", "search"]);
    }

    #[test]
    fn test_with_api_key_overrides_caller_key() {
        let params = QueryParams::new()
            .param("api_key", "spoofed")
            .param("email", "a@b.co");
        let pairs = params.with_api_key("secret");
        assert_eq!(
            pairs,
            vec![
                ("email".to_string(), "a@b.co".to_string()),
                ("api_key".to_string(), "secret".to_string()),
            ]
        );
    }

    #[test]
    fn test_from_iterator() {
        let params: QueryParams = vec![("offset", 5), ("limit", 20)].into_iter().collect();
        assert_eq!(params.get("offset"), Some("5"));
        assert!(!params.is_empty());
    }
}
