//
//  activecampaign
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for the ActiveCampaign client
//!
//! This module provides the types shared by every endpoint method: the
//! unified [`Error`] type, the [`Result`] alias, and [`QueryParams`] for
//! list filters.
//!
//! # Example
//!
//! ```rust
//! use activecampaign::api::common::Error;
//!
//! fn handle_result<T>(result: Result<T, Error>) {
//!     match result {
//!         Ok(_) => println!("Success!"),
//!         Err(Error::Api { status: 404, message }) => println!("Not found: {}", message),
//!         Err(Error::Validation(reason)) => println!("Invalid input: {}", reason),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```

use thiserror::Error;

mod query;

pub use query::*;

/// Message used when a failing response carries no `error` field.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error occurred";

/// Unified error type for all ActiveCampaign operations.
///
/// Every call either fully succeeds or fails with exactly one of these
/// kinds. Nothing is retried or recovered internally.
///
/// # Variants
///
/// | Variant | Raised when |
/// |---------|-------------|
/// | `Transport` | The HTTP exchange could not be completed or decoded |
/// | `Api` | Status outside 2xx, or a body with `"status": "error"` |
/// | `Validation` | Local input is rejected before any request is made |
///
/// # Example
///
/// ```rust
/// use activecampaign::api::common::Error;
///
/// let err = Error::Api { status: 404, message: "Not found".to_string() };
/// assert_eq!(err.to_string(), "HTTP error 404: Not found");
/// assert!(err.is_not_found());
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The underlying call could not be completed.
    ///
    /// Covers connection failures, DNS resolution, timeouts, and a success
    /// body that is not valid JSON.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API rejected the request.
    ///
    /// # Fields
    ///
    /// - `status` - The HTTP status code of the response
    /// - `message` - The API-supplied `error` message, or
    ///   [`UNKNOWN_ERROR_MESSAGE`] when none was given
    #[error("HTTP error {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the API.
        message: String,
    },

    /// Local input failed validation.
    ///
    /// Raised for a deal with neither stage nor group, a model rebuilt
    /// from a mapping that lacks a required field, an unusable base URL,
    /// or a connection lookup with no connection id available.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl Error {
    /// Returns the HTTP status code for API errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Transport(e) => e.status().map(|s| s.as_u16()),
            Error::Validation(_) => None,
        }
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Api { status: 404, .. })
    }

    /// Check if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Api { status: 401 | 403, .. })
    }

    /// Check if this is a rate limit error.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Error::Api { status: 429, .. })
    }

    /// Check if this is a server error.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::Api { status, .. } if *status >= 500)
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = Error::Api {
            status: 422,
            message: UNKNOWN_ERROR_MESSAGE.to_string(),
        };
        assert_eq!(err.to_string(), "HTTP error 422: Unknown error occurred");
        assert_eq!(err.status(), Some(422));
    }

    #[test]
    fn test_error_predicates() {
        let api = |status| Error::Api {
            status,
            message: String::new(),
        };
        assert!(api(404).is_not_found());
        assert!(api(401).is_auth_error());
        assert!(api(403).is_auth_error());
        assert!(api(429).is_rate_limited());
        assert!(api(502).is_server_error());
        assert!(!api(400).is_server_error());

        let validation = Error::Validation("missing stage".into());
        assert_eq!(validation.status(), None);
        assert!(!validation.is_not_found());
    }
}
