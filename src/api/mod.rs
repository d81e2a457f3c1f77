//
//  activecampaign
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides the HTTP client for the ActiveCampaign v3 REST API.
//!
//! ## Architecture
//!
//! The API layer is organized as follows:
//!
//! - [`client`]: Core HTTP client with API key injection and request handling
//! - [`common`]: Shared types (errors, query parameters)
//! - Resource modules, each adding endpoint methods to
//!   [`ActiveCampaignClient`]:
//!   [`contacts`], [`accounts`], [`fields`], [`tags`], [`deals`],
//!   [`connections`] and [`ecommerce`]
//!
//! Every endpoint method sends one request and returns one decoded JSON
//! value, usually the single field of the response named after the
//! resource (`contacts`, `deal`, ...).
//!
//! ## Usage
//!
//! ```rust,no_run
//! use activecampaign::api::{ActiveCampaignClient, QueryParams};
//!
//! # async fn example() -> activecampaign::api::Result<()> {
//! let client = ActiveCampaignClient::new("https://acme.api-us1.com", "your-api-key")?
//!     .with_connection_id("1");
//!
//! let tags = client.list_tags(&QueryParams::new().limit(50)).await?;
//! let customers = client
//!     .get_connection_customers(None, &QueryParams::new())
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Failures are returned as [`Error`] variants:
//!
//! - `Transport`: the request could not be completed or the body was not JSON
//! - `Api`: non-2xx status, or a body with `"status": "error"`
//! - `Validation`: a request was rejected before it was sent

/// Core HTTP client wrapper for the ActiveCampaign API.
///
/// Provides the [`ActiveCampaignClient`] struct which handles:
/// - API key injection
/// - Request/response serialization
/// - Error detection and message extraction
pub mod client;

/// Common types shared by every endpoint.
///
/// Includes:
/// - [`Error`]: Error type for API operations
/// - [`QueryParams`]: Ordered query string builder
pub mod common;

pub mod accounts;
pub mod connections;
pub mod contacts;
pub mod deals;
pub mod ecommerce;
pub mod fields;
pub mod tags;

/// Re-export of the main ActiveCampaign API client.
pub use client::ActiveCampaignClient;

/// Re-export of common API types.
pub use common::{Error, QueryParams, Result};
