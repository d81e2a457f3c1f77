//
//  activecampaign
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # ActiveCampaign API client
//!
//! A typed async client for the ActiveCampaign v3 REST API, plus the `ac`
//! command-line tool built on it.
//!
//! ## Features
//!
//! - **Contacts**: list, view, create, update and tag contacts
//! - **Accounts**: manage organizations and link contacts to them
//! - **Deals**: list, view and create deals, read deal custom fields
//! - **E-commerce**: connections, customers and orders
//! - **Models**: [`models::Contact`] and [`models::Deal`] with fluent setters
//!   and conversion to and from the API's JSON shape
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use activecampaign::api::{ActiveCampaignClient, QueryParams};
//! use activecampaign::models::Contact;
//!
//! # async fn example() -> activecampaign::api::Result<()> {
//! let client = ActiveCampaignClient::new("https://acme.api-us1.com", "your-api-key")?;
//!
//! let contact = Contact::new("jane@example.com")
//!     .with_first_name("Jane")
//!     .with_last_name("Doe");
//! let created = client.create_contact(&contact).await?;
//!
//! let tags = client.list_tags(&QueryParams::new().search("vip")).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! The `ac` binary reads accounts from `config.toml` in the platform config
//! directory; see [`config`].
//!
//! ## Environment Variables
//!
//! - `AC_API_URL`: API host URL
//! - `AC_API_KEY`: API key
//! - `AC_CONNECTION_ID`: Default e-commerce connection id
//! - `AC_ACCOUNT`: Configured account to use
//! - `AC_CONFIG_DIR`: Config directory override
//! - `AC_DEBUG`: Log filter for the binary (e.g. `debug`)

/// API client for the ActiveCampaign v3 REST API.
///
/// The client handles API key injection, request building, response
/// unwrapping, and error handling.
pub mod api;

/// Command-line interface definitions.
///
/// Contains the `ac` command tree defined using the clap derive API.
pub mod cli;

/// Configuration file management.
///
/// Manages the CLI's stored accounts:
/// - Linux: `~/.config/ac/config.toml`
/// - macOS: `~/Library/Application Support/ac/config.toml`
/// - Windows: `%APPDATA%\ac\config\config.toml`
pub mod config;

/// Contact and deal models.
pub mod models;

/// Output formatting for the CLI.
///
/// - Table format: Human-readable tables for interactive use
/// - JSON format: Structured output for scripting and automation
pub mod output;

/// Re-export of the main CLI struct for convenient access.
pub use cli::Cli;

/// Re-export of the API client.
pub use api::ActiveCampaignClient;

/// Re-export of the configuration struct.
pub use config::Config;

/// Application name, used for the binary, config directory and User-Agent.
pub const APP_NAME: &str = "ac";

/// Crate version from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Process exit codes used by the `ac` binary.
///
/// # Example
///
/// ```rust,no_run
/// use activecampaign::exit_codes;
/// use std::process;
///
/// process::exit(exit_codes::AUTH_ERROR);
/// ```
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error.
    ///
    /// An unspecified error occurred during execution.
    /// Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments.
    pub const USAGE: i32 = 2;

    /// The API rejected the key (HTTP 401 or 403).
    ///
    /// Check `ac config get api_key` or `AC_API_KEY`.
    pub const AUTH_ERROR: i32 = 4;

    /// The requested contact, deal or other record does not exist (HTTP 404).
    pub const NOT_FOUND: i32 = 8;

    /// API rate limit exceeded (HTTP 429).
    ///
    /// Wait before retrying.
    pub const RATE_LIMIT: i32 = 32;
}
