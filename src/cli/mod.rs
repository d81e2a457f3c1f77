//
//  activecampaign
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Command Line Interface
//!
//! The clap command tree for the `ac` binary. Each resource group has its
//! own module with a `*Command` struct and a `run` method that builds a
//! client from [`GlobalOptions`], makes one call and prints the result.
//!
//! ## Account resolution
//!
//! The API URL, key and default connection id are taken from, in order:
//!
//! 1. `--api-url`, `--api-key`, `--connection-id`
//! 2. `AC_API_URL`, `AC_API_KEY`, `AC_CONNECTION_ID`
//! 3. the account named by `--account` / `AC_ACCOUNT`
//! 4. the config's `default_account`

mod account;
mod completion;
mod config;
mod connection;
mod contact;
mod deal;
mod ecommerce;
mod field;
mod tag;

pub use account::AccountCommand;
pub use completion::CompletionCommand;
pub use config::ConfigCommand;
pub use connection::ConnectionCommand;
pub use contact::ContactCommand;
pub use deal::DealCommand;
pub use ecommerce::{CustomerCommand, OrderCommand};
pub use field::FieldCommand;
pub use tag::TagCommand;

use std::io::Read;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::Value;

use crate::api::{ActiveCampaignClient, QueryParams};
use crate::config::{normalize_api_url, AccountConfig, Config};
use crate::output::{OutputFormat, OutputWriter};

#[derive(Parser, Debug)]
#[command(
    name = "ac",
    version,
    about = "Work with ActiveCampaign from the command line",
    long_about = "ac is a CLI for the ActiveCampaign v3 API.\n\n\
                  It manages contacts, accounts, deals, tags and e-commerce data from your terminal.",
    propagate_version = true,
    after_help = "Use 'ac <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Configured account to use
    #[arg(long, short = 'a', global = true, env = "AC_ACCOUNT")]
    pub account: Option<String>,

    /// API URL, e.g. https://acme.api-us1.com
    #[arg(long, global = true, env = "AC_API_URL")]
    pub api_url: Option<String>,

    /// API key
    #[arg(long, global = true, env = "AC_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Default e-commerce connection id
    #[arg(long, global = true, env = "AC_CONNECTION_ID")]
    pub connection_id: Option<String>,

    /// Output JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage contacts
    #[command(visible_alias = "c")]
    Contact(ContactCommand),

    /// Manage accounts (organizations)
    Account(AccountCommand),

    /// Manage deals
    Deal(DealCommand),

    /// Manage tags
    Tag(TagCommand),

    /// Manage contact custom fields
    Field(FieldCommand),

    /// Manage e-commerce connections
    #[command(visible_alias = "conn")]
    Connection(ConnectionCommand),

    /// Manage e-commerce customers
    Customer(CustomerCommand),

    /// Manage e-commerce orders
    Order(OrderCommand),

    /// Manage CLI configuration
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completion(CompletionCommand),

    /// Show version information
    Version,
}

impl GlobalOptions {
    /// Output writer for the selected format.
    pub fn output(&self) -> OutputWriter {
        if self.json {
            OutputWriter::new(OutputFormat::Json)
        } else {
            OutputWriter::new(OutputFormat::Table)
        }
    }

    /// Merges `config` with flags and environment into one account.
    ///
    /// # Errors
    ///
    /// - `--account` names an account that is not configured
    /// - The URL or key is still missing after merging
    pub fn resolve_account(&self, config: &Config) -> Result<AccountConfig> {
        let mut account = match config.account_name(self.account.as_deref()) {
            Some(name) => match config.accounts.get(name) {
                Some(found) => found.clone(),
                None if self.account.is_some() => {
                    bail!("Account '{}' is not configured", name)
                }
                None => AccountConfig::default(),
            },
            None => AccountConfig::default(),
        };

        if let Some(url) = &self.api_url {
            account.api_url = normalize_api_url(url);
        }
        if let Some(key) = &self.api_key {
            account.api_key = key.trim().to_string();
        }
        if let Some(id) = &self.connection_id {
            account.connection_id = Some(id.clone());
        }

        if account.api_url.is_empty() {
            bail!("No API URL configured. Run 'ac config set api_url <url>' or set AC_API_URL");
        }
        if account.api_key.is_empty() {
            bail!("No API key configured. Run 'ac config set api_key <key>' or set AC_API_KEY");
        }

        Ok(account)
    }

    /// Builds a client for the resolved account.
    pub fn client(&self) -> Result<ActiveCampaignClient> {
        let config = Config::load()?;
        let account = self.resolve_account(&config)?;
        tracing::debug!(api_url = %account.api_url, "using account");
        Ok(ActiveCampaignClient::from_config(&account)?)
    }
}

/// Query string options shared by list commands.
#[derive(Args, Debug, Clone, Default)]
pub struct ParamArgs {
    /// Query parameter, repeatable (e.g. --param filters[email]=jane@example.com)
    #[arg(long = "param", short = 'P', value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub params: Vec<(String, String)>,

    /// Maximum number of results
    #[arg(long, short = 'l')]
    pub limit: Option<u32>,

    /// Number of results to skip
    #[arg(long)]
    pub offset: Option<u32>,
}

impl ParamArgs {
    /// The query parameters, with `--limit`/`--offset` applied last.
    pub fn query(&self) -> QueryParams {
        let mut query: QueryParams = self.params.iter().cloned().collect();
        if let Some(limit) = self.limit {
            query = query.limit(limit);
        }
        if let Some(offset) = self.offset {
            query = query.offset(offset);
        }
        query
    }
}

/// Raw JSON request body, inline or from a file.
#[derive(Args, Debug, Clone, Default)]
pub struct BodyArgs {
    /// Request body as JSON
    #[arg(long, short = 'd', value_name = "JSON", conflicts_with = "file")]
    pub data: Option<String>,

    /// Read the request body from a file (- for stdin)
    #[arg(long, short = 'f', value_name = "PATH")]
    pub file: Option<String>,
}

impl BodyArgs {
    /// Reads the body if one was given.
    pub fn read(&self) -> Result<Option<Value>> {
        let content = match (&self.data, &self.file) {
            (Some(data), _) => data.clone(),
            (None, Some(path)) if path == "-" => {
                let mut buffer = String::new();
                std::io::stdin().read_to_string(&mut buffer)?;
                buffer
            }
            (None, Some(path)) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path))?,
            (None, None) => return Ok(None),
        };

        let value = serde_json::from_str(&content).context("Request body is not valid JSON")?;
        Ok(Some(value))
    }

    /// Reads the body, failing when none was given.
    pub fn require(&self) -> Result<Value> {
        match self.read()? {
            Some(value) => Ok(value),
            None => bail!("A request body is required. Pass --data <json> or --file <path>"),
        }
    }
}

/// Parses a `KEY=VALUE` argument. The value may itself contain `=`.
pub fn parse_key_value(s: &str) -> std::result::Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("Invalid format: '{}'. Expected KEY=VALUE", s)),
    }
}

/// Wraps `fields` as `{key: fields}` unless it already is that envelope.
pub(crate) fn envelope(key: &str, fields: Value) -> Value {
    match fields {
        Value::Object(map) if map.len() == 1 && map.contains_key(key) => Value::Object(map),
        other => serde_json::json!({ key: other }),
    }
}
