//
//  activecampaign
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! This module provides configuration management for the `ac` CLI. It
//! handles loading, saving, and accessing account settings stored in a TOML
//! file in a platform-specific directory.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/ac/config.toml`
//! - **macOS**: `~/Library/Application Support/ac/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\ac\config\config.toml`
//!
//! Setting `AC_CONFIG_DIR` replaces the directory, which is mostly useful
//! for tests and for keeping several setups side by side.
//!
//! ## Example Configuration File
//!
//! ```toml
//! default_account = "main"
//!
//! [accounts.main]
//! api_url = "https://acme.api-us1.com"
//! api_key = "..."
//! connection_id = "1"
//!
//! [accounts.sandbox]
//! api_url = "https://acme-sandbox.api-us1.com"
//! api_key = "..."
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use activecampaign::config::Config;
//!
//! let mut config = Config::load()?;
//! config.set("main", "api_url", "acme.api-us1.com")?;
//! config.set("main", "api_key", "secret")?;
//! config.save()?;
//!
//! let account = config.account(None)?;
//! println!("Using {}", account.api_url);
//! # Ok::<(), anyhow::Error>(())
//! ```

mod accounts;
mod file;

pub use accounts::*;
pub use file::*;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "AC_CONFIG_DIR";

/// File name inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Top-level configuration for the `ac` CLI.
///
/// # Fields
///
/// * `default_account` - Account used when `--account` is not given
/// * `accounts` - Named account settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_account: Option<String>,

    #[serde(default)]
    pub accounts: BTreeMap<String, AccountConfig>,
}

impl Config {
    /// Load the configuration from the default location.
    ///
    /// Returns the default configuration when the file does not exist.
    ///
    /// # Errors
    ///
    /// - The config directory cannot be determined
    /// - The file exists but cannot be read or is not valid TOML
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load the configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        read_config_file(path)
    }

    /// Save the configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save the configuration to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        tracing::debug!(path = %path.display(), "saving config");
        write_config_file(path, self)
    }

    /// Path of the config file, honouring [`CONFIG_DIR_ENV`].
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            if !dir.is_empty() {
                return Ok(PathBuf::from(dir).join(CONFIG_FILE_NAME));
            }
        }

        let dirs = ProjectDirs::from("", "", crate::APP_NAME)
            .ok_or_else(|| anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Name of the account to use: `name` if given, else the default
    /// account, else the only configured account.
    pub fn account_name<'a>(&'a self, name: Option<&'a str>) -> Option<&'a str> {
        if let Some(name) = name {
            return Some(name);
        }
        if let Some(default) = self.default_account.as_deref() {
            return Some(default);
        }
        match self.accounts.len() {
            1 => self.accounts.keys().next().map(String::as_str),
            _ => None,
        }
    }

    /// Look up an account, falling back as in [`Config::account_name`].
    ///
    /// # Errors
    ///
    /// Fails when a name resolves but no such account is configured, or
    /// when nothing resolves at all.
    pub fn account(&self, name: Option<&str>) -> Result<&AccountConfig> {
        let resolved = self.account_name(name).ok_or_else(|| {
            anyhow!("No account selected. Pass --account or run 'ac config use <name>'")
        })?;
        self.accounts
            .get(resolved)
            .ok_or_else(|| anyhow!("Account '{}' is not configured", resolved))
    }

    /// Read `key` from an account. Unknown accounts read as unset.
    pub fn get(&self, account: &str, key: &str) -> Result<Option<String>> {
        match self.accounts.get(account) {
            Some(config) => config.get(key),
            None if is_account_key(key) => Ok(None),
            None => AccountConfig::default().get(key),
        }
    }

    /// Write `key` on an account, creating the account if needed.
    ///
    /// The first account created becomes the default.
    pub fn set(&mut self, account: &str, key: &str, value: &str) -> Result<()> {
        if account.trim().is_empty() {
            bail!("Account name must not be empty");
        }

        let entry = self.accounts.entry(account.to_string()).or_default();
        entry.set(key, value)?;

        if self.default_account.is_none() {
            self.default_account = Some(account.to_string());
        }
        Ok(())
    }

    /// Clear `key` on an account.
    pub fn unset(&mut self, account: &str, key: &str) -> Result<()> {
        match self.accounts.get_mut(account) {
            Some(config) => config.unset(key),
            None => bail!("Account '{}' is not configured", account),
        }
    }

    /// Make `account` the default.
    pub fn use_account(&mut self, account: &str) -> Result<()> {
        if !self.accounts.contains_key(account) {
            bail!("Account '{}' is not configured", account);
        }
        self.default_account = Some(account.to_string());
        Ok(())
    }
}
