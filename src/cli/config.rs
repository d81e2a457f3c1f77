//
//  activecampaign
//  cli/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI configuration commands
//!
//! This module provides commands for managing stored accounts. Keys are
//! read and written on the account selected with `--account`, falling back
//! to the default account.
//!
//! ```bash
//! ac config set api_url acme.api-us1.com
//! ac config set api_key <key>
//! ac --account sandbox config set api_url acme-sandbox.api-us1.com
//! ac config use sandbox
//! ```

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;
use serde_json::{json, Value};

use crate::config::{AccountConfig, Config, API_KEY_KEY, DEFAULT_ACCOUNT_NAME};

use super::GlobalOptions;

/// Manage CLI configuration
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Get a configuration value
    Get(GetArgs),

    /// Set a configuration value
    Set(SetArgs),

    /// Unset a configuration value
    Unset(UnsetArgs),

    /// List all configured accounts
    #[command(visible_alias = "ls")]
    List,

    /// Show configuration file path
    Path,

    /// Make an account the default
    Use(UseArgs),
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Configuration key (api_url, api_key, connection_id)
    pub key: String,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Configuration key (api_url, api_key, connection_id)
    pub key: String,

    /// Value to set
    pub value: String,
}

#[derive(Args, Debug)]
pub struct UnsetArgs {
    /// Configuration key (api_url, api_key, connection_id)
    pub key: String,
}

#[derive(Args, Debug)]
pub struct UseArgs {
    /// Account name
    pub account: String,
}

impl ConfigCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ConfigSubcommand::Get(args) => self.get(args, global),
            ConfigSubcommand::Set(args) => self.set(args, global),
            ConfigSubcommand::Unset(args) => self.unset(args, global),
            ConfigSubcommand::List => self.list(global),
            ConfigSubcommand::Path => self.path(global),
            ConfigSubcommand::Use(args) => self.use_account(args, global),
        }
    }

    /// Get a configuration value
    fn get(&self, args: &GetArgs, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let account = target_account(&config, global);
        let value = config.get(&account, &args.key)?;

        if global.json {
            let result = json!({
                "account": account,
                "key": args.key,
                "value": value,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else if let Some(v) = value {
            println!("{}", v);
        }

        Ok(())
    }

    /// Set a configuration value
    fn set(&self, args: &SetArgs, global: &GlobalOptions) -> Result<()> {
        let mut config = Config::load()?;
        let account = target_account(&config, global);

        config.set(&account, &args.key, &args.value)?;
        config.save()?;

        let stored = config.get(&account, &args.key)?.unwrap_or_default();
        let shown = display_value(&args.key, &stored);

        if global.json {
            let result = json!({
                "success": true,
                "account": account,
                "key": args.key,
                "value": shown,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!(
                "{} Set {} = {} ({})",
                style("✓").green(),
                style(&args.key).cyan(),
                shown,
                account
            );
        }

        Ok(())
    }

    /// Unset a configuration value
    fn unset(&self, args: &UnsetArgs, global: &GlobalOptions) -> Result<()> {
        let mut config = Config::load()?;
        let account = target_account(&config, global);

        config.unset(&account, &args.key)?;
        config.save()?;

        if global.json {
            let result = json!({
                "success": true,
                "account": account,
                "key": args.key,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!(
                "{} Unset {} ({})",
                style("✓").green(),
                style(&args.key).cyan(),
                account
            );
        }

        Ok(())
    }

    /// List all configured accounts
    fn list(&self, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;

        if global.json {
            let accounts: serde_json::Map<String, Value> = config
                .accounts
                .iter()
                .map(|(name, account)| (name.clone(), redacted(account)))
                .collect();
            let result = json!({
                "default_account": config.default_account,
                "accounts": accounts,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        if config.accounts.is_empty() {
            println!("No accounts configured. Run 'ac config set api_url <url>' to add one.");
            return Ok(());
        }

        for (name, account) in &config.accounts {
            let marker = if config.default_account.as_deref() == Some(name.as_str()) {
                " (default)"
            } else {
                ""
            };
            println!();
            println!("{}{}", style(name).cyan().bold(), marker);
            println!("  api_url: {}", account.api_url);
            println!("  api_key: {}", mask_secret(&account.api_key));
            if let Some(id) = &account.connection_id {
                println!("  connection_id: {}", id);
            }
        }

        println!();
        Ok(())
    }

    /// Show configuration file path
    fn path(&self, global: &GlobalOptions) -> Result<()> {
        let config_path = Config::config_path()?;

        if global.json {
            let result = json!({
                "path": config_path.display().to_string(),
                "exists": config_path.exists(),
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!("{}", config_path.display());
        }

        Ok(())
    }

    /// Make an account the default
    fn use_account(&self, args: &UseArgs, global: &GlobalOptions) -> Result<()> {
        let mut config = Config::load()?;
        config.use_account(&args.account)?;
        config.save()?;

        if global.json {
            let result = json!({
                "success": true,
                "default_account": args.account,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!(
                "{} Default account is now {}",
                style("✓").green(),
                style(&args.account).cyan()
            );
        }

        Ok(())
    }
}

/// Account the config command acts on.
fn target_account(config: &Config, global: &GlobalOptions) -> String {
    config
        .account_name(global.account.as_deref())
        .unwrap_or(DEFAULT_ACCOUNT_NAME)
        .to_string()
}

fn display_value(key: &str, value: &str) -> String {
    if key == API_KEY_KEY {
        mask_secret(value)
    } else {
        value.to_string()
    }
}

fn redacted(account: &AccountConfig) -> Value {
    json!({
        "api_url": account.api_url,
        "api_key": mask_secret(&account.api_key),
        "connection_id": account.connection_id,
    })
}

/// Masks all but the last four characters of a secret.
fn mask_secret(secret: &str) -> String {
    let count = secret.chars().count();
    if count <= 4 {
        return "*".repeat(count);
    }
    let tail: String = secret.chars().skip(count - 4).collect();
    format!("{}{}", "*".repeat(count - 4), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret(""), "");
        assert_eq!(mask_secret("abc"), "***");
        assert_eq!(mask_secret("abcdef123"), "*****f123");
    }

    #[test]
    fn test_target_account() {
        let mut config = Config::default();
        let global = GlobalOptions::default();
        assert_eq!(target_account(&config, &global), DEFAULT_ACCOUNT_NAME);

        config.set("main", "api_url", "acme.api-us1.com").unwrap();
        assert_eq!(target_account(&config, &global), "main");

        let named = GlobalOptions {
            account: Some("sandbox".to_string()),
            ..GlobalOptions::default()
        };
        assert_eq!(target_account(&config, &named), "sandbox");
    }

    #[test]
    fn test_redacted_hides_key() {
        let account = AccountConfig::new("acme.api-us1.com", "secretkey");
        let value = redacted(&account);
        assert_eq!(value["api_key"], "*****tkey");
        assert_eq!(value["api_url"], "https://acme.api-us1.com");
    }
}
