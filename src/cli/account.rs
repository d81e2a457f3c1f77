//
//  activecampaign
//  cli/account.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Account (organization) commands

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use serde_json::{json, Value};

use crate::output::Column;

use super::{envelope, BodyArgs, GlobalOptions, ParamArgs};

const ACCOUNT_KEY: &str = "account";

const ACCOUNT_COLUMNS: &[Column] = &[
    Column::new("ID", "id"),
    Column::new("Name", "name"),
    Column::new("URL", "accountUrl"),
    Column::new("Contacts", "contactCount"),
    Column::new("Deals", "dealCount"),
];

const FIELD_COLUMNS: &[Column] = &[
    Column::new("ID", "id"),
    Column::new("Label", "fieldLabel"),
    Column::new("Type", "fieldType"),
];

/// Manage accounts
#[derive(Args, Debug)]
pub struct AccountCommand {
    #[command(subcommand)]
    pub command: AccountSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AccountSubcommand {
    /// List accounts
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// View an account
    Get(GetArgs),

    /// Create an account
    Create(CreateArgs),

    /// Update an account
    Update(UpdateArgs),

    /// Link a contact to an account
    Link(LinkArgs),

    /// List account custom field definitions
    Fields(FieldsArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Search by account name
    #[arg(long, short = 's')]
    pub search: Option<String>,

    #[command(flatten)]
    pub params: ParamArgs,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Account id
    pub id: String,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Account name
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// Account website
    #[arg(long, short = 'u')]
    pub url: Option<String>,

    #[command(flatten)]
    pub body: BodyArgs,
}

impl CreateArgs {
    fn body(&self) -> Result<Value> {
        match (self.body.read()?, &self.name) {
            (Some(_), Some(_)) => bail!("Use either --data/--file or --name, not both"),
            (Some(body), None) => Ok(envelope(ACCOUNT_KEY, body)),
            (None, Some(name)) => {
                let mut account = json!({ "name": name });
                if let Some(url) = &self.url {
                    account["accountUrl"] = Value::String(url.clone());
                }
                Ok(envelope(ACCOUNT_KEY, account))
            }
            (None, None) => bail!("--name or a request body is required"),
        }
    }
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Account id
    pub id: String,

    #[command(flatten)]
    pub body: BodyArgs,
}

#[derive(Args, Debug)]
pub struct LinkArgs {
    /// Contact id
    #[arg(long)]
    pub contact_id: String,

    /// Account id
    #[arg(long)]
    pub account_id: String,

    /// Job title of the contact at the account
    #[arg(long)]
    pub job_title: Option<String>,
}

impl LinkArgs {
    fn body(&self) -> Value {
        let mut link = json!({
            "contact": self.contact_id,
            "account": self.account_id,
        });
        if let Some(job_title) = &self.job_title {
            link["jobTitle"] = Value::String(job_title.clone());
        }
        json!({ "accountContact": link })
    }
}

#[derive(Args, Debug)]
pub struct FieldsArgs {
    #[command(flatten)]
    pub params: ParamArgs,
}

impl AccountCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            AccountSubcommand::List(args) => self.list(args, global).await,
            AccountSubcommand::Get(args) => self.get(args, global).await,
            AccountSubcommand::Create(args) => self.create(args, global).await,
            AccountSubcommand::Update(args) => self.update(args, global).await,
            AccountSubcommand::Link(args) => self.link(args, global).await,
            AccountSubcommand::Fields(args) => self.fields(args, global).await,
        }
    }

    async fn list(&self, args: &ListArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;

        let mut query = args.params.query();
        if let Some(search) = &args.search {
            query.insert("search", search);
        }

        let accounts = client.list_accounts(&query).await?;
        global.output().write(&accounts, ACCOUNT_COLUMNS)
    }

    async fn get(&self, args: &GetArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let account = client.get_account(&args.id).await?;
        global.output().write(&account, &[])
    }

    async fn create(&self, args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
        let body = args.body()?;
        let client = global.client()?;
        let account = client.create_account(&body).await?;
        global.output().write(&account, &[])
    }

    async fn update(&self, args: &UpdateArgs, global: &GlobalOptions) -> Result<()> {
        let body = envelope(ACCOUNT_KEY, args.body.require()?);
        let client = global.client()?;
        let account = client.update_account(&args.id, &body).await?;
        global.output().write(&account, &[])
    }

    async fn link(&self, args: &LinkArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let link = client.create_account_contact(&args.body()).await?;
        global.output().write(&link, &[])
    }

    async fn fields(&self, args: &FieldsArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let fields = client.list_account_custom_fields(&args.params.query()).await?;
        global.output().write(&fields, FIELD_COLUMNS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_body_from_flags() {
        let args = CreateArgs {
            name: Some("Acme".to_string()),
            url: Some("https://acme.test".to_string()),
            body: BodyArgs::default(),
        };
        assert_eq!(
            args.body().unwrap(),
            json!({"account": {"name": "Acme", "accountUrl": "https://acme.test"}})
        );
    }

    #[test]
    fn test_create_body_requires_something() {
        let args = CreateArgs {
            name: None,
            url: None,
            body: BodyArgs::default(),
        };
        assert!(args.body().is_err());
    }

    #[test]
    fn test_link_body() {
        let args = LinkArgs {
            contact_id: "1".to_string(),
            account_id: "2".to_string(),
            job_title: Some("CTO".to_string()),
        };
        assert_eq!(
            args.body(),
            json!({"accountContact": {"contact": "1", "account": "2", "jobTitle": "CTO"}})
        );
    }
}
