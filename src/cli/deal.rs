//
//  activecampaign
//  cli/deal.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Deal commands
//!
//! Deal values are integers in minor currency units, so `--value 4999` with
//! `--currency usd` is $49.99. A deal needs a pipeline (`--group`) or a
//! stage (`--stage`).
//!
//! ```bash
//! ac deal create --title "Pilot" --value 4999 --currency usd --owner 1 --group 1
//! ac deal list --param filters[status]=0
//! ```

use std::collections::BTreeMap;

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use serde_json::Value;

use crate::models::{Deal, DEAL_KEY};
use crate::output::{format_deal_status, Column, OutputFormat};

use super::{parse_key_value, BodyArgs, GlobalOptions, ParamArgs};

const DEAL_COLUMNS: &[Column] = &[
    Column::new("ID", "id"),
    Column::new("Title", "title"),
    Column::new("Value", "value"),
    Column::new("Currency", "currency"),
    Column::new("Stage", "stage"),
    Column::new("Status", "status"),
];

const FIELD_META_COLUMNS: &[Column] = &[
    Column::new("ID", "id"),
    Column::new("Label", "fieldLabel"),
    Column::new("Type", "fieldType"),
];

const FIELD_DATA_COLUMNS: &[Column] = &[
    Column::new("Field", "customFieldId"),
    Column::new("Value", "fieldValue"),
];

/// Manage deals
#[derive(Args, Debug)]
pub struct DealCommand {
    #[command(subcommand)]
    pub command: DealSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum DealSubcommand {
    /// List deals
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// View a deal
    Get(IdArgs),

    /// Create a deal
    Create(CreateArgs),

    /// List deal custom field definitions
    Fields(FieldsArgs),

    /// Show the custom field values of a deal
    #[command(name = "field-data")]
    FieldData(IdArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Search title, contact or organization
    #[arg(long, short = 's')]
    pub search: Option<String>,

    #[command(flatten)]
    pub params: ParamArgs,
}

#[derive(Args, Debug)]
pub struct IdArgs {
    /// Deal id
    pub id: String,
}

#[derive(Args, Debug)]
pub struct FieldsArgs {
    #[command(flatten)]
    pub params: ParamArgs,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Deal title
    #[arg(long, short = 't')]
    pub title: Option<String>,

    /// Value in minor currency units (cents)
    #[arg(long, short = 'v')]
    pub value: Option<i64>,

    /// Three letter currency code
    #[arg(long, short = 'c')]
    pub currency: Option<String>,

    /// Owner (user) id
    #[arg(long, short = 'o')]
    pub owner: Option<String>,

    /// Stage id
    #[arg(long)]
    pub stage: Option<String>,

    /// Pipeline (group) id
    #[arg(long)]
    pub group: Option<String>,

    /// Primary contact id
    #[arg(long)]
    pub contact_id: Option<String>,

    /// Account id
    #[arg(long)]
    pub account_id: Option<String>,

    /// Description
    #[arg(long)]
    pub description: Option<String>,

    /// Win probability percentage
    #[arg(long)]
    pub percentage: Option<i64>,

    /// Status (0 open, 1 won, 2 lost)
    #[arg(long)]
    pub status: Option<String>,

    /// Custom field value, repeatable (FIELD_ID=VALUE)
    #[arg(long = "field", value_name = "FIELD_ID=VALUE", value_parser = parse_key_value)]
    pub fields: Vec<(String, String)>,

    #[command(flatten)]
    pub body: BodyArgs,
}

impl CreateArgs {
    fn has_typed_fields(&self) -> bool {
        self.title.is_some()
            || self.value.is_some()
            || self.currency.is_some()
            || self.owner.is_some()
            || self.stage.is_some()
            || self.group.is_some()
            || self.contact_id.is_some()
            || self.account_id.is_some()
            || self.description.is_some()
            || self.percentage.is_some()
            || self.status.is_some()
            || !self.fields.is_empty()
    }

    /// Builds a deal from the typed flags.
    fn to_deal(&self) -> Result<Deal> {
        let (Some(title), Some(value), Some(currency), Some(owner)) =
            (&self.title, self.value, &self.currency, &self.owner)
        else {
            bail!("--title, --value, --currency and --owner are required to create a deal");
        };

        let mut builder = Deal::builder(title.as_str(), value, currency.as_str(), owner.as_str());
        if let Some(stage) = &self.stage {
            builder = builder.stage(stage.as_str());
        }
        if let Some(group) = &self.group {
            builder = builder.group(group.as_str());
        }
        if let Some(contact) = &self.contact_id {
            builder = builder.contact(contact.as_str());
        }
        if let Some(account) = &self.account_id {
            builder = builder.account(account.as_str());
        }
        if let Some(description) = &self.description {
            builder = builder.description(description.as_str());
        }
        if let Some(percentage) = self.percentage {
            builder = builder.percentage(percentage);
        }
        if let Some(status) = &self.status {
            builder = builder.status(status.as_str());
        }
        if !self.fields.is_empty() {
            let fields: BTreeMap<String, Value> = self
                .fields
                .iter()
                .map(|(id, value)| (id.clone(), Value::String(value.clone())))
                .collect();
            builder = builder.fields(fields);
        }

        Ok(builder.build()?)
    }
}

impl DealCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            DealSubcommand::List(args) => self.list(args, global).await,
            DealSubcommand::Get(args) => self.get(args, global).await,
            DealSubcommand::Create(args) => self.create(args, global).await,
            DealSubcommand::Fields(args) => self.fields(args, global).await,
            DealSubcommand::FieldData(args) => self.field_data(args, global).await,
        }
    }

    async fn list(&self, args: &ListArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;

        let mut query = args.params.query();
        if let Some(search) = &args.search {
            query.insert("search", search);
        }

        let mut deals = client.list_deals(&query).await?;
        let output = global.output();
        if output.format() == OutputFormat::Table {
            label_statuses(&mut deals);
        }
        output.write(&deals, DEAL_COLUMNS)
    }

    async fn get(&self, args: &IdArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let deal = client.get_deal(&args.id).await?;
        global.output().write(&deal, &[])
    }

    async fn create(&self, args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
        let deal = match args.body.read()? {
            Some(body) if !args.has_typed_fields() => deal_from_body(&body)?,
            Some(_) => bail!("Use either --data/--file or field flags, not both"),
            None => args.to_deal()?,
        };

        let client = global.client()?;
        let created = client.create_deal(&deal.to_envelope()).await?;
        global.output().write(&created, &[])
    }

    async fn fields(&self, args: &FieldsArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let fields = client.list_deal_custom_fields(&args.params.query()).await?;
        global.output().write(&fields, FIELD_META_COLUMNS)
    }

    async fn field_data(&self, args: &IdArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let data = client.get_deal_custom_field_data(&args.id).await?;
        global.output().write(&data, FIELD_DATA_COLUMNS)
    }
}

/// Accepts either `{"deal": {...}}` or the bare deal object, validating it.
fn deal_from_body(body: &Value) -> Result<Deal> {
    let deal = match body {
        Value::Object(map) if map.contains_key(DEAL_KEY) => Deal::from_envelope(body)?,
        Value::Object(map) => Deal::from_map(map)?,
        _ => bail!("Deal body must be a JSON object"),
    };
    Ok(deal)
}

/// Replaces numeric status codes with their names for display.
fn label_statuses(deals: &mut Value) {
    let Some(items) = deals.as_array_mut() else {
        return;
    };
    for deal in items {
        if let Some(status) = deal.get_mut("status") {
            if let Some(code) = status.as_str() {
                *status = Value::String(format_deal_status(code, false));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_args() -> CreateArgs {
        CreateArgs {
            title: Some("Pilot".to_string()),
            value: Some(4999),
            currency: Some("usd".to_string()),
            owner: Some("1".to_string()),
            stage: None,
            group: Some("2".to_string()),
            contact_id: None,
            account_id: None,
            description: None,
            percentage: None,
            status: None,
            fields: vec![("7".to_string(), "Q3".to_string())],
            body: BodyArgs::default(),
        }
    }

    #[test]
    fn test_typed_flags_to_deal() {
        let deal = create_args().to_deal().unwrap();
        assert_eq!(deal.title(), "Pilot");
        assert_eq!(deal.value(), 4999);
        assert_eq!(deal.group(), Some("2"));
        assert_eq!(deal.fields().and_then(|f| f.get("7")), Some(&json!("Q3")));
    }

    #[test]
    fn test_typed_flags_need_stage_or_group() {
        let args = CreateArgs {
            group: None,
            ..create_args()
        };
        let err = args.to_deal().unwrap_err();
        assert!(err.to_string().contains("Either the stage or group must be set"));
    }

    #[test]
    fn test_typed_flags_need_required_fields() {
        let args = CreateArgs {
            owner: None,
            ..create_args()
        };
        assert!(args.to_deal().is_err());
    }

    #[test]
    fn test_deal_from_body() {
        let body = json!({"deal": {"title": "T", "value": "100", "currency": "usd", "owner": "1", "stage": "3"}});
        let deal = deal_from_body(&body).unwrap();
        assert_eq!(deal.value(), 100);
        assert_eq!(deal.stage(), Some("3"));

        let invalid = json!({"title": "T", "value": 1, "currency": "usd", "owner": "1"});
        assert!(deal_from_body(&invalid).is_err());
    }

    #[test]
    fn test_label_statuses() {
        let mut deals = json!([{"id": "1", "status": "1"}, {"id": "2"}]);
        label_statuses(&mut deals);
        assert_eq!(deals[0]["status"], "won");
        assert!(deals[1].get("status").is_none());
    }
}
