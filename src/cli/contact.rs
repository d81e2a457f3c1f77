//
//  activecampaign
//  cli/contact.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Contact commands
//!
//! ## Examples
//!
//! ```bash
//! # Find a contact by email
//! ac contact list --email jane@example.com
//!
//! # Create a contact with a custom field value
//! ac contact create --email jane@example.com --first-name Jane --field 1=Gold
//!
//! # Tag contact 7 with tag 3
//! ac contact tag 7 3
//! ```

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use serde_json::{Map, Value};

use crate::models::{Contact, CONTACT_KEY};
use crate::output::Column;

use super::{envelope, parse_key_value, BodyArgs, GlobalOptions, ParamArgs};

const CONTACT_COLUMNS: &[Column] = &[
    Column::new("ID", "id"),
    Column::new("Email", "email"),
    Column::new("First Name", "firstName"),
    Column::new("Last Name", "lastName"),
    Column::new("Phone", "phone"),
];

/// Manage contacts
#[derive(Args, Debug)]
pub struct ContactCommand {
    #[command(subcommand)]
    pub command: ContactSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ContactSubcommand {
    /// List contacts
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// View a contact
    Get(GetArgs),

    /// Create a contact
    Create(CreateArgs),

    /// Update a contact
    Update(UpdateArgs),

    /// Add a tag to a contact
    Tag(TagArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Filter by exact email
    #[arg(long, short = 'e')]
    pub email: Option<String>,

    /// Search name, organization, phone or email
    #[arg(long, short = 's')]
    pub search: Option<String>,

    #[command(flatten)]
    pub params: ParamArgs,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Contact id
    pub id: String,
}

/// Typed contact fields
#[derive(Args, Debug, Default)]
pub struct ContactFields {
    /// Email address
    #[arg(long, short = 'e')]
    pub email: Option<String>,

    /// First name
    #[arg(long)]
    pub first_name: Option<String>,

    /// Last name
    #[arg(long)]
    pub last_name: Option<String>,

    /// Phone number
    #[arg(long)]
    pub phone: Option<String>,

    /// Organization id
    #[arg(long)]
    pub orgid: Option<String>,

    /// Custom field value, repeatable (FIELD_ID=VALUE)
    #[arg(long = "field", value_name = "FIELD_ID=VALUE", value_parser = parse_key_value)]
    pub fields: Vec<(String, String)>,
}

impl ContactFields {
    fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.phone.is_none()
            && self.orgid.is_none()
            && self.fields.is_empty()
    }

    /// Builds a full contact. Email is required.
    fn to_contact(&self) -> Result<Contact> {
        let Some(email) = &self.email else {
            bail!("--email is required to create a contact");
        };

        let mut contact = Contact::new(email.as_str());
        if let Some(first_name) = &self.first_name {
            contact.set_first_name(first_name.as_str());
        }
        if let Some(last_name) = &self.last_name {
            contact.set_last_name(last_name.as_str());
        }
        if let Some(phone) = &self.phone {
            contact.set_phone(phone.as_str());
        }
        if let Some(orgid) = &self.orgid {
            contact.set_orgid(orgid.as_str());
        }
        for (field, value) in &self.fields {
            contact = contact.with_field_value(field.as_str(), value.as_str());
        }
        Ok(contact)
    }

    /// Builds a partial update body holding only the given flags.
    fn to_update(&self) -> Value {
        let mut map = Map::new();
        let scalars = [
            ("email", &self.email),
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("phone", &self.phone),
            ("orgid", &self.orgid),
        ];
        for (key, value) in scalars {
            if let Some(value) = value {
                map.insert(key.to_string(), Value::String(value.clone()));
            }
        }
        if !self.fields.is_empty() {
            let field_values = self
                .fields
                .iter()
                .map(|(field, value)| serde_json::json!({"field": field, "value": value}))
                .collect();
            map.insert("fieldValues".to_string(), Value::Array(field_values));
        }
        envelope(CONTACT_KEY, Value::Object(map))
    }
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    #[command(flatten)]
    pub fields: ContactFields,

    #[command(flatten)]
    pub body: BodyArgs,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Contact id
    pub id: String,

    #[command(flatten)]
    pub fields: ContactFields,

    #[command(flatten)]
    pub body: BodyArgs,
}

#[derive(Args, Debug)]
pub struct TagArgs {
    /// Contact id
    pub contact_id: u64,

    /// Tag id
    pub tag_id: u64,
}

impl ContactCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ContactSubcommand::List(args) => self.list(args, global).await,
            ContactSubcommand::Get(args) => self.get(args, global).await,
            ContactSubcommand::Create(args) => self.create(args, global).await,
            ContactSubcommand::Update(args) => self.update(args, global).await,
            ContactSubcommand::Tag(args) => self.tag(args, global).await,
        }
    }

    async fn list(&self, args: &ListArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;

        let mut query = args.params.query();
        if let Some(email) = &args.email {
            query.insert("email", email);
        }
        if let Some(search) = &args.search {
            query.insert("search", search);
        }

        let contacts = client.list_contacts(&query).await?;
        global.output().write(&contacts, CONTACT_COLUMNS)
    }

    async fn get(&self, args: &GetArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let contact = client.get_contact(&args.id).await?;
        global.output().write(&contact, &[])
    }

    async fn create(&self, args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
        let contact = match args.body.read()? {
            Some(body) if args.fields.is_empty() => contact_from_body(&body)?,
            Some(_) => bail!("Use either --data/--file or field flags, not both"),
            None => args.fields.to_contact()?,
        };

        let client = global.client()?;
        let created = client.create_contact(&contact).await?;
        global
            .output()
            .write(&Value::Object(created.to_map()), &[])
    }

    async fn update(&self, args: &UpdateArgs, global: &GlobalOptions) -> Result<()> {
        let body = match args.body.read()? {
            Some(body) if args.fields.is_empty() => envelope(CONTACT_KEY, body),
            Some(_) => bail!("Use either --data/--file or field flags, not both"),
            None if args.fields.is_empty() => bail!("Nothing to update"),
            None => args.fields.to_update(),
        };

        let client = global.client()?;
        let updated = client.update_contact(&args.id, &body).await?;
        global.output().write(&updated, &[])
    }

    async fn tag(&self, args: &TagArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let contact_tag = client.add_tag_to_contact(args.contact_id, args.tag_id).await?;

        let output = global.output();
        if global.json {
            output.write(&contact_tag, &[])
        } else {
            output.write_success(&format!(
                "Added tag {} to contact {}",
                args.tag_id, args.contact_id
            ));
            Ok(())
        }
    }
}

/// Accepts either `{"contact": {...}}` or the bare contact object.
fn contact_from_body(body: &Value) -> Result<Contact> {
    let contact = match body {
        Value::Object(map) if map.contains_key(CONTACT_KEY) => Contact::from_envelope(body)?,
        Value::Object(map) => Contact::from_map(map)?,
        _ => bail!("Contact body must be a JSON object"),
    };
    Ok(contact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fields_to_contact() {
        let fields = ContactFields {
            email: Some("jane@example.com".to_string()),
            first_name: Some("Jane".to_string()),
            fields: vec![("1".to_string(), "Gold".to_string())],
            ..Default::default()
        };
        let contact = fields.to_contact().unwrap();
        assert_eq!(contact.email(), "jane@example.com");
        assert_eq!(contact.first_name(), "Jane");
        assert_eq!(contact.field_values().get("1"), Some(&json!("Gold")));
    }

    #[test]
    fn test_fields_require_email() {
        let fields = ContactFields {
            first_name: Some("Jane".to_string()),
            ..Default::default()
        };
        assert!(fields.to_contact().is_err());
    }

    #[test]
    fn test_partial_update_body() {
        let fields = ContactFields {
            phone: Some("555".to_string()),
            fields: vec![("2".to_string(), "x".to_string())],
            ..Default::default()
        };
        assert_eq!(
            fields.to_update(),
            json!({"contact": {"phone": "555", "fieldValues": [{"field": "2", "value": "x"}]}})
        );
    }

    #[test]
    fn test_contact_from_body() {
        let enveloped = contact_from_body(&json!({"contact": {"email": "a@b.c"}})).unwrap();
        let bare = contact_from_body(&json!({"email": "a@b.c"})).unwrap();
        assert_eq!(enveloped, bare);
        assert!(contact_from_body(&json!([1])).is_err());
        assert!(contact_from_body(&json!({"first_name": "x"})).is_err());
    }
}
