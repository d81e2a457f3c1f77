//
//  activecampaign
//  cli/connection.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! E-commerce connection commands
//!
//! `ac connection customers` uses the account's `connection_id` (or
//! `--connection-id` / `AC_CONNECTION_ID`) when no id is given.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::output::Column;

use super::{envelope, BodyArgs, GlobalOptions, ParamArgs};

const CONNECTION_KEY: &str = "connection";

const CONNECTION_COLUMNS: &[Column] = &[
    Column::new("ID", "id"),
    Column::new("Service", "service"),
    Column::new("External ID", "externalid"),
    Column::new("Name", "name"),
    Column::new("Status", "status"),
];

const CUSTOMER_COLUMNS: &[Column] = &[
    Column::new("ID", "id"),
    Column::new("Email", "email"),
    Column::new("External ID", "externalid"),
    Column::new("Orders", "totalOrders"),
];

/// Manage e-commerce connections
#[derive(Args, Debug)]
pub struct ConnectionCommand {
    #[command(subcommand)]
    pub command: ConnectionSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConnectionSubcommand {
    /// List connections
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// View a connection
    Get(GetArgs),

    /// Create a connection
    Create(CreateArgs),

    /// Update a connection
    Update(UpdateArgs),

    /// List the customers of a connection
    Customers(CustomersArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub params: ParamArgs,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Connection id
    pub id: String,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    #[command(flatten)]
    pub body: BodyArgs,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Connection id
    pub id: String,

    #[command(flatten)]
    pub body: BodyArgs,
}

#[derive(Args, Debug)]
pub struct CustomersArgs {
    /// Connection id (defaults to the configured connection)
    pub id: Option<String>,

    #[command(flatten)]
    pub params: ParamArgs,
}

impl ConnectionCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ConnectionSubcommand::List(args) => self.list(args, global).await,
            ConnectionSubcommand::Get(args) => self.get(args, global).await,
            ConnectionSubcommand::Create(args) => self.create(args, global).await,
            ConnectionSubcommand::Update(args) => self.update(args, global).await,
            ConnectionSubcommand::Customers(args) => self.customers(args, global).await,
        }
    }

    async fn list(&self, args: &ListArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let connections = client.list_connections(&args.params.query()).await?;
        global.output().write(&connections, CONNECTION_COLUMNS)
    }

    async fn get(&self, args: &GetArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let connection = client.get_connection(&args.id).await?;
        global.output().write(&connection, &[])
    }

    async fn create(&self, args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
        let body = envelope(CONNECTION_KEY, args.body.require()?);
        let client = global.client()?;
        let connection = client.create_connection(&body).await?;
        global.output().write(&connection, &[])
    }

    async fn update(&self, args: &UpdateArgs, global: &GlobalOptions) -> Result<()> {
        let body = envelope(CONNECTION_KEY, args.body.require()?);
        let client = global.client()?;
        let connection = client.update_connection(&args.id, &body).await?;
        global.output().write(&connection, &[])
    }

    async fn customers(&self, args: &CustomersArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let response = client
            .get_connection_customers(args.id.as_deref(), &args.params.query())
            .await?;

        if global.json {
            return global.output().write(&response, &[]);
        }

        let customers = response
            .get("ecomCustomers")
            .cloned()
            .unwrap_or(response);
        global.output().write(&customers, CUSTOMER_COLUMNS)
    }
}
