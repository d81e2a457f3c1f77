//
//  activecampaign
//  cli/ecommerce.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! E-commerce customer and order commands
//!
//! Bodies follow the API shapes and are wrapped in `ecomCustomer` /
//! `ecomOrder` when given bare:
//!
//! ```bash
//! ac customer create --data '{"connectionid": "1", "externalid": "56789", "email": "jane@example.com"}'
//! ac order create --file order.json
//! ```

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::output::Column;

use super::{envelope, BodyArgs, GlobalOptions, ParamArgs};

const CUSTOMER_KEY: &str = "ecomCustomer";
const ORDER_KEY: &str = "ecomOrder";

const CUSTOMER_COLUMNS: &[Column] = &[
    Column::new("ID", "id"),
    Column::new("Email", "email"),
    Column::new("Connection", "connectionid"),
    Column::new("External ID", "externalid"),
];

const ORDER_COLUMNS: &[Column] = &[
    Column::new("ID", "id"),
    Column::new("External ID", "externalid"),
    Column::new("Email", "email"),
    Column::new("Total", "totalPrice"),
    Column::new("Currency", "currency"),
    Column::new("Date", "orderDate"),
];

/// Manage e-commerce customers
#[derive(Args, Debug)]
pub struct CustomerCommand {
    #[command(subcommand)]
    pub command: CustomerSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum CustomerSubcommand {
    /// List customers
    #[command(visible_alias = "ls")]
    List(CustomerListArgs),

    /// Create a customer
    Create(CreateArgs),
}

#[derive(Args, Debug)]
pub struct CustomerListArgs {
    /// Filter by email
    #[arg(long, short = 'e')]
    pub email: Option<String>,

    #[command(flatten)]
    pub params: ParamArgs,
}

/// Manage e-commerce orders
#[derive(Args, Debug)]
pub struct OrderCommand {
    #[command(subcommand)]
    pub command: OrderSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum OrderSubcommand {
    /// List orders
    #[command(visible_alias = "ls")]
    List(OrderListArgs),

    /// Create an order
    Create(CreateArgs),
}

#[derive(Args, Debug)]
pub struct OrderListArgs {
    #[command(flatten)]
    pub params: ParamArgs,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    #[command(flatten)]
    pub body: BodyArgs,
}

impl CustomerCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let output = global.output();

        match &self.command {
            CustomerSubcommand::List(args) => {
                let mut query = args.params.query();
                if let Some(email) = &args.email {
                    query.insert("filters[email]", email);
                }
                let customers = client.list_customers(&query).await?;
                output.write(&customers, CUSTOMER_COLUMNS)
            }
            CustomerSubcommand::Create(args) => {
                let body = envelope(CUSTOMER_KEY, args.body.require()?);
                let customer = client.create_customer(&body).await?;
                output.write(&customer, &[])
            }
        }
    }
}

impl OrderCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let output = global.output();

        match &self.command {
            OrderSubcommand::List(args) => {
                let orders = client.list_orders(&args.params.query()).await?;
                output.write(&orders, ORDER_COLUMNS)
            }
            OrderSubcommand::Create(args) => {
                let body = envelope(ORDER_KEY, args.body.require()?);
                let response = client.create_order(&body).await?;
                if global.json {
                    output.write(&response, &[])
                } else {
                    let order = response.get(ORDER_KEY).cloned().unwrap_or(response);
                    output.write(&order, &[])
                }
            }
        }
    }
}
