//
//  activecampaign
//  cli/field.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Contact custom field commands

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::output::Column;

use super::{GlobalOptions, ParamArgs};

const FIELD_COLUMNS: &[Column] = &[
    Column::new("ID", "id"),
    Column::new("Title", "title"),
    Column::new("Type", "type"),
    Column::new("Tag", "perstag"),
];

/// Manage contact custom fields
#[derive(Args, Debug)]
pub struct FieldCommand {
    #[command(subcommand)]
    pub command: FieldSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum FieldSubcommand {
    /// List custom fields
    #[command(visible_alias = "ls")]
    List(ListArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub params: ParamArgs,
}

impl FieldCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            FieldSubcommand::List(args) => {
                let client = global.client()?;
                let fields = client.list_custom_fields(&args.params.query()).await?;
                global.output().write(&fields, FIELD_COLUMNS)
            }
        }
    }
}
