//
//  activecampaign
//  cli/tag.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Tag commands. Tags are applied with `ac contact tag`.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::output::Column;

use super::{GlobalOptions, ParamArgs};

const TAG_COLUMNS: &[Column] = &[
    Column::new("ID", "id"),
    Column::new("Tag", "tag"),
    Column::new("Type", "tagType"),
    Column::new("Description", "description"),
];

/// Manage tags
#[derive(Args, Debug)]
pub struct TagCommand {
    #[command(subcommand)]
    pub command: TagSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum TagSubcommand {
    /// List tags
    #[command(visible_alias = "ls")]
    List(ListArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Filter by tag name
    #[arg(long, short = 's')]
    pub search: Option<String>,

    #[command(flatten)]
    pub params: ParamArgs,
}

impl TagCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            TagSubcommand::List(args) => {
                let client = global.client()?;

                let mut query = args.params.query();
                if let Some(search) = &args.search {
                    query.insert("search", search);
                }

                let tags = client.list_tags(&query).await?;
                global.output().write(&tags, TAG_COLUMNS)
            }
        }
    }
}
