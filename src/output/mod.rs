//
//  activecampaign
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Formatting
//!
//! Formatting for CLI output. Every command produces one [`serde_json::Value`]
//! and hands it to an [`OutputWriter`], which prints it either as pretty JSON
//! (`--json`) or in a human-readable form:
//!
//! - arrays of objects as a table of the command's [`Column`]s
//! - a single object as `key: value` lines
//! - scalars on their own
//!
//! Status and error messages go through the `write_*` helpers so they pick
//! up terminal colors.

mod json;
mod table;

pub use json::*;
pub use table::*;

use console::style;
use serde_json::Value;

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Tables and `key: value` lines
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Writes command results in the selected [`OutputFormat`].
pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
        }
    }

    pub fn json() -> Self {
        Self::new(OutputFormat::Json)
    }

    pub fn table() -> Self {
        Self::new(OutputFormat::Table)
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Renders `value` to a string without printing it.
    ///
    /// `columns` is only used for arrays in table format. When it is empty,
    /// arrays fall back to JSON.
    pub fn render(&self, value: &Value, columns: &[Column]) -> anyhow::Result<String> {
        if self.format == OutputFormat::Json {
            return render_json(value);
        }

        match value {
            Value::Array(items) if items.is_empty() => Ok("No results".to_string()),
            Value::Array(items) if !columns.is_empty() => Ok(TableBuilder::new()
                .color(self.color)
                .columns(columns)
                .records(items)
                .build()
                .to_string()),
            Value::Object(map) => Ok(map
                .iter()
                .map(|(key, value)| format_field(key, &cell_text(value), self.color))
                .collect::<Vec<_>>()
                .join("\n")),
            Value::Null => Ok(String::new()),
            Value::String(s) => Ok(s.clone()),
            other => render_json(other),
        }
    }

    /// Prints `value`; see [`OutputWriter::render`].
    pub fn write(&self, value: &Value, columns: &[Column]) -> anyhow::Result<()> {
        let rendered = self.render(value, columns)?;
        if !rendered.is_empty() {
            println!("{}", rendered);
        }
        Ok(())
    }

    pub fn write_success(&self, msg: &str) {
        if self.color {
            println!("{} {}", style("✓").green().bold(), msg);
        } else {
            println!("✓ {}", msg);
        }
    }
}

/// Formats a `key: value` line, dimming the key when colored.
pub fn format_field(key: &str, value: &str, color: bool) -> String {
    if color {
        format!("{}: {}", style(key).dim(), value)
    } else {
        format!("{}: {}", key, value)
    }
}
