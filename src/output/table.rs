//
//  activecampaign
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Table Output
//!
//! Renders lists of API records as tables using [`comfy_table`]. Records are
//! untyped JSON objects, so each list command names the [`Column`]s it wants
//! and cells are read by key.
//!
//! ```rust
//! use activecampaign::output::{Column, TableBuilder};
//! use serde_json::json;
//!
//! let contacts = vec![json!({"id": "1", "email": "jane@example.com"})];
//! let table = TableBuilder::new()
//!     .color(false)
//!     .columns(&[Column::new("ID", "id"), Column::new("Email", "email")])
//!     .records(&contacts)
//!     .build();
//! assert!(table.to_string().contains("jane@example.com"));
//! ```

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use serde_json::Value;

/// Cells longer than this are truncated.
pub const MAX_CELL_WIDTH: usize = 60;

/// A table column: the header shown and the record key it reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub header: &'static str,
    pub key: &'static str,
}

impl Column {
    pub const fn new(header: &'static str, key: &'static str) -> Self {
        Self { header, key }
    }
}

/// Creates a table with the UTF8 preset and dynamic width.
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Builder for record tables.
pub struct TableBuilder {
    table: Table,
    columns: Vec<Column>,
    color: bool,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            table: create_table(),
            columns: Vec::new(),
            color: console::colors_enabled(),
        }
    }

    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    /// Sets the columns and the header row.
    pub fn columns(mut self, columns: &[Column]) -> Self {
        self.columns = columns.to_vec();
        if self.color {
            let header_cells: Vec<Cell> = self
                .columns
                .iter()
                .map(|c| Cell::new(c.header).fg(Color::Cyan))
                .collect();
            self.table.set_header(header_cells);
        } else {
            let headers: Vec<&str> = self.columns.iter().map(|c| c.header).collect();
            self.table.set_header(headers);
        }
        self
    }

    /// Adds one row per record, reading each column's key.
    pub fn records<'a, I>(mut self, records: I) -> Self
    where
        I: IntoIterator<Item = &'a Value>,
    {
        for record in records {
            let row: Vec<String> = self
                .columns
                .iter()
                .map(|column| cell_text(record.get(column.key).unwrap_or(&Value::Null)))
                .collect();
            self.table.add_row(row);
        }
        self
    }

    pub fn print(self) {
        println!("{}", self.table);
    }

    pub fn build(self) -> Table {
        self.table
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Text for a single cell.
///
/// Strings are shown bare, `null` as an empty cell, and nested values as
/// compact JSON. Long text is truncated to [`MAX_CELL_WIDTH`].
pub fn cell_text(value: &Value) -> String {
    let text = match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    truncate(&text, MAX_CELL_WIDTH)
}

/// Deal status codes as words: `0` open, `1` won, `2` lost.
pub fn format_deal_status(status: &str, color: bool) -> String {
    let label = match status {
        "0" => "open",
        "1" => "won",
        "2" => "lost",
        other => other,
    };

    if !color {
        return label.to_string();
    }

    use console::style;
    match label {
        "open" => style(label).green().to_string(),
        "won" => style(label).blue().to_string(),
        "lost" => style(label).red().to_string(),
        _ => label.to_string(),
    }
}

/// Truncates to `max_len` characters, ending in `...` when cut.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    } else {
        s.chars().take(max_len).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("héllo wörld", 8), "héllo...");
        assert_eq!(truncate("hello", 2), "he");
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(&json!("a")), "a");
        assert_eq!(cell_text(&Value::Null), "");
        assert_eq!(cell_text(&json!(42)), "42");
        assert_eq!(cell_text(&json!({"self": "x"})), r#"{"self":"x"}"#);
        assert_eq!(cell_text(&json!("x".repeat(100))).chars().count(), MAX_CELL_WIDTH);
    }

    #[test]
    fn test_format_deal_status() {
        assert_eq!(format_deal_status("0", false), "open");
        assert_eq!(format_deal_status("1", false), "won");
        assert_eq!(format_deal_status("2", false), "lost");
        assert_eq!(format_deal_status("9", false), "9");
    }

    #[test]
    fn test_records_missing_keys() {
        let rows = vec![json!({"id": "1"}), json!({"id": "2", "name": "Acme"})];
        let rendered = TableBuilder::new()
            .color(false)
            .columns(&[Column::new("ID", "id"), Column::new("Name", "name")])
            .records(&rows)
            .build()
            .to_string();

        assert!(rendered.contains("ID"));
        assert!(rendered.contains("Acme"));
        assert_eq!(rendered.lines().filter(|l| l.contains('│')).count(), 3);
    }
}
