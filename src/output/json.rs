//
//  activecampaign
//  output/json.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # JSON Output
//!
//! Pretty-printed JSON is the `--json` format and the fallback for values
//! that have no table shape. Output is exactly what the API returned after
//! unwrapping, so it can be piped into `jq`.

use serde::Serialize;
use std::io::Write;

/// Writes `value` as pretty JSON to stdout.
pub fn write_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write_json_to(&mut handle, value)
}

/// Writes `value` as pretty JSON followed by a newline.
pub fn write_json_to<W: Write, T: Serialize + ?Sized>(
    writer: &mut W,
    value: &T,
) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}

/// Renders `value` as pretty JSON without a trailing newline.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_write_json_to_buffer() {
        let mut buffer = Vec::new();
        write_json_to(&mut buffer, &json!({"id": "1"})).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "{\n  \"id\": \"1\"\n}\n");
    }

    #[test]
    fn test_render_null() {
        assert_eq!(render_json(&serde_json::Value::Null).unwrap(), "null");
    }
}
