//! Line-oriented JSON I/O for the CLI
//!
//! - Input: one item per line (JSON array or base64 record), blank lines skipped
//! - Output: one JSON object per line
//! - UTF-8 only

use std::io::{BufRead, Write};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde_json::Value as JsonValue;

use super::errors::{CliError, CliResult};
use crate::datatypes::{value_from_json, value_to_json, Value};
use crate::schema::{Record, Schema};

/// Iterate over non-blank input lines
pub fn read_lines<R: BufRead>(input: R) -> impl Iterator<Item = CliResult<String>> {
    input.lines().filter_map(|line| match line {
        Ok(line) if line.trim().is_empty() => None,
        Ok(line) => Some(Ok(line)),
        Err(e) => Some(Err(CliError::from(e))),
    })
}

/// Write a success response
pub fn write_response<W: Write>(output: &mut W, data: JsonValue) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "ok",
        "data": data
    });

    serde_json::to_writer(&mut *output, &response)?;
    writeln!(output)?;
    output.flush()?;

    Ok(())
}

/// Write an error response
pub fn write_error<W: Write>(output: &mut W, code: &str, message: &str) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "error",
        "code": code,
        "message": message
    });

    serde_json::to_writer(&mut *output, &response)?;
    writeln!(output)?;
    output.flush()?;

    Ok(())
}

/// Parse a JSON array line into candidate values for `schema`.
///
/// Text values take the width of the column at their position.
pub fn parse_tuple(line: &str, schema: &Schema) -> CliResult<Vec<Value>> {
    let json: JsonValue = serde_json::from_str(line)
        .map_err(|e| CliError::invalid_input(format!("Invalid JSON: {}", e)))?;

    let items = json
        .as_array()
        .ok_or_else(|| CliError::invalid_input("Expected a JSON array of column values"))?;

    items
        .iter()
        .enumerate()
        .map(|(pos, item)| {
            value_from_json(item, schema.field_types().get(pos))
                .map_err(|e| CliError::invalid_input(format!("column {}: {}", pos, e)))
        })
        .collect()
}

/// Render a record as a JSON array
pub fn tuple_to_json(record: &Record) -> JsonValue {
    JsonValue::Array(record.iter().map(value_to_json).collect())
}

/// Encode record bytes for output
pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode a base64 input line
pub fn decode_base64(line: &str) -> CliResult<Vec<u8>> {
    STANDARD
        .decode(line.trim())
        .map_err(|e| CliError::invalid_input(format!("Invalid base64: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Column;
    use std::io::Cursor;

    fn sample() -> Schema {
        Schema::from_columns([
            Column::int("id"),
            Column::bool("active"),
            Column::string("tag", 3),
        ])
        .unwrap()
    }

    #[test]
    fn test_read_lines_skips_blank() {
        let input = Cursor::new("[1]\n\n  \n[2]\n");
        let lines: Vec<String> = read_lines(input).map(Result::unwrap).collect();
        assert_eq!(lines, vec!["[1]", "[2]"]);
    }

    #[test]
    fn test_parse_tuple_pads_text() {
        let values = parse_tuple(r#"[42, false, "ab"]"#, &sample()).unwrap();
        assert_eq!(values, vec![Value::Int(42), Value::Bool(false), Value::text("ab", 3)]);
    }

    #[test]
    fn test_parse_tuple_rejects_non_array() {
        let err = parse_tuple(r#"{"id": 1}"#, &sample()).unwrap_err();
        assert!(!err.is_fatal());
        assert_eq!(err.code_str(), "FIXROW_CLI_INVALID_INPUT");
    }

    #[test]
    fn test_parse_tuple_reports_column() {
        let err = parse_tuple(r#"[null, true, "x"]"#, &sample()).unwrap_err();
        assert!(err.message().starts_with("column 0"));
    }

    #[test]
    fn test_response_lines() {
        let mut out = Vec::new();
        write_response(&mut out, serde_json::json!({"valid": true})).unwrap();
        write_error(&mut out, "CODE", "bad").unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();

        let ok: JsonValue = serde_json::from_str(lines.next().unwrap()).unwrap();
        assert_eq!(ok["status"], "ok");
        assert_eq!(ok["data"]["valid"], true);

        let err: JsonValue = serde_json::from_str(lines.next().unwrap()).unwrap();
        assert_eq!(err["status"], "error");
        assert_eq!(err["code"], "CODE");
    }

    #[test]
    fn test_base64() {
        let bytes = [0x00, 0x00, 0x00, 0x2A, 0x01, 0x61, 0x62, 0x63];
        let encoded = encode_base64(&bytes);
        assert_eq!(encoded, "AAAAKgFhYmM=");
        assert_eq!(decode_base64(&encoded).unwrap(), bytes);
        assert!(decode_base64("***").is_err());
    }
}
