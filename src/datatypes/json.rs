//! Conversion between JSON scalars and typed values
//!
//! Conversion follows the JSON type, not the target column:
//! - integer number -> int (must fit 32 bits)
//! - non-integer number -> float
//! - bool -> bool
//! - string -> text, sized to the target column when it is a text column
//!
//! There is no numeric coercion: `1` is an int even when the target
//! column is a float. Schema verification rejects such values.

use serde_json::Value as JsonValue;

use super::errors::{ValueError, ValueResult};
use super::text::FixedText;
use super::types::DataType;
use super::value::Value;

/// Builds a value from a JSON scalar.
///
/// `target` is the declared type of the column the value is meant for.
/// It only decides the width of text values.
pub fn value_from_json(json: &JsonValue, target: Option<&DataType>) -> ValueResult<Value> {
    match json {
        JsonValue::Bool(b) => Ok(Value::Bool(*b)),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                return i32::try_from(i)
                    .map(Value::Int)
                    .map_err(|_| ValueError::IntOutOfRange(i));
            }
            if n.is_u64() {
                return Err(ValueError::UnrepresentableNumber(n.to_string()));
            }
            let f = n
                .as_f64()
                .ok_or_else(|| ValueError::UnrepresentableNumber(n.to_string()))?;
            let narrowed = f as f32;
            if narrowed.is_infinite() {
                return Err(ValueError::UnrepresentableNumber(n.to_string()));
            }
            Ok(Value::Float(narrowed))
        }
        JsonValue::String(s) => match target {
            Some(DataType::String { width }) => Ok(Value::text(s, *width)),
            _ => Ok(Value::String(FixedText::from_bytes(s.as_bytes()))),
        },
        other => Err(ValueError::UnsupportedJsonType(json_type_name(other))),
    }
}

/// Renders a value as a JSON scalar.
///
/// Text is rendered without trailing pad bytes and with invalid UTF-8
/// replaced by U+FFFD. NaN and infinite floats have no JSON form and render
/// as null.
pub fn value_to_json(value: &Value) -> JsonValue {
    match value {
        Value::Int(n) => JsonValue::from(*n),
        Value::Float(n) => JsonValue::from(f64::from(*n)),
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::String(text) => JsonValue::String(text.trimmed().into_owned()),
    }
}

fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
