//! Typed scalar values

use std::fmt;

use super::text::FixedText;
use super::types::{DataType, TypeTag};

/// A single typed value.
///
/// Each value knows its tag and its width. For text the width is the
/// width the value was built with, which must match the column it is
/// stored in.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i32),
    Float(f32),
    Bool(bool),
    String(FixedText),
}

impl Value {
    /// Builds a text value of exactly `width` bytes (padded or truncated)
    pub fn text(content: impl AsRef<[u8]>, width: usize) -> Self {
        Value::String(FixedText::new(content, width))
    }

    /// Returns the width-less type discriminant
    pub fn tag(&self) -> TypeTag {
        match self {
            Value::Int(_) => TypeTag::Int,
            Value::Float(_) => TypeTag::Float,
            Value::Bool(_) => TypeTag::Bool,
            Value::String(_) => TypeTag::String,
        }
    }

    /// Returns the byte width of this value
    pub fn width(&self) -> usize {
        self.data_type().width()
    }

    /// Returns the declared type this value would satisfy
    pub fn data_type(&self) -> DataType {
        match self {
            Value::Int(_) => DataType::Int,
            Value::Float(_) => DataType::Float,
            Value::Bool(_) => DataType::Bool,
            Value::String(text) => DataType::String {
                width: text.width(),
            },
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&FixedText> {
        match self {
            Value::String(text) => Some(text),
            _ => None,
        }
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<FixedText> for Value {
    fn from(text: FixedText) -> Self {
        Value::String(text)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
            Value::String(text) => write!(f, "'{}'", text),
        }
    }
}
