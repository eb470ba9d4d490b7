//! Declared column types
//!
//! A [`DataType`] is what a schema declares for a column. Numeric and
//! boolean widths are fixed by the type; text carries its declared width.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Width of an int column in bytes
pub const INT_WIDTH: usize = 4;

/// Width of a float column in bytes
pub const FLOAT_WIDTH: usize = 4;

/// Width of a bool column in bytes
pub const BOOL_WIDTH: usize = 1;

/// Largest width a text column may declare, in bytes
pub const MAX_TEXT_WIDTH: usize = 65_535;

/// Type discriminant without width information
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Int,
    Float,
    Bool,
    String,
}

impl TypeTag {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            TypeTag::Int => "int",
            TypeTag::Float => "float",
            TypeTag::Bool => "bool",
            TypeTag::String => "string",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

/// Declared type of a column.
///
/// Serialized the way table definitions spell it:
///
/// ```text
/// {"type": "int"}
/// {"type": "string", "width": 16}
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DataType {
    /// 32-bit signed integer, big-endian on disk
    Int,
    /// 32-bit IEEE-754 float, big-endian on disk
    Float,
    /// Single byte, 0x01 for true
    Bool,
    /// Fixed-width text
    String {
        /// Declared width in bytes
        width: usize,
    },
}

impl DataType {
    /// Declares a text column of `width` bytes
    pub fn string(width: usize) -> Self {
        DataType::String { width }
    }

    /// Returns the width-less discriminant
    pub fn tag(&self) -> TypeTag {
        match self {
            DataType::Int => TypeTag::Int,
            DataType::Float => TypeTag::Float,
            DataType::Bool => TypeTag::Bool,
            DataType::String { .. } => TypeTag::String,
        }
    }

    /// Returns the number of bytes a value of this type occupies in a record
    pub fn width(&self) -> usize {
        match self {
            DataType::Int => INT_WIDTH,
            DataType::Float => FLOAT_WIDTH,
            DataType::Bool => BOOL_WIDTH,
            DataType::String { width } => *width,
        }
    }

    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        self.tag().type_name()
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::String { width } => write!(f, "string({})", width),
            other => write!(f, "{}", other.type_name()),
        }
    }
}
