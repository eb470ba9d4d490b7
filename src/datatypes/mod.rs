//! Column data types and typed values for fixrow
//!
//! Supported types:
//! - int: 32-bit signed integer (4 bytes)
//! - float: 32-bit IEEE-754 float (4 bytes)
//! - bool: boolean (1 byte)
//! - string: fixed-width text (declared width, in bytes)
//!
//! # Design Principles
//!
//! - Closed set of types, every width rule is explicit
//! - Values are immutable once constructed
//! - Text is padded or truncated to its width at construction, never later,
//!   and UTF-8 text is never cut inside a character

mod errors;
mod json;
mod text;
mod types;
mod value;

pub use errors::{ValueError, ValueResult};
pub use json::{value_from_json, value_to_json};
pub use text::{FixedText, TEXT_PAD_BYTE};
pub use types::{DataType, TypeTag, BOOL_WIDTH, FLOAT_WIDTH, INT_WIDTH, MAX_TEXT_WIDTH};
pub use value::Value;
