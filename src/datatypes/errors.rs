//! # Value Errors
//!
//! Errors raised while building values from external input.

use thiserror::Error;

/// Result type for value conversions
pub type ValueResult<T> = Result<T, ValueError>;

/// Value conversion errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValueError {
    /// Integer does not fit in 32 bits
    #[error("Integer {0} out of range for a 4-byte column")]
    IntOutOfRange(i64),

    /// Number cannot be represented
    #[error("Number {0} is not representable")]
    UnrepresentableNumber(String),

    /// JSON type has no column counterpart
    #[error("Unsupported value of JSON type '{0}'")]
    UnsupportedJsonType(&'static str),
}
