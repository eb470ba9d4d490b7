//! Schema subsystem for fixrow
//!
//! A schema is the fixed physical layout of a table's records. It owns
//! validation of candidate tuples and the binary codec for records.
//!
//! # Design Principles
//!
//! - Schemas are immutable once constructed
//! - Records are only produced by verification or decoding
//! - Every verified record encodes to exactly `entry_size` bytes
//! - No nulls, defaults, or coercion
//! - Deterministic encoding

mod codec;
mod errors;
mod loader;
mod record;
mod types;
mod validator;

pub use errors::{SchemaError, SchemaErrorCode, SchemaResult, Severity, ValidationDetails};
pub use loader::SchemaLoader;
pub use record::Record;
pub use types::{Column, Schema, TableDefinition};
pub use validator::SchemaValidator;
