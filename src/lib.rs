//! fixrow - fixed-length binary records described by typed schemas
//!
//! A [`Schema`] fixes the column types and total width of a record. Candidate
//! values become a [`Record`] only through [`Schema::verify`] or
//! [`Schema::decode`], so every record in hand conforms to its schema.

pub mod cli;
pub mod datatypes;
pub mod observability;
pub mod schema;

pub use datatypes::{DataType, FixedText, TypeTag, Value};
pub use schema::{Column, Record, Schema, SchemaError, SchemaErrorCode, SchemaResult};
