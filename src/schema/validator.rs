//! Tuple validation
//!
//! Validation semantics:
//! - The tuple has exactly one value per column
//! - Each value has the declared type of its column
//! - Each value has the declared width of its column (this is what
//!   separates a `string(5)` from a `string(10)`)
//!
//! Forbidden behaviors:
//! - Implicit type coercion
//! - Padding or truncation during validation
//! - Partial validation

use super::errors::{SchemaError, SchemaResult, ValidationDetails};
use super::loader::SchemaLoader;
use super::record::Record;
use super::types::Schema;
use crate::datatypes::Value;

impl Schema {
    /// Verifies that `values` conform to this schema and wraps them in a record.
    ///
    /// # Errors
    ///
    /// Returns `FIXROW_SCHEMA_MISMATCH` if the number of values differs from
    /// the number of columns, or if any value differs from its column in type
    /// or width. The first offending position is reported.
    pub fn verify(&self, values: Vec<Value>) -> SchemaResult<Record> {
        if values.len() != self.column_count() {
            return Err(SchemaError::mismatch(ValidationDetails::arity(
                self.column_count(),
                values.len(),
            )));
        }

        for (pos, (value, (name, declared))) in values.iter().zip(self.columns()).enumerate() {
            let actual = value.data_type();
            if actual.tag() != declared.tag() || actual.width() != declared.width() {
                return Err(SchemaError::mismatch(ValidationDetails::type_mismatch(
                    pos, name, declared, &actual,
                )));
            }
        }

        Ok(Record::new(values))
    }
}

/// Validator that resolves tables through a catalog.
///
/// Validator does not mutate values or schemas.
pub struct SchemaValidator<'a> {
    loader: &'a SchemaLoader,
}

impl<'a> SchemaValidator<'a> {
    /// Creates a new validator backed by the given catalog.
    pub fn new(loader: &'a SchemaLoader) -> Self {
        Self { loader }
    }

    /// Verifies `values` against the schema of `table`.
    ///
    /// # Errors
    ///
    /// Returns `FIXROW_UNKNOWN_TABLE` if the table is not registered, or
    /// `FIXROW_SCHEMA_MISMATCH` (tagged with the table name) if the values
    /// do not conform.
    pub fn validate_tuple(&self, table: &str, values: Vec<Value>) -> SchemaResult<Record> {
        let schema = self.loader.require(table)?;
        schema.verify(values).map_err(|e| e.with_table(table))
    }
}
