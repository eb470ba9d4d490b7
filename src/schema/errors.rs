//! Schema error types
//!
//! Error codes:
//! - FIXROW_SCHEMA_MISMATCH (REJECT)
//! - FIXROW_BUFFER_TOO_SMALL (REJECT)
//! - FIXROW_MALFORMED_SCHEMA (REJECT)
//! - FIXROW_UNKNOWN_COLUMN (REJECT)
//! - FIXROW_UNKNOWN_TABLE (REJECT)
//! - FIXROW_SCHEMA_IMMUTABLE (REJECT)
//! - FIXROW_BUFFER_UNDERRUN (FATAL)

use std::fmt;

use crate::datatypes::DataType;

/// Severity levels for schema errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Caller input rejected, caller may continue
    Reject,
    /// Caller contract violated, the operation stream must stop
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Reject => write!(f, "REJECT"),
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Schema error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaErrorCode {
    /// Values do not conform to the schema (arity, type or width)
    SchemaMismatch,
    /// Decode input shorter than the record size
    BufferUnderrun,
    /// Encode destination shorter than the encoded record
    BufferTooSmall,
    /// Schema or table definition is structurally invalid
    MalformedSchema,
    /// Column index out of range
    UnknownColumn,
    /// Table not present in the catalog
    UnknownTable,
    /// Attempt to redefine a registered table
    SchemaImmutable,
}

impl SchemaErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            SchemaErrorCode::SchemaMismatch => "FIXROW_SCHEMA_MISMATCH",
            SchemaErrorCode::BufferUnderrun => "FIXROW_BUFFER_UNDERRUN",
            SchemaErrorCode::BufferTooSmall => "FIXROW_BUFFER_TOO_SMALL",
            SchemaErrorCode::MalformedSchema => "FIXROW_MALFORMED_SCHEMA",
            SchemaErrorCode::UnknownColumn => "FIXROW_UNKNOWN_COLUMN",
            SchemaErrorCode::UnknownTable => "FIXROW_UNKNOWN_TABLE",
            SchemaErrorCode::SchemaImmutable => "FIXROW_SCHEMA_IMMUTABLE",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        match self {
            SchemaErrorCode::BufferUnderrun => Severity::Fatal,
            _ => Severity::Reject,
        }
    }
}

impl fmt::Display for SchemaErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Mismatch details
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationDetails {
    /// Column position, `None` when the whole tuple is at fault
    pub position: Option<usize>,
    /// Column name if known
    pub column: Option<String>,
    /// Expected type, width or arity
    pub expected: String,
    /// Actual type, width or arity found
    pub actual: String,
}

impl ValidationDetails {
    pub fn new(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self {
            position: None,
            column: None,
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn arity(expected: usize, actual: usize) -> Self {
        Self::new(
            format!("{} values", expected),
            format!("{} values", actual),
        )
    }

    pub fn type_mismatch(
        position: usize,
        column: impl Into<String>,
        expected: &DataType,
        actual: &DataType,
    ) -> Self {
        Self {
            position: Some(position),
            column: Some(column.into()),
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}

impl fmt::Display for ValidationDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.position, &self.column) {
            (Some(pos), Some(name)) => write!(f, "column {} '{}': ", pos, name)?,
            (Some(pos), None) => write!(f, "column {}: ", pos)?,
            _ => write!(f, "tuple: ")?,
        }
        write!(f, "expected {}, got {}", self.expected, self.actual)
    }
}

/// Schema error type with full context
#[derive(Debug, Clone)]
pub struct SchemaError {
    code: SchemaErrorCode,
    message: String,
    table: Option<String>,
    details: Option<ValidationDetails>,
}

impl SchemaError {
    fn new(code: SchemaErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            table: None,
            details: None,
        }
    }

    /// Create a schema mismatch error
    pub fn mismatch(details: ValidationDetails) -> Self {
        Self {
            code: SchemaErrorCode::SchemaMismatch,
            message: format!("Values don't conform to the schema: {}", details),
            table: None,
            details: Some(details),
        }
    }

    /// Create a buffer underrun error (FATAL)
    pub fn buffer_underrun(required: usize, available: usize) -> Self {
        Self {
            details: Some(ValidationDetails::new(
                format!("{} bytes", required),
                format!("{} bytes", available),
            )),
            ..Self::new(
                SchemaErrorCode::BufferUnderrun,
                format!(
                    "Record buffer too short: need {} bytes, have {}",
                    required, available
                ),
            )
        }
    }

    /// Create a buffer too small error
    pub fn buffer_too_small(required: usize, available: usize) -> Self {
        Self {
            details: Some(ValidationDetails::new(
                format!("{} bytes", required),
                format!("{} bytes", available),
            )),
            ..Self::new(
                SchemaErrorCode::BufferTooSmall,
                format!(
                    "Destination buffer too small: need {} bytes, have {}",
                    required, available
                ),
            )
        }
    }

    /// Create a malformed schema error
    pub fn malformed_schema(reason: impl Into<String>) -> Self {
        Self::new(
            SchemaErrorCode::MalformedSchema,
            format!("Malformed schema: {}", reason.into()),
        )
    }

    /// Create an error for a malformed table definition file
    pub fn malformed_file(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(
            SchemaErrorCode::MalformedSchema,
            format!("Malformed table definition '{}': {}", path.into(), reason.into()),
        )
    }

    /// Create an unknown column error
    pub fn unknown_column(index: usize, column_count: usize) -> Self {
        Self::new(
            SchemaErrorCode::UnknownColumn,
            format!(
                "Column {} out of range for a schema of {} columns",
                index, column_count
            ),
        )
    }

    /// Create an unknown table error
    pub fn unknown_table(table: impl Into<String>) -> Self {
        let table = table.into();
        Self {
            table: Some(table.clone()),
            ..Self::new(
                SchemaErrorCode::UnknownTable,
                format!("Table '{}' not found", table),
            )
        }
    }

    /// Create a schema immutable error
    pub fn schema_immutable(table: impl Into<String>) -> Self {
        let table = table.into();
        Self {
            table: Some(table.clone()),
            ..Self::new(
                SchemaErrorCode::SchemaImmutable,
                format!("Table '{}' is already defined", table),
            )
        }
    }

    /// Attaches the table the failing operation ran against
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Returns the error code
    pub fn code(&self) -> SchemaErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the table name if applicable
    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    /// Returns mismatch details if applicable
    pub fn details(&self) -> Option<&ValidationDetails> {
        self.details.as_ref()
    }

    /// Returns whether this is a fatal error
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.code.severity(), self.code.code(), self.message)?;
        if let Some(ref table) = self.table {
            write!(f, " (table '{}')", table)?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaError {}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;
