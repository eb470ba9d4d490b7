//! Schema and table definition types
//!
//! A [`Schema`] fixes the physical layout of every record of a table:
//!
//! ```text
//! +-----------+-----------+-----+-------------+
//! | column 0  | column 1  | ... | column n-1  |
//! | width(t0) | width(t1) |     | width(tn-1) |
//! +-----------+-----------+-----+-------------+
//!   size = width(t0) + width(t1) + ... + width(tn-1)
//! ```
//!
//! Columns are packed with no alignment padding between them.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::errors::{SchemaError, SchemaResult};
use crate::datatypes::{DataType, MAX_TEXT_WIDTH};

/// A named, typed column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name
    pub name: String,
    /// Declared type
    #[serde(flatten)]
    pub data_type: DataType,
}

impl Column {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }

    pub fn int(name: impl Into<String>) -> Self {
        Self::new(name, DataType::Int)
    }

    pub fn float(name: impl Into<String>) -> Self {
        Self::new(name, DataType::Float)
    }

    pub fn bool(name: impl Into<String>) -> Self {
        Self::new(name, DataType::Bool)
    }

    pub fn string(name: impl Into<String>, width: usize) -> Self {
        Self::new(name, DataType::string(width))
    }
}

/// Physical layout of a table's records.
///
/// Immutable once built. Every record of the table occupies exactly
/// [`entry_size`](Self::entry_size) bytes.
#[derive(Debug, Clone)]
pub struct Schema {
    names: Vec<String>,
    types: Vec<DataType>,
    offsets: Vec<usize>,
    size: usize,
}

impl Schema {
    /// Creates a schema from parallel lists of names and types.
    ///
    /// # Errors
    ///
    /// Returns `FIXROW_MALFORMED_SCHEMA` if the lists differ in length, or a
    /// text column declares a width of zero or more than [`MAX_TEXT_WIDTH`].
    pub fn new(names: Vec<String>, types: Vec<DataType>) -> SchemaResult<Self> {
        if names.len() != types.len() {
            return Err(SchemaError::malformed_schema(format!(
                "{} column names for {} column types",
                names.len(),
                types.len()
            )));
        }

        if let Some(pos) = types
            .iter()
            .position(|t| matches!(t, DataType::String { width: 0 }))
        {
            return Err(SchemaError::malformed_schema(format!(
                "column {} '{}' declares a zero-width string",
                pos, names[pos]
            )));
        }

        if let Some(pos) = types
            .iter()
            .position(|t| matches!(t, DataType::String { width } if *width > MAX_TEXT_WIDTH))
        {
            return Err(SchemaError::malformed_schema(format!(
                "column {} '{}' declares {}, wider than the {}-byte limit",
                pos, names[pos], types[pos], MAX_TEXT_WIDTH
            )));
        }

        let mut offsets = Vec::with_capacity(types.len());
        let mut size = 0usize;
        for t in &types {
            offsets.push(size);
            size = size.checked_add(t.width()).ok_or_else(|| {
                SchemaError::malformed_schema("record size overflows the address space")
            })?;
        }

        Ok(Self {
            names,
            types,
            offsets,
            size,
        })
    }

    /// Creates a schema from columns in declaration order
    pub fn from_columns(columns: impl IntoIterator<Item = Column>) -> SchemaResult<Self> {
        let (names, types) = columns
            .into_iter()
            .map(|c| (c.name, c.data_type))
            .unzip();
        Self::new(names, types)
    }

    /// Returns the physical size in bytes of a record of this schema
    pub fn entry_size(&self) -> usize {
        self.size
    }

    /// Returns the column names in order
    pub fn field_names(&self) -> &[String] {
        &self.names
    }

    /// Returns the declared column types in order
    pub fn field_types(&self) -> &[DataType] {
        &self.types
    }

    /// Returns the number of columns
    pub fn column_count(&self) -> usize {
        self.types.len()
    }

    /// Iterates over `(name, type)` pairs in order
    pub fn columns(&self) -> impl Iterator<Item = (&str, &DataType)> + '_ {
        self.names.iter().map(String::as_str).zip(self.types.iter())
    }

    /// Returns owned column definitions
    pub fn to_columns(&self) -> Vec<Column> {
        self.columns()
            .map(|(name, data_type)| Column::new(name, *data_type))
            .collect()
    }

    /// Returns the byte offset of column `index` within a record
    pub fn column_offset(&self, index: usize) -> Option<usize> {
        self.offsets.get(index).copied()
    }

    /// Returns the position of the first column called `name`
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }
}

/// Schemas are equal when their column types match position by position.
/// Text columns must also agree on width. Column names are not compared.
impl PartialEq for Schema {
    fn eq(&self, other: &Self) -> bool {
        self.types.len() == other.types.len()
            && self
                .types
                .iter()
                .zip(other.types.iter())
                .all(|(mine, theirs)| mine.tag() == theirs.tag() && mine.width() == theirs.width())
    }
}

impl Eq for Schema {}

/// Serialized table definition
///
/// ```text
/// {
///   "table": "users",
///   "columns": [
///     {"name": "id", "type": "int"},
///     {"name": "tag", "type": "string", "width": 3}
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDefinition {
    /// Table name, unique within a catalog
    pub table: String,
    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Columns in record order
    pub columns: Vec<Column>,
}

impl TableDefinition {
    pub fn new(table: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            table: table.into(),
            description: None,
            columns,
        }
    }

    /// Describes an existing schema under `table`
    pub fn from_schema(table: impl Into<String>, schema: &Schema) -> Self {
        Self::new(table, schema.to_columns())
    }

    /// Validates the definition itself (not a record)
    pub fn validate_structure(&self) -> Result<(), String> {
        if self.table.trim().is_empty() {
            return Err("table name must not be empty".into());
        }

        let mut seen = HashSet::new();
        for column in &self.columns {
            if column.name.is_empty() {
                return Err("column names must not be empty".into());
            }
            if !seen.insert(column.name.as_str()) {
                return Err(format!("duplicate column '{}'", column.name));
            }
        }

        Ok(())
    }

    /// Validates and builds the schema
    pub fn to_schema(&self) -> SchemaResult<Schema> {
        self.validate_structure()
            .map_err(|e| SchemaError::malformed_schema(e).with_table(self.table.clone()))?;
        Schema::from_columns(self.columns.iter().cloned())
            .map_err(|e| e.with_table(self.table.clone()))
    }
}
