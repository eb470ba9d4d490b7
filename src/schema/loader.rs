//! Schema catalog loaded from table definition files
//!
//! - One file per table: `<schema_dir>/<table>.json`
//! - Files hold a [`TableDefinition`]
//! - A table is defined once; redefinition is rejected
//! - A missing schema directory is an empty catalog

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::errors::{SchemaError, SchemaResult};
use super::types::{Schema, TableDefinition};
use crate::observability::{log_event_with_fields, Event};

/// In-memory registry of table schemas, keyed by table name.
pub struct SchemaLoader {
    /// Directory containing table definition files
    schema_dir: PathBuf,
    /// Loaded schemas indexed by table name
    schemas: HashMap<String, Schema>,
}

impl SchemaLoader {
    /// Creates an empty catalog reading from `schema_dir`.
    pub fn new(schema_dir: &Path) -> Self {
        Self {
            schema_dir: schema_dir.to_path_buf(),
            schemas: HashMap::new(),
        }
    }

    /// Loads every `*.json` table definition in the schema directory.
    ///
    /// Files are read in path order, so a duplicate table is always reported
    /// against the same file.
    pub fn load_all(&mut self) -> SchemaResult<()> {
        if !self.schema_dir.exists() {
            return Ok(());
        }

        let entries = fs::read_dir(&self.schema_dir).map_err(|e| {
            SchemaError::malformed_file(
                self.schema_dir.display().to_string(),
                format!("Failed to read schema directory: {}", e),
            )
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                SchemaError::malformed_file(
                    self.schema_dir.display().to_string(),
                    format!("Failed to read directory entry: {}", e),
                )
            })?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();

        for path in &paths {
            self.load_definition_file(path)?;
        }

        let schema_dir = self.schema_dir.display().to_string();
        let loaded = self.schemas.len().to_string();
        log_event_with_fields(
            Event::SchemasLoaded,
            &[("schema_dir", schema_dir.as_str()), ("tables", loaded.as_str())],
        );

        Ok(())
    }

    /// Loads a single table definition file.
    fn load_definition_file(&mut self, path: &Path) -> SchemaResult<()> {
        let content = fs::read_to_string(path).map_err(|e| {
            SchemaError::malformed_file(
                path.display().to_string(),
                format!("Failed to read file: {}", e),
            )
        })?;

        let definition: TableDefinition = serde_json::from_str(&content).map_err(|e| {
            SchemaError::malformed_file(path.display().to_string(), format!("Invalid JSON: {}", e))
        })?;

        let schema = definition.to_schema().map_err(|e| {
            SchemaError::malformed_file(path.display().to_string(), e.message())
                .with_table(definition.table.clone())
        })?;

        self.register(&definition.table, schema)
    }

    /// Registers a schema directly (for testing or programmatic creation).
    pub fn register(&mut self, table: &str, schema: Schema) -> SchemaResult<()> {
        if self.schemas.contains_key(table) {
            return Err(SchemaError::schema_immutable(table));
        }

        let columns = schema.column_count().to_string();
        let entry_size = schema.entry_size().to_string();
        self.schemas.insert(table.to_string(), schema);

        log_event_with_fields(
            Event::SchemaRegistered,
            &[
                ("columns", columns.as_str()),
                ("entry_size", entry_size.as_str()),
                ("table", table),
            ],
        );

        Ok(())
    }

    /// Gets a schema by table name.
    pub fn get(&self, table: &str) -> Option<&Schema> {
        self.schemas.get(table)
    }

    /// Gets a schema by table name, failing with `FIXROW_UNKNOWN_TABLE`.
    pub fn require(&self, table: &str) -> SchemaResult<&Schema> {
        self.get(table).ok_or_else(|| SchemaError::unknown_table(table))
    }

    /// Checks if a table is registered.
    pub fn exists(&self, table: &str) -> bool {
        self.schemas.contains_key(table)
    }

    /// Returns registered table names in sorted order.
    pub fn tables(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.schemas.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of registered tables.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Returns true if no table is registered.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Writes the definition of a registered table to `<schema_dir>/<table>.json`.
    pub fn save_table(&self, table: &str) -> SchemaResult<PathBuf> {
        let schema = self.require(table)?;
        let path = self.schema_dir.join(format!("{}.json", table));

        if path.exists() {
            return Err(SchemaError::schema_immutable(table));
        }

        fs::create_dir_all(&self.schema_dir).map_err(|e| {
            SchemaError::malformed_file(
                self.schema_dir.display().to_string(),
                format!("Failed to create schema directory: {}", e),
            )
        })?;

        let definition = TableDefinition::from_schema(table, schema);
        let content = serde_json::to_string_pretty(&definition).map_err(|e| {
            SchemaError::malformed_file(
                path.display().to_string(),
                format!("Failed to serialize definition: {}", e),
            )
        })?;

        fs::write(&path, content).map_err(|e| {
            SchemaError::malformed_file(
                path.display().to_string(),
                format!("Failed to write file: {}", e),
            )
        })?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Column, SchemaErrorCode};
    use tempfile::TempDir;

    fn sample_schema() -> Schema {
        Schema::from_columns([Column::int("id"), Column::string("name", 16)]).unwrap()
    }

    #[test]
    fn test_register_and_get() {
        let temp_dir = TempDir::new().unwrap();
        let mut loader = SchemaLoader::new(temp_dir.path());

        loader.register("users", sample_schema()).unwrap();

        let schema = loader.get("users").unwrap();
        assert_eq!(schema.entry_size(), 20);
        assert!(loader.exists("users"));
        assert_eq!(loader.len(), 1);
    }

    #[test]
    fn test_schema_immutability() {
        let temp_dir = TempDir::new().unwrap();
        let mut loader = SchemaLoader::new(temp_dir.path());

        loader.register("users", sample_schema()).unwrap();

        let result = loader.register("users", sample_schema());
        assert_eq!(result.unwrap_err().code().code(), "FIXROW_SCHEMA_IMMUTABLE");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let mut loader = SchemaLoader::new(temp_dir.path());
        loader.register("users", sample_schema()).unwrap();
        let path = loader.save_table("users").unwrap();
        assert!(path.ends_with("users.json"));

        let mut reloaded = SchemaLoader::new(temp_dir.path());
        reloaded.load_all().unwrap();

        assert_eq!(reloaded.get("users"), Some(&sample_schema()));
        assert_eq!(
            reloaded.get("users").unwrap().field_names(),
            sample_schema().field_names()
        );
    }

    #[test]
    fn test_save_twice_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let mut loader = SchemaLoader::new(temp_dir.path());
        loader.register("users", sample_schema()).unwrap();
        loader.save_table("users").unwrap();

        let err = loader.save_table("users").unwrap_err();
        assert_eq!(err.code(), SchemaErrorCode::SchemaImmutable);
    }

    #[test]
    fn test_unknown_table() {
        let temp_dir = TempDir::new().unwrap();
        let loader = SchemaLoader::new(temp_dir.path());

        assert!(loader.get("nonexistent").is_none());
        let err = loader.require("nonexistent").unwrap_err();
        assert_eq!(err.code(), SchemaErrorCode::UnknownTable);
        assert_eq!(err.table(), Some("nonexistent"));
    }

    #[test]
    fn test_load_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let mut loader = SchemaLoader::new(temp_dir.path());

        assert!(loader.load_all().is_ok());
        assert!(loader.is_empty());
    }

    #[test]
    fn test_load_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let mut loader = SchemaLoader::new(&temp_dir.path().join("absent"));

        assert!(loader.load_all().is_ok());
        assert!(loader.is_empty());
    }

    #[test]
    fn test_non_json_files_skipped() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "not a schema").unwrap();

        let mut loader = SchemaLoader::new(temp_dir.path());
        loader.load_all().unwrap();
        assert!(loader.is_empty());
    }

    #[test]
    fn test_malformed_file_rejected() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("broken.json"), "{\"table\": ").unwrap();

        let mut loader = SchemaLoader::new(temp_dir.path());
        let err = loader.load_all().unwrap_err();
        assert_eq!(err.code(), SchemaErrorCode::MalformedSchema);
        assert!(err.message().contains("broken.json"));
    }

    #[test]
    fn test_tables_sorted() {
        let temp_dir = TempDir::new().unwrap();
        let mut loader = SchemaLoader::new(temp_dir.path());
        loader.register("zeta", sample_schema()).unwrap();
        loader.register("alpha", sample_schema()).unwrap();
        assert_eq!(loader.tables(), vec!["alpha", "zeta"]);
    }
}
