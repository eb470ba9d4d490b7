//! Schema Catalog Tests
//!
//! Tests for loading table definitions from a schema directory:
//! - Every `*.json` file defines one table
//! - A table is defined once
//! - Malformed definitions fail the load
//! - Saved definitions load back to an equal schema

use std::fs;
use std::path::Path;

use fixrow::schema::{SchemaLoader, SchemaValidator};
use fixrow::{Column, Schema, SchemaErrorCode, Value};
use serde_json::json;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn write_definition(dir: &Path, file: &str, definition: serde_json::Value) {
    fs::write(dir.join(file), definition.to_string()).unwrap();
}

fn users_definition() -> serde_json::Value {
    json!({
        "table": "users",
        "description": "Registered users",
        "columns": [
            {"name": "id", "type": "int"},
            {"name": "score", "type": "float"},
            {"name": "name", "type": "string", "width": 16}
        ]
    })
}

// =============================================================================
// Loading Tests
// =============================================================================

#[test]
fn test_load_directory() {
    let tmp = TempDir::new().unwrap();
    write_definition(tmp.path(), "users.json", users_definition());
    write_definition(
        tmp.path(),
        "flags.json",
        json!({
            "table": "flags",
            "columns": [{"name": "on", "type": "bool"}]
        }),
    );
    fs::write(tmp.path().join("README.txt"), "not a definition").unwrap();

    let mut loader = SchemaLoader::new(tmp.path());
    loader.load_all().unwrap();

    assert_eq!(loader.tables(), vec!["flags", "users"]);
    assert_eq!(loader.require("users").unwrap().entry_size(), 24);
    assert_eq!(loader.require("flags").unwrap().entry_size(), 1);
}

#[test]
fn test_missing_directory_is_empty() {
    let tmp = TempDir::new().unwrap();
    let mut loader = SchemaLoader::new(&tmp.path().join("absent"));
    loader.load_all().unwrap();
    assert!(loader.is_empty());
}

#[test]
fn test_duplicate_table_rejected() {
    let tmp = TempDir::new().unwrap();
    write_definition(tmp.path(), "a.json", users_definition());
    write_definition(tmp.path(), "b.json", users_definition());

    let mut loader = SchemaLoader::new(tmp.path());
    let err = loader.load_all().unwrap_err();
    assert_eq!(err.code(), SchemaErrorCode::SchemaImmutable);
}

#[test]
fn test_malformed_definition_rejected() {
    let tmp = TempDir::new().unwrap();
    write_definition(
        tmp.path(),
        "bad.json",
        json!({
            "table": "bad",
            "columns": [{"name": "blob", "type": "string", "width": 0}]
        }),
    );

    let mut loader = SchemaLoader::new(tmp.path());
    let err = loader.load_all().unwrap_err();
    assert_eq!(err.code(), SchemaErrorCode::MalformedSchema);
}

#[test]
fn test_oversized_width_rejected() {
    let tmp = TempDir::new().unwrap();
    write_definition(
        tmp.path(),
        "huge.json",
        json!({
            "table": "huge",
            "columns": [
                {"name": "blob", "type": "string", "width": u64::MAX},
                {"name": "id", "type": "int"}
            ]
        }),
    );

    let mut loader = SchemaLoader::new(tmp.path());
    let err = loader.load_all().unwrap_err();
    assert_eq!(err.code(), SchemaErrorCode::MalformedSchema);
    assert!(loader.is_empty());
}

#[test]
fn test_invalid_json_rejected() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("broken.json"), "{ not json").unwrap();

    let mut loader = SchemaLoader::new(tmp.path());
    assert_eq!(
        loader.load_all().unwrap_err().code(),
        SchemaErrorCode::MalformedSchema
    );
}

// =============================================================================
// Lookup and Persistence Tests
// =============================================================================

#[test]
fn test_unknown_table() {
    let tmp = TempDir::new().unwrap();
    let loader = SchemaLoader::new(tmp.path());
    let validator = SchemaValidator::new(&loader);

    let err = validator
        .validate_tuple("ghost", vec![Value::Int(1)])
        .unwrap_err();
    assert_eq!(err.code(), SchemaErrorCode::UnknownTable);
}

#[test]
fn test_validator_tags_table() {
    let tmp = TempDir::new().unwrap();
    write_definition(tmp.path(), "users.json", users_definition());
    let mut loader = SchemaLoader::new(tmp.path());
    loader.load_all().unwrap();

    let err = SchemaValidator::new(&loader)
        .validate_tuple("users", vec![Value::Int(1)])
        .unwrap_err();
    assert_eq!(err.table(), Some("users"));
}

#[test]
fn test_save_and_reload() {
    let tmp = TempDir::new().unwrap();
    let schema = Schema::from_columns([Column::int("id"), Column::string("code", 6)]).unwrap();

    let mut loader = SchemaLoader::new(tmp.path());
    loader.register("codes", schema.clone()).unwrap();
    loader.save_table("codes").unwrap();

    let mut reloaded = SchemaLoader::new(tmp.path());
    reloaded.load_all().unwrap();

    let loaded = reloaded.require("codes").unwrap();
    assert_eq!(loaded, &schema);
    assert_eq!(loaded.field_names(), schema.field_names());
}
