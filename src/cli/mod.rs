//! CLI module for fixrow
//!
//! Provides command-line interface for:
//! - tables: List tables in the schema directory
//! - layout: Describe the byte layout of a table
//! - verify: Check JSON tuples against a table
//! - encode: JSON tuples to base64 records
//! - decode: base64 records to JSON tuples

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{run, run_command, run_command_with, Config};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{parse_tuple, read_lines, tuple_to_json, write_error, write_response};
