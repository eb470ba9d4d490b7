//! CLI argument definitions using clap
//!
//! Commands:
//! - fixrow tables --config <path>
//! - fixrow layout --config <path> --table <name>
//! - fixrow verify --config <path> --table <name>
//! - fixrow encode --config <path> --table <name>
//! - fixrow decode --config <path> --table <name>

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// fixrow - fixed-length record encoder and decoder
#[derive(Parser, Debug)]
#[command(name = "fixrow")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the tables defined in the schema directory
    Tables {
        /// Path to configuration file
        #[arg(long, default_value = "./fixrow.json")]
        config: PathBuf,
    },

    /// Print the record layout of a table
    Layout {
        /// Path to configuration file
        #[arg(long, default_value = "./fixrow.json")]
        config: PathBuf,
        /// Table name
        #[arg(long)]
        table: String,
    },

    /// Verify JSON tuples (one array per stdin line) against a table
    Verify {
        /// Path to configuration file
        #[arg(long, default_value = "./fixrow.json")]
        config: PathBuf,
        /// Table name
        #[arg(long)]
        table: String,
    },

    /// Encode JSON tuples (one array per stdin line) to base64 records
    Encode {
        /// Path to configuration file
        #[arg(long, default_value = "./fixrow.json")]
        config: PathBuf,
        /// Table name
        #[arg(long)]
        table: String,
    },

    /// Decode base64 records (one per stdin line) to JSON tuples
    ///
    /// The JSON view is for reading, not for re-encoding. Trailing spaces of
    /// text are dropped (encode pads them back). Text bytes that are not
    /// UTF-8 are shown as U+FFFD, and NaN or infinite floats as null; records
    /// holding those do not survive a decode then encode round trip.
    Decode {
        /// Path to configuration file
        #[arg(long, default_value = "./fixrow.json")]
        config: PathBuf,
        /// Table name
        #[arg(long)]
        table: String,
    },
}

impl Command {
    /// Returns the command name used in log events
    pub fn name(&self) -> &'static str {
        match self {
            Command::Tables { .. } => "tables",
            Command::Layout { .. } => "layout",
            Command::Verify { .. } => "verify",
            Command::Encode { .. } => "encode",
            Command::Decode { .. } => "decode",
        }
    }

    /// Returns the configuration file path
    pub fn config_path(&self) -> &Path {
        match self {
            Command::Tables { config }
            | Command::Layout { config, .. }
            | Command::Verify { config, .. }
            | Command::Encode { config, .. }
            | Command::Decode { config, .. } => config.as_path(),
        }
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
