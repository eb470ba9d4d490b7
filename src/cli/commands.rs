//! CLI command implementations
//!
//! Every command loads the configuration, then the schema catalog, before
//! touching its input. Streaming commands answer one response line per
//! input line: rejected lines are reported and skipped, a FATAL error
//! stops the command.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};

use crate::observability::{log_event_with_fields, CodecMetrics, Event, Logger, Severity};
use crate::schema::{Record, Schema, SchemaLoader, SchemaValidator};

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::{
    decode_base64, encode_base64, parse_tuple, read_lines, tuple_to_json, write_error,
    write_response,
};

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory of table definition files (required)
    pub schema_dir: String,

    /// Minimum log severity (optional, default "INFO")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log a metrics summary when a command completes (optional, default true)
    #[serde(default = "default_report_metrics")]
    pub report_metrics: bool,
}

fn default_log_level() -> String {
    "INFO".to_string()
}
fn default_report_metrics() -> bool {
    true
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> CliResult<()> {
        if self.schema_dir.trim().is_empty() {
            return Err(CliError::config_error("schema_dir must not be empty"));
        }

        self.severity()?;

        Ok(())
    }

    /// Get schema directory as Path
    pub fn schema_path(&self) -> &Path {
        Path::new(&self.schema_dir)
    }

    /// Parsed log threshold
    pub fn severity(&self) -> CliResult<Severity> {
        Severity::parse(&self.log_level).ok_or_else(|| {
            CliError::config_error(format!(
                "Invalid log_level: '{}'. Must be one of TRACE, INFO, WARN, ERROR, FATAL.",
                self.log_level
            ))
        })
    }
}

/// State shared by one command invocation
struct Session {
    config: Config,
    loader: SchemaLoader,
    metrics: CodecMetrics,
}

impl Session {
    /// Load config, apply the log threshold, then load the catalog
    fn open(config_path: &Path) -> CliResult<Self> {
        let config = Config::load(config_path)?;
        Logger::set_min_severity(config.severity()?);

        let config_file = config_path.display().to_string();
        log_event_with_fields(
            Event::ConfigLoaded,
            &[
                ("config", config_file.as_str()),
                ("schema_dir", config.schema_dir.as_str()),
            ],
        );

        let mut loader = SchemaLoader::new(config.schema_path());
        loader.load_all()?;

        Ok(Self {
            config,
            loader,
            metrics: CodecMetrics::new(),
        })
    }

    fn schema(&self, table: &str) -> CliResult<&Schema> {
        Ok(self.loader.require(table)?)
    }

    fn finish(&self, command: &str, result: &CliResult<()>) {
        if let Err(e) = result {
            log_event_with_fields(
                Event::CommandFailed,
                &[
                    ("code", e.code_str()),
                    ("command", command),
                    ("reason", e.message()),
                ],
            );
        }

        let status = match result {
            Ok(()) => "ok",
            Err(_) => "error",
        };

        if self.config.report_metrics {
            let metrics = serde_json::to_string(&self.metrics.snapshot()).unwrap_or_default();
            log_event_with_fields(
                Event::CommandComplete,
                &[
                    ("command", command),
                    ("metrics", metrics.as_str()),
                    ("status", status),
                ],
            );
        } else {
            log_event_with_fields(
                Event::CommandComplete,
                &[("command", command), ("status", status)],
            );
        }
    }
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run a command against stdin and stdout
pub fn run_command(cmd: Command) -> CliResult<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_command_with(cmd, stdin.lock(), &mut stdout.lock())
}

/// Run a command against the given input and output streams
pub fn run_command_with<R: BufRead, W: Write>(
    cmd: Command,
    input: R,
    output: &mut W,
) -> CliResult<()> {
    let session = Session::open(cmd.config_path())?;
    let name = cmd.name();

    log_event_with_fields(Event::CommandBegin, &[("command", name)]);

    let result = match &cmd {
        Command::Tables { .. } => tables(&session, output),
        Command::Layout { table, .. } => layout(&session, table, output),
        Command::Verify { table, .. } => verify(&session, table, input, output),
        Command::Encode { table, .. } => encode(&session, table, input, output),
        Command::Decode { table, .. } => decode(&session, table, input, output),
    };

    session.finish(name, &result);
    result
}

/// List registered tables
fn tables<W: Write>(session: &Session, output: &mut W) -> CliResult<()> {
    write_response(output, json!({ "tables": session.loader.tables() }))
}

/// Describe the byte layout of one table
fn layout<W: Write>(session: &Session, table: &str, output: &mut W) -> CliResult<()> {
    let schema = session.schema(table)?;

    let columns: Vec<JsonValue> = schema
        .columns()
        .enumerate()
        .map(|(index, (name, data_type))| {
            json!({
                "name": name,
                "type": data_type.type_name(),
                "width": data_type.width(),
                "offset": schema.column_offset(index),
            })
        })
        .collect();

    write_response(
        output,
        json!({
            "table": table,
            "entry_size": schema.entry_size(),
            "columns": columns,
        }),
    )
}

/// Verify JSON tuples against a table
fn verify<R: BufRead, W: Write>(
    session: &Session,
    table: &str,
    input: R,
    output: &mut W,
) -> CliResult<()> {
    let schema = session.schema(table)?;

    process_lines(input, output, |line| {
        verify_line(session, schema, table, line)?;
        Ok(json!({ "valid": true }))
    })
}

/// Encode JSON tuples into base64 records
fn encode<R: BufRead, W: Write>(
    session: &Session,
    table: &str,
    input: R,
    output: &mut W,
) -> CliResult<()> {
    let schema = session.schema(table)?;

    process_lines(input, output, |line| {
        let record = verify_line(session, schema, table, line)?;
        let bytes = schema.encode(&record);

        session.metrics.record_encoded(bytes.len());
        let size = bytes.len().to_string();
        log_event_with_fields(
            Event::RecordEncoded,
            &[("bytes", size.as_str()), ("table", table)],
        );

        Ok(json!({ "record": encode_base64(&bytes), "bytes": bytes.len() }))
    })
}

/// Decode base64 records into JSON tuples
fn decode<R: BufRead, W: Write>(
    session: &Session,
    table: &str,
    input: R,
    output: &mut W,
) -> CliResult<()> {
    let schema = session.schema(table)?;

    process_lines(input, output, |line| {
        let bytes = decode_base64(line)?;

        match schema.decode(&bytes) {
            Ok(record) => {
                session.metrics.increment_decoded();
                log_event_with_fields(Event::RecordDecoded, &[("table", table)]);
                Ok(tuple_to_json(&record))
            }
            Err(e) => {
                session.metrics.increment_decode_failures();
                if e.is_fatal() {
                    let required = schema.entry_size().to_string();
                    let available = bytes.len().to_string();
                    log_event_with_fields(
                        Event::DecodeUnderrun,
                        &[
                            ("available", available.as_str()),
                            ("required", required.as_str()),
                            ("table", table),
                        ],
                    );
                }
                Err(e.with_table(table).into())
            }
        }
    })
}

/// Parse and verify one JSON tuple line, counting the outcome
fn verify_line(
    session: &Session,
    schema: &Schema,
    table: &str,
    line: &str,
) -> CliResult<Record> {
    let result = parse_tuple(line, schema).and_then(|values| {
        SchemaValidator::new(&session.loader)
            .validate_tuple(table, values)
            .map_err(CliError::from)
    });

    match result {
        Ok(record) => {
            session.metrics.increment_verified();
            Ok(record)
        }
        Err(e) => {
            session.metrics.increment_rejected();
            log_event_with_fields(
                Event::RecordRejected,
                &[
                    ("code", e.code_str()),
                    ("reason", e.message()),
                    ("table", table),
                ],
            );
            Err(e)
        }
    }
}

/// Answer each input line; report rejections, stop on FATAL
fn process_lines<R, W, F>(input: R, output: &mut W, mut handle: F) -> CliResult<()>
where
    R: BufRead,
    W: Write,
    F: FnMut(&str) -> CliResult<JsonValue>,
{
    for line in read_lines(input) {
        let line = line?;
        match handle(&line) {
            Ok(data) => write_response(output, data)?,
            Err(e) if !e.is_fatal() => write_error(output, e.code_str(), e.message())?,
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
