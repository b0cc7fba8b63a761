//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::DEFAULT_MAX_ATTEMPTS;
use crate::error_handling::ConfigError;
use crate::export::HeaderMode;
use crate::source::ScanFilter;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Logs always go to stderr; stdout carries only CSV.
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line configuration.
///
/// Also constructible programmatically:
///
/// ```no_run
/// use dynamo2csv::Config;
///
/// let config = Config {
///     table: "users".to_string(),
///     filter_expression: Some("age > :min".to_string()),
///     expression_attribute_values: Some(r#"{":min": {"N": "21"}}"#.to_string()),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dynamo2csv",
    version,
    about = "Export a DynamoDB table to CSV on standard output"
)]
pub struct Config {
    /// DynamoDB table to export
    #[arg(short = 't', long = "table", value_name = "NAME")]
    pub table: String,

    /// Filter expression applied by the scan
    #[arg(long, value_name = "EXPR")]
    pub filter_expression: Option<String>,

    /// Placeholder to attribute-name aliases, as a JSON object
    #[arg(long, value_name = "JSON")]
    pub expression_attribute_names: Option<String>,

    /// Placeholder to value bindings, as DynamoDB JSON
    #[arg(long, value_name = "JSON")]
    pub expression_attribute_values: Option<String>,

    /// Column names (reserved, currently has no effect)
    #[arg(short = 'c', long, value_name = "COLUMNS")]
    pub columns: Option<String>,

    /// Shared config profile used for credentials and region
    #[arg(long, value_name = "NAME")]
    pub profile: Option<String>,

    /// AWS region (overrides the profile and environment)
    #[arg(long, value_name = "REGION")]
    pub region: Option<String>,

    /// Custom endpoint, e.g. http://localhost:8000 for DynamoDB Local
    #[arg(long, value_name = "URL")]
    pub endpoint_url: Option<String>,

    /// Attempts per scan request, including the first
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: u32,

    /// Write CSV to this file instead of stdout
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Derive the header from the first record or the whole first page
    #[arg(long, value_enum, default_value_t = HeaderMode::FirstRecord)]
    pub header_from: HeaderMode,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table: String::new(),
            filter_expression: None,
            expression_attribute_names: None,
            expression_attribute_values: None,
            columns: None,
            profile: None,
            region: None,
            endpoint_url: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            output: None,
            header_from: HeaderMode::FirstRecord,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Checks the options that do not involve parsing JSON.
    ///
    /// # Errors
    ///
    /// * `ConfigError::MissingTable` if `table` is blank
    /// * `ConfigError::InvalidMaxAttempts` if `max_attempts` is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.table.trim().is_empty() {
            return Err(ConfigError::MissingTable);
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::InvalidMaxAttempts(self.max_attempts));
        }
        Ok(())
    }

    /// Validates the configuration and builds the scan filter from it.
    pub fn scan_filter(&self) -> Result<ScanFilter, ConfigError> {
        self.validate()?;
        ScanFilter::parse(
            &self.table,
            self.filter_expression.as_deref(),
            self.expression_attribute_names.as_deref(),
            self.expression_attribute_values.as_deref(),
        )
    }
}
