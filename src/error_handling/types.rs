//! Error type definitions.
//!
//! This module defines all error types used throughout the application. Each
//! message names the stage that failed so a single line on stderr is enough to
//! tell configuration, scanning, decoding and writing problems apart.

use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// The `--output` file could not be created.
    #[error("Failed to create output file {}: {source}", .path.display())]
    OutputFileError {
        /// Requested output path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

/// Invalid or missing user input, detected before any request is sent.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `--table` was empty.
    #[error("DynamoDB table is required (--table)")]
    MissingTable,

    /// `--expression-attribute-names` is not a JSON object of strings.
    #[error("expression attribute names is invalid: {0}")]
    InvalidAttributeNames(serde_json::Error),

    /// `--expression-attribute-values` is not a JSON object of DynamoDB-typed values.
    #[error("expression attribute values is invalid: {0}")]
    InvalidAttributeValues(String),

    /// `--max-attempts` was zero.
    #[error("max attempts must be at least 1 (got {0})")]
    InvalidMaxAttempts(u32),
}

/// Failure fetching or decoding one page of a scan.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The remote scan call failed (connectivity, credentials, throttling,
    /// or a predicate the backend rejected).
    #[error("scan of table `{table}` failed: {message}")]
    Query {
        /// Table being scanned
        table: String,
        /// Backend error, with its full context chain
        message: String,
    },

    /// A returned item could not be mapped into a record.
    #[error("failed to decode attribute `{attribute}`: {reason}")]
    Decode {
        /// Top-level attribute holding the offending value
        attribute: String,
        /// What was wrong with it
        reason: String,
    },

    /// The cancellation signal fired while a scan was in flight.
    #[error("scan cancelled")]
    Cancelled,
}

/// Failure of an export run.
#[derive(Error, Debug)]
pub enum ExportError {
    /// A page could not be fetched or decoded.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// The output sink rejected a write or flush.
    #[error("failed to write CSV output: {0}")]
    Write(#[from] csv::Error),
}

impl From<std::io::Error> for ExportError {
    fn from(e: std::io::Error) -> Self {
        ExportError::Write(csv::Error::from(e))
    }
}
