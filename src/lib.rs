//! dynamo2csv library: export a DynamoDB table to CSV
//!
//! The library scans a table page by page (following `LastEvaluatedKey`),
//! derives a fixed column set from the first record, and streams every item
//! to a CSV writer with stable, non-exponential number formatting.
//!
//! # Example
//!
//! ```no_run
//! use dynamo2csv::{run_export, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let config = Config {
//!     table: "users".to_string(),
//!     ..Default::default()
//! };
//!
//! let summary = run_export(config).await?;
//! eprintln!("Exported {} rows", summary.records_written);
//! # Ok(())
//! # }
//! ```
//!
//! The exporter is generic over [`source::RecordSource`], so it can be driven
//! by any paginated source, not only DynamoDB.
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

#![warn(missing_docs)]

pub mod config;
pub mod error_handling;
pub mod export;
pub mod initialization;
mod run;
pub mod source;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{ConfigError, ExportError, ScanError};
pub use export::{CsvExporter, ExportSummary, HeaderMode};
pub use run::run_export;
