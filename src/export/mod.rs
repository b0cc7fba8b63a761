//! Export functionality.
//!
//! This module turns a paginated scan into CSV: header derivation, per-cell
//! formatting, and the streaming page loop.

mod csv;
mod format;
mod types;

pub use self::csv::CsvExporter;
pub use format::{format_cell, format_number, format_row};
pub use types::{ExportSummary, HeaderMode};
