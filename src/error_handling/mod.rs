//! Error handling.
//!
//! Errors are grouped by the stage that produces them:
//! - **Initialization**: logger and output file setup
//! - **Config**: missing or malformed command-line input
//! - **Scan**: remote call, decode and cancellation failures
//! - **Export**: scan failures plus output write failures
//!
//! All of them are terminal; nothing in the crate retries or skips.

mod types;

// Re-export public API
pub use types::{ConfigError, ExportError, InitializationError, ScanError};
