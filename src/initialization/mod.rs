//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - Logger
//! - DynamoDB client
//! - CSV output sink
//! - Ctrl-C cancellation

mod client;
mod logger;
mod output;
mod shutdown;

// Re-export public API
pub use client::init_dynamodb_client;
pub use logger::init_logger_with;
pub use output::open_output;
pub use shutdown::{cancel_on_ctrl_c, shutdown_gracefully};
