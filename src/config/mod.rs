//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (defaults)
//! - CLI option types and parsing
//! - Conversion of raw options into a validated scan filter

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
