//! Error handling and processing statistics.
//!
//! This module provides:
//! - Fatal error types (initialization, input file, output file)
//! - Request failure categories and their counters
//! - Categorization of `reqwest` errors
//!
//! Request failures are data, not errors: they end up as an outcome string
//! for the domain and a bump in one of the `ErrorType` counters.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::update_error_stats;
pub use stats::ProcessingStats;
pub use types::{ErrorType, InfoType, InitializationError, InputError, OutputError};
