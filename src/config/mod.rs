//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, worker pool size, User-Agent)
//! - CLI option types and parsing
//! - The library-level `Config`

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, Opt};
