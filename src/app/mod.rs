//! Main application modules.
//!
//! This module provides URL normalization, progress logging, shutdown
//! handling, and statistics printing used by the run loop.

pub mod logging;
pub mod shutdown;
pub mod statistics;
pub mod url;

// Re-export public API
pub use logging::{log_progress, spawn_progress_logger};
pub use shutdown::shutdown_gracefully;
pub use statistics::{print_error_statistics, print_summary};
pub use url::ensure_scheme;
