//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources of a run:
//! - HTTP client (User-Agent and timeout applied)
//! - Worker pool semaphore
//! - Logger
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;

use std::sync::Arc;

use tokio::sync::Semaphore;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;

/// Initializes a semaphore for controlling concurrency.
///
/// Creates a new semaphore with the specified permit count. Each request task
/// holds one permit for the duration of its request, so `count` is the
/// worker pool size. A count of zero is raised to one.
///
/// # Arguments
///
/// * `count` - Maximum number of concurrent requests allowed
///
/// # Returns
///
/// An `Arc<Semaphore>` that can be shared across multiple tasks.
pub fn init_semaphore(count: usize) -> Arc<Semaphore> {
    Arc::new(Semaphore::new(count.max(1)))
}
