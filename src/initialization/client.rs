//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used for every check.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the config
/// - Total request timeout from the config
///
/// Redirects and TLS verification keep `reqwest`'s defaults.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if the TLS backend cannot be
/// set up.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(client)
}
