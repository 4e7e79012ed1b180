//! Configuration constants.
//!
//! Defaults for the worker pool, request handling and logging.

/// Maximum number of requests in flight at once (worker pool size).
pub const MAX_CONCURRENCY: usize = 10;

/// Per-request timeout in seconds, covering connect through response headers.
pub const REQUEST_TIMEOUT_SECS: u64 = 5;

/// Interval between progress log lines while a batch is running.
pub const LOGGING_INTERVAL: u64 = 5;

/// User-Agent header sent with every request.
///
/// A fixed browser-like string; some hosts answer differently (or not at all)
/// to clients that do not look like a browser.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";

/// Schemes that are accepted as-is by the URL normalizer.
pub const HTTP_SCHEME_PREFIX: &str = "http://";
/// Prefix added to domains that carry no scheme.
pub const HTTPS_SCHEME_PREFIX: &str = "https://";

/// Environment variable selecting the log format (`plain` or `json`).
pub const LOG_FORMAT_ENV: &str = "DOMAIN_CHECK_LOG_FORMAT";

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";
