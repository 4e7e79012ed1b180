//! Error type definitions.
//!
//! Fatal errors (initialization, input, output) are `thiserror` enums. Request
//! failures never become errors; they are counted by category instead.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error reading the domain list.
#[derive(Error, Debug)]
pub enum InputError {
    /// The input file is missing or unreadable.
    #[error("Cannot read input file {}", path.display())]
    FileAccess {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
}

/// Error writing the results file.
#[derive(Error, Debug)]
pub enum OutputError {
    /// The results file could not be created or written.
    #[error("Cannot write results to {}", path.display())]
    Write {
        /// Path of the results file
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
}

/// Categories of request failures.
///
/// A failed request is still a completed check; these only feed the
/// end-of-run counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    /// The request could not be built (malformed URL).
    HttpRequestBuilderError,
    /// Redirect loop or too many redirects.
    HttpRequestRedirectError,
    /// No response within the request timeout.
    HttpRequestTimeoutError,
    /// DNS, TCP or TLS connection failure.
    HttpRequestConnectError,
    /// Failure while sending the request.
    HttpRequestRequestError,
    /// Failure in the request or response body.
    HttpRequestBodyError,
    /// The response could not be decoded.
    HttpRequestDecodeError,
    /// Anything `reqwest` does not classify.
    HttpRequestOtherError,
}

/// Informational events seen on successful responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    /// Final URL differs from the requested one.
    HttpRedirect,
    /// An `http://` request ended on `https://`.
    HttpsRedirect,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    /// Returns a human-readable string representation of the error type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestRedirectError => "HTTP request redirect error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestRequestError => "HTTP request error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
        }
    }
}

impl InfoType {
    /// Returns a human-readable string representation of the info type.
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::HttpRedirect => "HTTP redirect",
            InfoType::HttpsRedirect => "HTTP to HTTPS redirect",
        }
    }
}
