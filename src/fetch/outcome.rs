//! Per-domain check outcome.

use std::fmt;

/// Result of one request attempt.
///
/// Both variants are normal completions: a failed request is reported the
/// same way as a successful one, only the payload differs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The server answered with this HTTP status code.
    Status(u16),
    /// The request failed before a response arrived; holds the error text.
    Error(String),
}

impl Outcome {
    /// Returns `true` if a response (of any status) was received.
    pub fn is_status(&self) -> bool {
        matches!(self, Outcome::Status(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Status(code) => write!(f, "{}", code),
            Outcome::Error(message) => f.write_str(message),
        }
    }
}
