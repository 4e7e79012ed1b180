//! HTTP request execution.
//!
//! A `StatusProbe` turns one normalized URL into an `Outcome`. `HttpProbe` is
//! the real implementation on top of `reqwest`; the dispatcher only sees the
//! trait, so tests can swap in a scripted probe.

mod outcome;

use std::future::Future;
use std::sync::Arc;

use log::debug;

use crate::config::HTTP_SCHEME_PREFIX;
use crate::error_handling::{update_error_stats, InfoType, ProcessingStats};

pub use outcome::Outcome;

/// Performs a single status check.
///
/// Implementations must not fail: every request-layer error becomes
/// `Outcome::Error`. They must also not retry.
pub trait StatusProbe: Send + Sync + 'static {
    /// Issues one GET to `url` and reports what happened.
    fn probe(&self, url: &str) -> impl Future<Output = Outcome> + Send;
}

/// `reqwest`-backed probe.
///
/// The client carries the User-Agent and timeout (see
/// `initialization::init_client`). Failures and redirects are counted in the
/// shared `ProcessingStats`.
#[derive(Clone)]
pub struct HttpProbe {
    client: reqwest::Client,
    error_stats: Arc<ProcessingStats>,
}

impl HttpProbe {
    /// Creates a probe around an already configured client.
    pub fn new(client: reqwest::Client, error_stats: Arc<ProcessingStats>) -> Self {
        Self {
            client,
            error_stats,
        }
    }

    /// Statistics collected by this probe.
    pub fn error_stats(&self) -> &Arc<ProcessingStats> {
        &self.error_stats
    }

    fn record_redirect(&self, requested: &str, response: &reqwest::Response) {
        let final_url = response.url();
        if final_url.as_str().trim_end_matches('/') == requested.trim_end_matches('/') {
            return;
        }
        debug!("{} redirected to {}", requested, final_url);
        self.error_stats.increment_info(InfoType::HttpRedirect);
        if requested.starts_with(HTTP_SCHEME_PREFIX) && final_url.scheme() == "https" {
            self.error_stats.increment_info(InfoType::HttpsRedirect);
        }
    }
}

impl StatusProbe for HttpProbe {
    async fn probe(&self, url: &str) -> Outcome {
        debug!("Sending GET {}", url);
        match self.client.get(url).send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                self.record_redirect(url, &response);
                debug!("{} answered {}", url, status);
                Outcome::Status(status)
            }
            Err(e) => {
                update_error_stats(&self.error_stats, &e);
                let message = error_chain_message(&e);
                debug!("{} failed: {}", url, message);
                Outcome::Error(message)
            }
        }
    }
}

/// Renders an error and all of its sources as one `": "`-joined line.
///
/// `reqwest::Error`'s own message is only the outermost layer
/// ("error sending request for url (...)"); the useful detail (DNS failure,
/// refused connection, timeout) sits in the source chain.
pub fn error_chain_message(error: &(dyn std::error::Error + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
