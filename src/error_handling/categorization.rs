//! Error categorization.
//!
//! Maps `reqwest` failures onto `ErrorType` counters.

use super::stats::ProcessingStats;
use super::types::ErrorType;

/// Categorizes a `reqwest::Error` into an `ErrorType`.
///
/// Timeouts and connect failures are checked before the generic request
/// kind, since `reqwest` reports both of those as request errors too.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if error.is_builder() {
        ErrorType::HttpRequestBuilderError
    } else if error.is_redirect() {
        ErrorType::HttpRequestRedirectError
    } else if error.is_timeout() {
        ErrorType::HttpRequestTimeoutError
    } else if error.is_connect() {
        ErrorType::HttpRequestConnectError
    } else if error.is_request() {
        ErrorType::HttpRequestRequestError
    } else if error.is_body() {
        ErrorType::HttpRequestBodyError
    } else if error.is_decode() {
        ErrorType::HttpRequestDecodeError
    } else {
        ErrorType::HttpRequestOtherError
    }
}

/// Records a failed request in the processing statistics.
pub fn update_error_stats(stats: &ProcessingStats, error: &reqwest::Error) {
    let error_type = categorize_reqwest_error(error);
    stats.increment_error(error_type);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorize_builder_error() {
        // A URL with no host fails while building the request
        let error = reqwest::Client::new()
            .get("http://")
            .build()
            .expect_err("request without a host should not build");
        assert_eq!(
            categorize_reqwest_error(&error),
            ErrorType::HttpRequestBuilderError
        );
    }

    #[tokio::test]
    async fn test_categorize_connect_error() {
        // Bind then drop a listener so the port is known to be closed
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);

        let error = reqwest::Client::new()
            .get(format!("http://{}/", addr))
            .send()
            .await
            .expect_err("closed port should refuse the connection");
        assert_eq!(
            categorize_reqwest_error(&error),
            ErrorType::HttpRequestConnectError
        );
    }

    #[test]
    fn test_update_error_stats_increments_category() {
        let stats = ProcessingStats::new();
        let error = reqwest::Client::new()
            .get("http://")
            .build()
            .expect_err("request without a host should not build");

        update_error_stats(&stats, &error);
        update_error_stats(&stats, &error);

        assert_eq!(stats.get_error_count(ErrorType::HttpRequestBuilderError), 2);
        assert_eq!(stats.total_errors(), 2);
    }
}
