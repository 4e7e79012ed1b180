//! URL normalization.

use crate::config::{HTTPS_SCHEME_PREFIX, HTTP_SCHEME_PREFIX};

/// Ensures a domain carries an explicit HTTP(S) scheme.
///
/// Returns the input unchanged if it starts with `http://` or `https://`
/// (exact, case-sensitive prefix); otherwise prefixes `https://`. No other
/// validation is done, malformed input passes through and fails later at
/// request time.
///
/// # Examples
///
/// ```
/// use domain_check::ensure_scheme;
///
/// assert_eq!(ensure_scheme("example.com"), "https://example.com");
/// assert_eq!(ensure_scheme("http://example.com"), "http://example.com");
/// ```
pub fn ensure_scheme(domain: &str) -> String {
    if domain.starts_with(HTTP_SCHEME_PREFIX) || domain.starts_with(HTTPS_SCHEME_PREFIX) {
        domain.to_string()
    } else {
        format!("{HTTPS_SCHEME_PREFIX}{domain}")
    }
}

#[cfg(test)]
mod tests {
    use super::ensure_scheme;

    #[test]
    fn test_ensure_scheme_adds_https() {
        assert_eq!(ensure_scheme("example.com"), "https://example.com");
    }

    #[test]
    fn test_ensure_scheme_preserves_https() {
        assert_eq!(ensure_scheme("https://example.com"), "https://example.com");
    }

    #[test]
    fn test_ensure_scheme_preserves_http() {
        assert_eq!(ensure_scheme("http://example.com"), "http://example.com");
    }

    #[test]
    fn test_ensure_scheme_with_path_and_port() {
        assert_eq!(
            ensure_scheme("example.com:8080/path?query=value"),
            "https://example.com:8080/path?query=value"
        );
    }

    #[test]
    fn test_ensure_scheme_is_case_sensitive() {
        // Only the exact lowercase prefixes count as a scheme
        assert_eq!(ensure_scheme("HTTP://example.com"), "https://HTTP://example.com");
        assert_eq!(ensure_scheme("Https://example.com"), "https://Https://example.com");
    }

    #[test]
    fn test_ensure_scheme_other_scheme_gets_prefixed() {
        assert_eq!(ensure_scheme("ftp://example.com"), "https://ftp://example.com");
    }

    #[test]
    fn test_ensure_scheme_does_not_validate() {
        assert_eq!(ensure_scheme("not a domain!!"), "https://not a domain!!");
        assert_eq!(ensure_scheme("http:/example.com"), "https://http:/example.com");
    }

    #[test]
    fn test_ensure_scheme_is_idempotent() {
        for input in ["example.com", "http://a.b", "https://c.d/e", "[2001:db8::1]"] {
            let once = ensure_scheme(input);
            assert_eq!(ensure_scheme(&once), once);
        }
    }
}
