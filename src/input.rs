//! Domain list reading.

use std::path::Path;

use log::debug;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::error_handling::InputError;

/// Reads the domain list from `path`.
///
/// Returns one entry per non-blank line, in file order, with surrounding
/// whitespace stripped. Nothing else is filtered or validated.
///
/// # Errors
///
/// Returns `InputError::FileAccess` if the file cannot be opened or read
/// (including invalid UTF-8).
pub async fn read_domains(path: &Path) -> Result<Vec<String>, InputError> {
    let access_error = |source: std::io::Error| InputError::FileAccess {
        path: path.to_path_buf(),
        source,
    };

    let file = tokio::fs::File::open(path).await.map_err(access_error)?;
    let mut lines = BufReader::new(file).lines();

    let mut domains = Vec::new();
    while let Some(line) = lines.next_line().await.map_err(access_error)? {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        domains.push(trimmed.to_string());
    }

    debug!("Read {} domains from {}", domains.len(), path.display());
    Ok(domains)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_input(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content).expect("Failed to write input");
        file.flush().expect("Failed to flush input");
        file
    }

    #[tokio::test]
    async fn test_read_domains_trims_and_skips_blanks() {
        let file = write_input(b"  example.com  \n\n   \n\t\nhttps://rust-lang.org\r\n");
        let domains = read_domains(file.path()).await.expect("should read");
        assert_eq!(domains, vec!["example.com", "https://rust-lang.org"]);
    }

    #[tokio::test]
    async fn test_read_domains_keeps_order_and_duplicates() {
        let file = write_input(b"b.com\na.com\nb.com\n");
        let domains = read_domains(file.path()).await.expect("should read");
        assert_eq!(domains, vec!["b.com", "a.com", "b.com"]);
    }

    #[tokio::test]
    async fn test_read_domains_passes_malformed_lines_through() {
        // No comment syntax and no validation
        let file = write_input(b"# not a comment\nnot a domain!!\n");
        let domains = read_domains(file.path()).await.expect("should read");
        assert_eq!(domains, vec!["# not a comment", "not a domain!!"]);
    }

    #[tokio::test]
    async fn test_read_domains_last_line_without_newline() {
        let file = write_input(b"a.com\nb.com");
        let domains = read_domains(file.path()).await.expect("should read");
        assert_eq!(domains, vec!["a.com", "b.com"]);
    }

    #[tokio::test]
    async fn test_read_domains_empty_file() {
        let file = write_input(b"");
        let domains = read_domains(file.path()).await.expect("should read");
        assert!(domains.is_empty());
    }

    #[tokio::test]
    async fn test_read_domains_missing_file() {
        let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let missing = dir.path().join("nope.txt");

        let err = read_domains(&missing).await.expect_err("missing file must fail");
        let InputError::FileAccess { path, source } = err;
        assert_eq!(path, missing);
        assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_read_domains_invalid_utf8() {
        let file = write_input(&[b'a', b'\n', 0xff, 0xfe, b'\n']);
        assert!(read_domains(file.path()).await.is_err());
    }
}
