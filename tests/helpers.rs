// Shared test helpers for input files and scripted probes.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::collections::HashMap;
use std::future::Future;
use std::io::Write;
use std::path::PathBuf;

use domain_check::{Config, Outcome, StatusProbe};
use tempfile::NamedTempFile;

/// Writes the given lines to a temporary input file.
#[allow(dead_code)] // Used by other test files
pub fn write_domains_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    for line in lines {
        writeln!(file, "{}", line).expect("Failed to write domain");
    }
    file.flush().expect("Failed to flush file");
    file
}

/// Builds a config for the given input and output paths.
#[allow(dead_code)] // Used by other test files
pub fn create_test_config(file: PathBuf, output: Option<PathBuf>) -> Config {
    Config {
        file,
        output,
        ..Default::default()
    }
}

/// Probe that answers from a fixed table.
///
/// URLs missing from the table fail like an unresolvable host.
#[allow(dead_code)] // Used by other test files
pub struct ScriptedProbe {
    answers: HashMap<String, Outcome>,
}

#[allow(dead_code)] // Used by other test files
impl ScriptedProbe {
    pub fn new(answers: &[(&str, Outcome)]) -> Self {
        Self {
            answers: answers
                .iter()
                .map(|(url, outcome)| (url.to_string(), outcome.clone()))
                .collect(),
        }
    }

    /// `example.com` answers 200, everything else fails to connect.
    pub fn example_only() -> Self {
        Self::new(&[("https://example.com", Outcome::Status(200))])
    }
}

impl StatusProbe for ScriptedProbe {
    fn probe(&self, url: &str) -> impl Future<Output = Outcome> + Send {
        let outcome = self.answers.get(url).cloned().unwrap_or_else(|| {
            Outcome::Error(format!(
                "error sending request for url ({}): dns error: failed to lookup address information",
                url
            ))
        });
        async move { outcome }
    }
}
