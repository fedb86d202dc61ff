//! Error types for Kraken ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading Kraken output.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input path missing or not a regular file.
    #[error("could not open input file: {path}")]
    InputNotFound { path: PathBuf },

    /// Failed to open file.
    #[error("failed to open file {path}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read a line.
    #[error("failed to read line {line} of {path}: {source}")]
    ReadLine {
        path: PathBuf,
        line: usize,
        #[source]
        source: std::io::Error,
    },

    // === Pairing Errors ===
    /// Translated line is missing the read id or the classification.
    #[error("malformed translation at line {line} of {path}: '{content}'")]
    MalformedTranslation {
        path: PathBuf,
        line: usize,
        content: String,
    },

    /// The translated file ended while classified reads remain.
    #[error(
        "translated file {translated} has no entry for the classified read at line {line} of {untranslated}"
    )]
    TranslationExhausted {
        untranslated: PathBuf,
        translated: PathBuf,
        line: usize,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::InputNotFound {
            path: PathBuf::from("/path/to/reads.kraken"),
        };
        assert_eq!(
            err.to_string(),
            "could not open input file: /path/to/reads.kraken"
        );
    }

    #[test]
    fn test_exhausted_display() {
        let err = IngestError::TranslationExhausted {
            untranslated: PathBuf::from("reads.kraken"),
            translated: PathBuf::from("reads.labels"),
            line: 7,
        };
        assert_eq!(
            err.to_string(),
            "translated file reads.labels has no entry for the classified read at line 7 of reads.kraken"
        );
    }
}
