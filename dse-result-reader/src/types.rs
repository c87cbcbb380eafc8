//! Core types for the DSE result reader library
//!
//! Errors shared by every stage of the pipeline (discover, parse, render).

use std::path::PathBuf;

/// Result type for reader operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that can occur while discovering, parsing or rendering results
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("No relevant files found in {dir:?} (decision model tag: {tag})")]
    NotFound { dir: PathBuf, tag: String },

    #[error("Failed to parse result file {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report: {0}")]
    Write(#[from] std::io::Error),

    #[error("Unknown decision model preset: {0}")]
    UnknownPreset(String),
}

impl ReportError {
    /// File name of the offending result file, if this is a parse error
    pub fn file_name(&self) -> Option<&str> {
        match self {
            ReportError::Parse { file, .. } => Some(file.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_names_file() {
        let source = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        let err = ReportError::Parse {
            file: "broken.json".to_string(),
            source,
        };

        assert_eq!(err.file_name(), Some("broken.json"));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_not_found_message() {
        let err = ReportError::NotFound {
            dir: PathBuf::from("/tmp/results"),
            tag: "Multicore".to_string(),
        };

        assert!(err.file_name().is_none());
        assert!(err.to_string().contains("Multicore"));
    }
}
