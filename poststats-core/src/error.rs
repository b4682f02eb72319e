use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
    // Log lines
    #[error("malformed line ({reason}): {line}")]
    MalformedLine { line: String, reason: String },

    // Year inference
    #[error("malformed log filename '{filename}': {reason}")]
    MalformedFilename { filename: String, reason: String },

    // Report CSV
    #[error("malformed report row {line_number} ({reason}): {row}")]
    MalformedReportRow {
        line_number: usize,
        row: String,
        reason: String,
    },

    // IO / decompression
    #[error("{action} {path}: {source}")]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StatsError {
    pub fn malformed_line(line: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedLine {
            line: line.into(),
            reason: reason.into(),
        }
    }

    pub fn malformed_filename(filename: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedFilename {
            filename: filename.into(),
            reason: reason.into(),
        }
    }

    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}
