//! Record error module.
//!
//! Errors raised while reading club entry CSV files and benchmark size lists.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or parsing records.
#[derive(Error, Debug)]
pub enum RecordError {
    /// The file could not be opened, read or written.
    #[error("Unable to access {}: {source}", .path.display())]
    Io {
        /// The file being accessed
        path: PathBuf,
        /// The underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// A CSV line ended before all fields were read.
    #[error("Line {line}: missing field `{field}`")]
    MissingField {
        /// 1-based line number
        line: usize,
        /// Name of the missing field
        field: &'static str,
    },

    /// A numeric field did not hold an integer.
    #[error("Line {line}: invalid {field} `{value}`")]
    InvalidNumber {
        /// 1-based line number
        line: usize,
        /// Name of the field
        field: &'static str,
        /// The offending text
        value: String,
    },

    /// A CSV line had more fields than a club entry.
    #[error("Line {line}: unexpected trailing data `{rest}`")]
    TrailingData {
        /// 1-based line number
        line: usize,
        /// Everything after the last expected field
        rest: String,
    },

    /// A token in a sizes file was not an unsigned integer.
    #[error("Invalid size `{0}`")]
    InvalidSize(String),
}

impl RecordError {
    /// Wraps an IO error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
