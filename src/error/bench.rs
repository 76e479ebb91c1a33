//! Benchmark error module.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the benchmark harness.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BenchError {
    /// There were no records to benchmark with.
    #[error("Dataset is empty, nothing to benchmark")]
    EmptyDataset,

    /// No sizes were requested.
    #[error("No benchmark sizes given")]
    NoSizes,

    /// The bucket table returned a different number of values than the
    /// reference count for a key.
    #[error("Lookup mismatch for {algorithm} at size {size}: key `{key}` returned {found} values, expected {expected}")]
    LookupMismatch {
        /// Hash algorithm in use
        algorithm: String,
        /// Dataset size being measured
        size: usize,
        /// The key looked up
        key: String,
        /// Number of values returned by the table
        found: usize,
        /// Number of values inserted under the key
        expected: usize,
    },

    /// A result file could not be written.
    #[error("Failed to write report {path:?}: {message}")]
    ReportWrite {
        /// Destination of the report
        path: PathBuf,
        /// Underlying failure
        message: String,
    },
}
