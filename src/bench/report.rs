//! Benchmark result tables.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::bench::BenchError;
use crate::hashing::HashAlgorithm;

/// One measured value per size for a single algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Algorithm the row was measured with
    pub algorithm: HashAlgorithm,

    /// Measurements, aligned with [`BenchReport::sizes`]
    pub values: Vec<f64>,
}

/// A metric measured for every algorithm at every dataset size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchReport {
    /// What the values mean, e.g. `ns_per_lookup`
    pub metric: String,

    /// Dataset sizes, ascending
    pub sizes: Vec<usize>,

    /// One row per algorithm, in measurement order
    pub rows: Vec<ReportRow>,
}

impl BenchReport {
    /// Creates an empty report over `sizes`.
    pub fn new<S: Into<String>>(metric: S, sizes: Vec<usize>) -> Self {
        Self {
            metric: metric.into(),
            sizes,
            rows: Vec::new(),
        }
    }

    /// Appends a row. `values` must hold one entry per size.
    pub fn push_row(&mut self, algorithm: HashAlgorithm, values: Vec<f64>) {
        debug_assert_eq!(values.len(), self.sizes.len());
        self.rows.push(ReportRow { algorithm, values });
    }

    /// Returns the row for `algorithm`, if it was measured.
    pub fn row(&self, algorithm: HashAlgorithm) -> Option<&ReportRow> {
        self.rows.iter().find(|row| row.algorithm == algorithm)
    }

    /// Renders the report as CSV: a `name` header cell followed by the sizes,
    /// then one line per algorithm.
    pub fn to_csv(&self, separator: char) -> String {
        let mut out = String::from("name");
        for size in &self.sizes {
            out.push(separator);
            out.push_str(&size.to_string());
        }
        out.push('\n');

        for row in &self.rows {
            out.push_str(row.algorithm.name());
            for value in &row.values {
                out.push(separator);
                out.push_str(&value.to_string());
            }
            out.push('\n');
        }
        out
    }

    /// Writes the CSV rendering to `path`.
    pub fn write_csv(&self, path: &Path, separator: char) -> Result<(), BenchError> {
        let write_error = |e: std::io::Error| BenchError::ReportWrite {
            path: path.to_path_buf(),
            message: e.to_string(),
        };

        let file = fs::File::create(path).map_err(write_error)?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(self.to_csv(separator).as_bytes())
            .map_err(write_error)?;
        writer.flush().map_err(write_error)?;

        tracing::info!(path = %path.display(), metric = %self.metric, "Report written");
        Ok(())
    }
}

/// Both reports of a benchmark run, as written to the JSON summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchSummary {
    /// Lookup timings
    pub timings: BenchReport,

    /// Collision percentages
    pub collisions: BenchReport,
}

impl BenchSummary {
    /// Serializes the summary as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BenchReport {
        let mut report = BenchReport::new("collision_percent", vec![10, 100]);
        report.push_row(HashAlgorithm::Dummy, vec![20.0, 62.5]);
        report.push_row(HashAlgorithm::Fnv, vec![0.0, 0.0]);
        report
    }

    #[test]
    fn test_csv_layout() {
        let csv = sample().to_csv(';');
        assert_eq!(csv, "name;10;100\ndummy;20;62.5\nfnv;0;0\n");
    }

    #[test]
    fn test_row_lookup() {
        let report = sample();
        assert_eq!(report.row(HashAlgorithm::Dummy).unwrap().values, vec![20.0, 62.5]);
        assert!(report.row(HashAlgorithm::Elf).is_none());
    }

    #[test]
    fn test_write_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("collision.csv");
        sample().write_csv(&path, ',').unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "name,10,100\ndummy,20,62.5\nfnv,0,0\n"
        );
    }

    #[test]
    fn test_write_csv_to_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");
        assert!(matches!(
            sample().write_csv(&path, ';'),
            Err(BenchError::ReportWrite { .. })
        ));
    }

    #[test]
    fn test_summary_json() {
        let summary = BenchSummary {
            timings: BenchReport::new("ns_per_lookup", vec![10, 100]),
            collisions: sample(),
        };
        let json = summary.to_json().unwrap();
        assert!(json.contains("\"dummy\""));
        let parsed: BenchSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, summary);
    }
}
