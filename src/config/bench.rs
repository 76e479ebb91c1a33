//! Benchmark harness configuration module.

use serde::{Deserialize, Serialize};

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use crate::hashing::HashAlgorithm;
use crate::record::DEFAULT_SEPARATOR;

/// Benchmark harness configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BenchConfig {
    /// Number of random lookups timed per dataset size
    pub search_count: usize,

    /// CSV field separator for input records and result files
    pub separator: char,

    /// Seed for sampling and shuffling; a random seed is used when unset
    pub seed: Option<u64>,

    /// Hash algorithms to benchmark, in report order
    pub algorithms: Vec<HashAlgorithm>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            search_count: 1000,
            separator: DEFAULT_SEPARATOR,
            seed: None,
            algorithms: HashAlgorithm::ALL.to_vec(),
        }
    }
}

impl Validate for BenchConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.search_count == 0 {
            return Err(ConfigError::ValidationError(
                "search_count must be greater than 0".to_string(),
            ));
        }

        if self.separator.is_alphanumeric() || self.separator == '\n' || self.separator == '\r' {
            return Err(ConfigError::ValidationError(format!(
                "separator {:?} cannot be alphanumeric or a line break",
                self.separator
            )));
        }

        if self.algorithms.is_empty() {
            return Err(ConfigError::ValidationError(
                "at least one hash algorithm must be selected".to_string(),
            ));
        }

        Ok(())
    }
}
