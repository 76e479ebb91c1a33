//! Bucket table configuration module.
//!
//! Mirrors [`BucketTableConfig`] in a serializable form so the table
//! parameters can be set from files and environment variables, e.g.
//! `BUCKET_LAB__TABLE__LOAD_FACTOR_MULTIPLIER=7`.

use serde::{Deserialize, Serialize};

use super::{ConfigResult, Validate};
use crate::data_structures::bucket_table::{
    BucketTableConfig, DEFAULT_INITIAL_BUCKET_COUNT, DEFAULT_INITIAL_MAX_BUCKET_SIZE,
    DEFAULT_LOAD_FACTOR_MULTIPLIER, MIN_LOAD_FACTOR_MULTIPLIER,
};
use crate::error::config::ConfigError;

/// Upper bound for the initial bucket count, to keep a typo from allocating
/// gigabytes up front.
const MAX_INITIAL_BUCKET_COUNT: usize = 1 << 24;

/// Bucket table configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableConfig {
    /// Number of buckets a new table starts with
    pub initial_bucket_count: usize,

    /// Per-bucket node ceiling of a new table, and the floor it resets to on growth
    pub initial_max_bucket_size: usize,

    /// Growth is chosen when `occupied * load_factor_multiplier > bucket_count`
    pub load_factor_multiplier: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            initial_bucket_count: DEFAULT_INITIAL_BUCKET_COUNT,
            initial_max_bucket_size: DEFAULT_INITIAL_MAX_BUCKET_SIZE,
            load_factor_multiplier: DEFAULT_LOAD_FACTOR_MULTIPLIER,
        }
    }
}

impl Validate for TableConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.initial_bucket_count == 0 || self.initial_bucket_count > MAX_INITIAL_BUCKET_COUNT {
            return Err(ConfigError::ValueOutOfRange {
                key: "table.initial_bucket_count".to_string(),
                message: format!("must be between 1 and {MAX_INITIAL_BUCKET_COUNT}"),
            });
        }

        if self.initial_max_bucket_size == 0 {
            return Err(ConfigError::ValidationError(
                "initial_max_bucket_size must be greater than 0".to_string(),
            ));
        }

        if self.load_factor_multiplier < MIN_LOAD_FACTOR_MULTIPLIER {
            return Err(ConfigError::ValueOutOfRange {
                key: "table.load_factor_multiplier".to_string(),
                message: format!("must be at least {MIN_LOAD_FACTOR_MULTIPLIER}"),
            });
        }

        Ok(())
    }
}

impl From<TableConfig> for BucketTableConfig {
    fn from(config: TableConfig) -> Self {
        BucketTableConfig::new()
            .with_initial_bucket_count(config.initial_bucket_count)
            .with_initial_max_bucket_size(config.initial_max_bucket_size)
            .with_load_factor_multiplier(config.load_factor_multiplier)
    }
}
