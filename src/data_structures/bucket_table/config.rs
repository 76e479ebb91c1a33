// Copyright (c) 2025 Bucket Lab Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Construction parameters for the bucket table.

/// Default number of buckets a fresh table starts with.
pub const DEFAULT_INITIAL_BUCKET_COUNT: usize = 17;

/// Default per-bucket node ceiling, also the floor it is reset to on growth.
pub const DEFAULT_INITIAL_MAX_BUCKET_SIZE: usize = 3;

/// Default multiplier applied to the occupied bucket count when deciding
/// between growing and widening.
pub const DEFAULT_LOAD_FACTOR_MULTIPLIER: usize = 4;

/// Smallest usable multiplier. With 1 the occupied bucket count can never
/// exceed the bucket count, so the table would only ever widen.
pub const MIN_LOAD_FACTOR_MULTIPLIER: usize = 2;

/// Configuration for a [`BucketTable`](super::BucketTable).
///
/// The builder methods clamp the bucket count and ceiling to at least 1 and
/// the multiplier to at least [`MIN_LOAD_FACTOR_MULTIPLIER`], so a table built
/// from any configuration has at least one bucket, room for one node per
/// bucket, and a reachable grow branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketTableConfig {
    /// Number of buckets allocated at construction.
    pub initial_bucket_count: usize,

    /// Per-bucket node ceiling at construction.
    /// Growing the table resets the ceiling back to this value.
    pub initial_max_bucket_size: usize,

    /// The table grows when `occupied_buckets * load_factor_multiplier`
    /// exceeds the bucket count, and widens its buckets otherwise.
    pub load_factor_multiplier: usize,
}

impl BucketTableConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of buckets allocated at construction.
    ///
    /// # Arguments
    ///
    /// * `initial_bucket_count` - The initial number of buckets (at least 1).
    ///
    /// # Returns
    ///
    /// Self with the updated configuration.
    pub fn with_initial_bucket_count(mut self, initial_bucket_count: usize) -> Self {
        self.initial_bucket_count = initial_bucket_count.max(1);
        self
    }

    /// Sets the initial per-bucket node ceiling.
    ///
    /// # Arguments
    ///
    /// * `initial_max_bucket_size` - The initial ceiling (at least 1).
    ///
    /// # Returns
    ///
    /// Self with the updated configuration.
    pub fn with_initial_max_bucket_size(mut self, initial_max_bucket_size: usize) -> Self {
        self.initial_max_bucket_size = initial_max_bucket_size.max(1);
        self
    }

    /// Sets the multiplier used by the rehash policy.
    ///
    /// Larger values make the table prefer growing over widening. Values
    /// below [`MIN_LOAD_FACTOR_MULTIPLIER`] are raised to it.
    pub fn with_load_factor_multiplier(mut self, load_factor_multiplier: usize) -> Self {
        self.load_factor_multiplier = load_factor_multiplier.max(MIN_LOAD_FACTOR_MULTIPLIER);
        self
    }
}

impl Default for BucketTableConfig {
    fn default() -> Self {
        Self {
            initial_bucket_count: DEFAULT_INITIAL_BUCKET_COUNT,
            initial_max_bucket_size: DEFAULT_INITIAL_MAX_BUCKET_SIZE,
            load_factor_multiplier: DEFAULT_LOAD_FACTOR_MULTIPLIER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BucketTableConfig::default();
        assert_eq!(config.initial_bucket_count, 17);
        assert_eq!(config.initial_max_bucket_size, 3);
        assert_eq!(config.load_factor_multiplier, 4);
    }

    #[test]
    fn test_config_builder() {
        let config = BucketTableConfig::new()
            .with_initial_bucket_count(64)
            .with_initial_max_bucket_size(5)
            .with_load_factor_multiplier(7);

        assert_eq!(config.initial_bucket_count, 64);
        assert_eq!(config.initial_max_bucket_size, 5);
        assert_eq!(config.load_factor_multiplier, 7);
    }

    #[test]
    fn test_zero_values_are_clamped() {
        let config = BucketTableConfig::new()
            .with_initial_bucket_count(0)
            .with_initial_max_bucket_size(0)
            .with_load_factor_multiplier(0);

        assert_eq!(config.initial_bucket_count, 1);
        assert_eq!(config.initial_max_bucket_size, 1);
        assert_eq!(config.load_factor_multiplier, MIN_LOAD_FACTOR_MULTIPLIER);
    }

    #[test]
    fn test_multiplier_of_one_is_raised() {
        let config = BucketTableConfig::new().with_load_factor_multiplier(1);
        assert_eq!(config.load_factor_multiplier, 2);
    }
}
