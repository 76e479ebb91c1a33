// Copyright (c) 2025 Bucket Lab Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Bounded-bucket hash table with adaptive rehashing.
//!
//! A multimap whose buckets each hold at most `max_bucket_size` keys. The
//! table is generic over its hash function so that hashers of varying quality
//! can be compared on equal terms.
//!
//! # Features
//!
//! - Multimap semantics: one node per key, holding every value for that key
//! - Pluggable hash function via [`KeyHasher`], including plain closures
//! - Dual rehash policy that either grows the table or widens its buckets
//! - Rehash redistribution reuses cached hashes and runs as a loop
//! - Zero unsafe code
//!
//! # Example
//!
//! ```
//! use bucket_lab_lib::data_structures::bucket_table::{BucketTable, BucketTableConfig};
//!
//! // Create a table with default configuration (17 buckets, ceiling 3)
//! let mut table = BucketTable::new();
//!
//! table.emplace("Klopp".to_string(), "Liverpool");
//! table.emplace("Klopp".to_string(), "Dortmund");
//!
//! assert_eq!(table.equal_range("Klopp").len(), 2);
//! assert!(table.equal_range("Guardiola").is_empty());
//!
//! // Tune the rehash threshold
//! let config = BucketTableConfig::new().with_load_factor_multiplier(7);
//! let mut tuned = BucketTable::with_config(config);
//! tuned.emplace(1_u32, 'a');
//! assert_eq!(tuned.equal_range(&1_u32), &['a']);
//! ```
//!
//! # Rehash Strategy
//!
//! An insertion that cannot merge into an existing key and finds its bucket
//! full triggers a rehash:
//!
//! 1. If `occupied_buckets * load_factor_multiplier > bucket_count` the bucket
//!    count doubles and the ceiling returns to its initial value
//! 2. Otherwise the bucket count stays and the ceiling rises by one
//! 3. Every node is moved into the new store using its cached hash
//! 4. The insertion is retried
//!
//! Rehashing happens inside `emplace`; the table is never observable in a
//! partially rebuilt state.

// Module declarations
mod config;
mod hash;
mod node;
mod policy;
mod store;
mod table;

// Re-exports
pub use config::{
    BucketTableConfig, DEFAULT_INITIAL_BUCKET_COUNT, DEFAULT_INITIAL_MAX_BUCKET_SIZE,
    DEFAULT_LOAD_FACTOR_MULTIPLIER, MIN_LOAD_FACTOR_MULTIPLIER,
};
pub use hash::{KeyHasher, StdHash};
pub use policy::{RehashAction, RehashPolicy, StoreShape};
pub use table::{BucketTable, RehashStats};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let mut table = BucketTable::<String, usize>::new();

        table.emplace("hello".to_string(), 1);
        table.emplace("world".to_string(), 2);

        assert_eq!(table.equal_range("hello"), &[1]);
        assert_eq!(table.equal_range("world"), &[2]);
        assert!(table.equal_range("test").is_empty());

        // A repeated key adds a value instead of replacing it
        table.emplace("hello".to_string(), 100);
        assert_eq!(table.equal_range("hello").len(), 2);
    }

    #[test]
    fn test_custom_configuration() {
        let config = BucketTableConfig::new()
            .with_initial_bucket_count(1_000)
            .with_initial_max_bucket_size(8);

        let mut table = BucketTable::<String, u32>::with_config(config);

        table.emplace("test-config".to_string(), 42);
        assert_eq!(table.equal_range("test-config"), &[42]);
        assert_eq!(table.bucket_count(), 1_000);
        assert_eq!(table.max_bucket_size(), 8);
    }
}
