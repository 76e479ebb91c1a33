//! Data structures for Bucket Lab.
//!
//! This module contains the associative containers benchmarked by the lab
//! harness. All implementations adhere to the project requirements:
//! - No unsafe code
//! - Single-threaded, exclusively owned state
//! - Lookups hand out borrowed views, never aliases into mutable storage

pub mod bucket_table;

// Re-export common data structures
pub use bucket_table::{BucketTable, BucketTableConfig, KeyHasher, StdHash};
