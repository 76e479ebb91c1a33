// Copyright (c) 2025 Bucket Lab Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the bucket table.
//!
//! A node is the per-key record inside a bucket. It carries the key's hash so
//! that redistribution during a rehash never has to call the hasher again.

/// A key together with its cached hash and every value stored under it.
///
/// # Type Parameters
///
/// * `K` - Type of the key.
/// * `V` - Type of the values associated with the key.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Node<K, V> {
    /// Hash of `key`, computed once on insertion.
    pub(crate) hash: u64,

    /// The key this node stores values for.
    pub(crate) key: K,

    /// Values stored under `key`. Order is unspecified.
    pub(crate) values: Vec<V>,
}

impl<K, V> Node<K, V> {
    /// Creates a new node for a key whose hash is already known.
    pub(crate) fn new(hash: u64, key: K, values: Vec<V>) -> Self {
        Self { hash, key, values }
    }

    /// Bucket index of this node for a store of `bucket_count` buckets.
    pub(crate) fn index_for(&self, bucket_count: usize) -> usize {
        bucket_index(self.hash, bucket_count)
    }

    /// Moves `values` into this node.
    pub(crate) fn merge(&mut self, values: Vec<V>) {
        self.values.extend(values);
    }
}

/// Maps a hash onto one of `bucket_count` buckets.
///
/// `bucket_count` must be non-zero.
pub(crate) fn bucket_index(hash: u64, bucket_count: usize) -> usize {
    debug_assert!(bucket_count > 0);
    // The remainder is below bucket_count, so it always fits back in usize.
    (hash % bucket_count as u64) as usize
}
