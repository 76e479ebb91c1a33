// Copyright (c) 2025 Bucket Lab Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Bucket store: a fixed-shape sequence of capacity-bounded buckets.
//!
//! The store never changes its own shape. Rehashing is done by the owning
//! table, which builds a new store and moves every node into it.

use std::borrow::Borrow;

use crate::data_structures::bucket_table::node::{bucket_index, Node};
use crate::data_structures::bucket_table::policy::StoreShape;

type Bucket<K, V> = Vec<Node<K, V>>;

/// Outcome of a successful [`BucketStore::place`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Placement {
    /// The key already had a node; the values were merged into it.
    Merged,

    /// A new node was appended to its bucket.
    Inserted,
}

/// Owns the buckets of one table generation.
#[derive(Debug, Clone)]
pub(crate) struct BucketStore<K, V> {
    buckets: Vec<Bucket<K, V>>,
    max_bucket_size: usize,
    occupied: usize,
}

impl<K, V> BucketStore<K, V> {
    /// Creates an empty store with the given shape.
    ///
    /// A zero bucket count or ceiling is raised to 1.
    pub(crate) fn new(shape: StoreShape) -> Self {
        let bucket_count = shape.bucket_count.max(1);
        let mut buckets = Vec::with_capacity(bucket_count);
        buckets.resize_with(bucket_count, Vec::new);
        Self {
            buckets,
            max_bucket_size: shape.max_bucket_size.max(1),
            occupied: 0,
        }
    }

    pub(crate) fn shape(&self) -> StoreShape {
        StoreShape {
            bucket_count: self.buckets.len(),
            max_bucket_size: self.max_bucket_size,
        }
    }

    pub(crate) fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub(crate) fn max_bucket_size(&self) -> usize {
        self.max_bucket_size
    }

    /// Number of buckets holding at least one node.
    pub(crate) fn occupied(&self) -> usize {
        self.occupied
    }

    /// Bucket index for a hash under the current bucket count.
    pub(crate) fn index_of(&self, hash: u64) -> usize {
        bucket_index(hash, self.buckets.len())
    }

    pub(crate) fn bucket_lens(&self) -> impl Iterator<Item = usize> + '_ {
        self.buckets.iter().map(Vec::len)
    }

    pub(crate) fn nodes(&self) -> impl Iterator<Item = &Node<K, V>> + '_ {
        self.buckets.iter().flatten()
    }

    /// Consumes the store, yielding every node exactly once.
    pub(crate) fn into_nodes(self) -> impl Iterator<Item = Node<K, V>> {
        self.buckets.into_iter().flatten()
    }

    /// Finds the node stored under `key`, whose hash is `hash`.
    pub(crate) fn find<Q>(&self, hash: u64, key: &Q) -> Option<&Node<K, V>>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.buckets[self.index_of(hash)]
            .iter()
            .find(|node| node.hash == hash && node.key.borrow() == key)
    }
}

impl<K: Eq, V> BucketStore<K, V> {
    /// Places `node` into its bucket.
    ///
    /// If the bucket already holds a node with an equal key the values are
    /// merged into it. Otherwise the node is appended when the bucket has room.
    /// A full bucket hands the node back unchanged.
    pub(crate) fn place(&mut self, node: Node<K, V>) -> Result<Placement, Node<K, V>> {
        let index = node.index_for(self.buckets.len());
        let bucket = &mut self.buckets[index];

        if let Some(existing) = bucket
            .iter_mut()
            .find(|existing| existing.hash == node.hash && existing.key == node.key)
        {
            existing.merge(node.values);
            return Ok(Placement::Merged);
        }

        if bucket.len() >= self.max_bucket_size {
            return Err(node);
        }

        if bucket.is_empty() {
            self.occupied += 1;
        }
        bucket.push(node);
        Ok(Placement::Inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(bucket_count: usize, max_bucket_size: usize) -> StoreShape {
        StoreShape {
            bucket_count,
            max_bucket_size,
        }
    }

    #[test]
    fn test_place_appends_and_counts_occupied() {
        let mut store = BucketStore::new(shape(4, 2));

        assert_eq!(store.place(Node::new(1, "a", vec![1])), Ok(Placement::Inserted));
        assert_eq!(store.place(Node::new(5, "b", vec![2])), Ok(Placement::Inserted));
        assert_eq!(store.place(Node::new(2, "c", vec![3])), Ok(Placement::Inserted));

        assert_eq!(store.occupied(), 2);
        assert_eq!(store.bucket_lens().collect::<Vec<_>>(), vec![0, 2, 1, 0]);
    }

    #[test]
    fn test_place_merges_equal_keys() {
        let mut store = BucketStore::new(shape(4, 1));

        assert_eq!(store.place(Node::new(3, "a", vec![1])), Ok(Placement::Inserted));
        assert_eq!(store.place(Node::new(3, "a", vec![2, 3])), Ok(Placement::Merged));

        let node = store.find(3, "a").expect("node should exist");
        assert_eq!(node.values.len(), 3);
        assert_eq!(store.occupied(), 1);
    }

    #[test]
    fn test_place_rejects_when_bucket_full() {
        let mut store = BucketStore::new(shape(2, 1));

        assert!(store.place(Node::new(0, "a", vec![1])).is_ok());
        let rejected = store
            .place(Node::new(2, "b", vec![2]))
            .expect_err("bucket should be full");

        assert_eq!(rejected.key, "b");
        assert_eq!(rejected.values, vec![2]);
        assert!(store.find(2, "b").is_none());
    }

    #[test]
    fn test_equal_hash_is_not_equal_key() {
        let mut store = BucketStore::new(shape(1, 4));

        assert!(store.place(Node::new(7, "a", vec![1])).is_ok());
        assert!(store.place(Node::new(7, "b", vec![2])).is_ok());

        assert_eq!(store.find(7, "a").map(|n| n.values.clone()), Some(vec![1]));
        assert_eq!(store.find(7, "b").map(|n| n.values.clone()), Some(vec![2]));
        assert!(store.find(7, "c").is_none());
    }

    #[test]
    fn test_zero_shape_is_raised() {
        let store: BucketStore<&str, i32> = BucketStore::new(shape(0, 0));
        assert_eq!(store.bucket_count(), 1);
        assert_eq!(store.max_bucket_size(), 1);
    }
}
