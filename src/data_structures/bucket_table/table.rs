// Copyright (c) 2025 Bucket Lab Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Implementation of the bounded-bucket hash table.
//!
//! Buckets are capacity-bounded. An insertion that would overflow a bucket
//! triggers a rehash, which builds a fresh bucket store with either twice as
//! many buckets or a higher per-bucket ceiling (see
//! [`RehashPolicy`](super::RehashPolicy)) and moves every node into it.

use std::borrow::Borrow;

use tracing::debug;

use crate::data_structures::bucket_table::config::BucketTableConfig;
use crate::data_structures::bucket_table::hash::{KeyHasher, StdHash};
use crate::data_structures::bucket_table::node::Node;
use crate::data_structures::bucket_table::policy::{RehashAction, RehashPolicy, StoreShape};
use crate::data_structures::bucket_table::store::{BucketStore, Placement};

/// Counters describing how often a table has been rebuilt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RehashStats {
    /// Total number of bucket store rebuilds.
    pub rehashes: usize,

    /// Rebuilds that doubled the bucket count.
    pub grows: usize,

    /// Rebuilds that raised the per-bucket ceiling.
    pub widens: usize,
}

impl RehashStats {
    fn record(&mut self, action: RehashAction) {
        self.rehashes += 1;
        match action {
            RehashAction::Grow => self.grows += 1,
            RehashAction::Widen => self.widens += 1,
        }
    }
}

/// A multimap with capacity-bounded buckets and adaptive rehashing.
///
/// Every key owns one node holding all of its values. Lookups return a
/// borrowed slice of those values; the order of values under one key is
/// unspecified.
///
/// # Type Parameters
///
/// * `K` - The key type. Must implement `Eq`.
/// * `V` - The value type.
/// * `H` - The hash-function capability, any [`KeyHasher<K>`].
///
/// # Examples
///
/// ```
/// use bucket_lab_lib::data_structures::bucket_table::BucketTable;
///
/// let mut table = BucketTable::new();
/// table.emplace("Ferguson".to_string(), 1999);
/// table.emplace("Ferguson".to_string(), 2008);
///
/// let mut years = table.equal_range("Ferguson").to_vec();
/// years.sort_unstable();
/// assert_eq!(years, vec![1999, 2008]);
/// assert!(table.equal_range("Wenger").is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct BucketTable<K, V, H = StdHash> {
    /// Buckets of the current table generation
    store: BucketStore<K, V>,

    /// Decides between growing and widening
    policy: RehashPolicy,

    /// Parameters the table was built with
    config: BucketTableConfig,

    /// Hash-function capability
    hasher: H,

    /// Rebuild counters
    stats: RehashStats,

    /// Number of distinct keys
    len: usize,

    /// Number of values across all keys
    value_count: usize,
}

impl<K, V> BucketTable<K, V, StdHash> {
    /// Creates an empty table with the default configuration and hasher.
    pub fn new() -> Self {
        Self::with_config(BucketTableConfig::default())
    }

    /// Creates an empty table with the given configuration and the default hasher.
    pub fn with_config(config: BucketTableConfig) -> Self {
        Self::with_config_and_hasher(config, StdHash)
    }
}

impl<K, V> Default for BucketTable<K, V, StdHash> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, H> BucketTable<K, V, H> {
    /// Creates an empty table with the default configuration and a custom hasher.
    pub fn with_hasher(hasher: H) -> Self {
        Self::with_config_and_hasher(BucketTableConfig::default(), hasher)
    }

    /// Creates an empty table with the given configuration and hasher.
    ///
    /// # Arguments
    ///
    /// * `config` - Initial bucket count, initial ceiling and policy multiplier.
    /// * `hasher` - The hash function used for every key of this table.
    pub fn with_config_and_hasher(config: BucketTableConfig, hasher: H) -> Self {
        let shape = StoreShape {
            bucket_count: config.initial_bucket_count,
            max_bucket_size: config.initial_max_bucket_size,
        };
        Self {
            store: BucketStore::new(shape),
            policy: RehashPolicy::from_config(&config),
            config,
            hasher,
            stats: RehashStats::default(),
            len: 0,
            value_count: 0,
        }
    }

    /// Returns the number of distinct keys.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether the table holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of values stored across all keys.
    pub fn value_count(&self) -> usize {
        self.value_count
    }

    /// Returns the current number of buckets.
    pub fn bucket_count(&self) -> usize {
        self.store.bucket_count()
    }

    /// Returns the current per-bucket node ceiling.
    pub fn max_bucket_size(&self) -> usize {
        self.store.max_bucket_size()
    }

    /// Returns the number of buckets holding at least one key.
    pub fn occupied_bucket_count(&self) -> usize {
        self.store.occupied()
    }

    /// Returns the node count of every bucket, in bucket order.
    pub fn bucket_lens(&self) -> impl Iterator<Item = usize> + '_ {
        self.store.bucket_lens()
    }

    /// Returns how often the table has been rebuilt so far.
    pub fn rehash_stats(&self) -> RehashStats {
        self.stats
    }

    /// Returns the configuration the table was created with.
    pub fn config(&self) -> &BucketTableConfig {
        &self.config
    }

    /// Returns the table's hasher.
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Iterates over every key and its values. Order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &[V])> + '_ {
        self.store
            .nodes()
            .map(|node| (&node.key, node.values.as_slice()))
    }

    /// Bucket `key` belongs to under the current bucket count.
    ///
    /// The index is only valid until the next rehash.
    pub fn index_of<Q>(&self, key: &Q) -> usize
    where
        Q: ?Sized,
        H: KeyHasher<Q>,
    {
        self.store.index_of(self.hasher.hash_key(key))
    }

    /// Returns all values stored under `key`, or an empty slice.
    ///
    /// Never rehashes and never mutates the table.
    pub fn equal_range<Q>(&self, key: &Q) -> &[V]
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: KeyHasher<Q>,
    {
        let hash = self.hasher.hash_key(key);
        self.store
            .find(hash, key)
            .map(|node| node.values.as_slice())
            .unwrap_or(&[])
    }

    /// Returns whether at least one value is stored under `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: KeyHasher<Q>,
    {
        !self.equal_range(key).is_empty()
    }
}

impl<K, V, H> BucketTable<K, V, H>
where
    K: Eq,
    H: KeyHasher<K>,
{
    /// Stores `value` under `key`.
    ///
    /// Never fails: a full bucket triggers a rehash and the insertion is
    /// retried against the rebuilt store.
    pub fn emplace(&mut self, key: K, value: V) {
        self.emplace_many(key, std::iter::once(value));
    }

    /// Stores every value of `values` under `key`.
    ///
    /// An empty `values` leaves the table untouched.
    pub fn emplace_many<I>(&mut self, key: K, values: I)
    where
        I: IntoIterator<Item = V>,
    {
        let values: Vec<V> = values.into_iter().collect();
        if values.is_empty() {
            return;
        }

        let added = values.len();
        let hash = self.hasher.hash_key(&key);
        let mut pending = Node::new(hash, key, values);

        loop {
            match self.store.place(pending) {
                Ok(Placement::Merged) => break,
                Ok(Placement::Inserted) => {
                    self.len += 1;
                    break;
                }
                Err(rejected) => {
                    pending = rejected;
                    self.rehash();
                }
            }
        }

        self.value_count += added;
    }

    /// Rebuilds the store with a new shape and moves every node into it.
    ///
    /// If the new store overflows while being filled, the policy is applied
    /// again to that store and the fill restarts. N never shrinks and the
    /// ceiling strictly grows while N is unchanged, so this terminates.
    fn rehash(&mut self) {
        let mut pending: Vec<Node<K, V>> = Vec::with_capacity(self.len);
        self.rebuild(&mut pending);

        while let Some(node) = pending.pop() {
            if let Err(rejected) = self.store.place(node) {
                pending.push(rejected);
                self.rebuild(&mut pending);
            }
        }
    }

    /// Swaps in an empty store of the next shape, collecting the nodes of the
    /// replaced store into `pending`.
    fn rebuild(&mut self, pending: &mut Vec<Node<K, V>>) {
        let current = self.store.shape();
        let (action, next) = self.policy.next_shape(current, self.store.occupied());

        debug!(
            action = %action,
            from_buckets = current.bucket_count,
            from_max_bucket_size = current.max_bucket_size,
            to_buckets = next.bucket_count,
            to_max_bucket_size = next.max_bucket_size,
            "Rehashing bucket table"
        );
        self.stats.record(action);

        let replaced = std::mem::replace(&mut self.store, BucketStore::new(next));
        pending.extend(replaced.into_nodes());
    }
}

impl<K, V, H> Extend<(K, V)> for BucketTable<K, V, H>
where
    K: Eq,
    H: KeyHasher<K>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.emplace(key, value);
        }
    }
}
