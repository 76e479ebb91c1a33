// Copyright (c) 2025 Bucket Lab Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! The hash-function capability the bucket table is generic over.
//!
//! The table only ever asks for "a `u64` for this key". Quality of the
//! resulting distribution affects bucket clustering and therefore rehash
//! frequency, never correctness.
//!
//! A hasher must be deterministic for the lifetime of a table: the same key
//! has to produce the same hash on every call. Tables built over a hasher that
//! breaks this rule have unspecified lookup results.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Computes a 64-bit hash for a key.
///
/// Every `Fn(&K) -> u64` closure implements this trait, which makes it easy
/// to plug in stub hashers:
///
/// ```
/// use bucket_lab_lib::data_structures::bucket_table::BucketTable;
///
/// let mut table = BucketTable::with_hasher(|_: &String| 0u64);
/// table.emplace("a".to_string(), 1);
/// table.emplace("b".to_string(), 2);
/// assert_eq!(table.equal_range(&"a".to_string()), &[1]);
/// ```
pub trait KeyHasher<K: ?Sized> {
    /// Returns the hash of `key`.
    fn hash_key(&self, key: &K) -> u64;
}

impl<K: ?Sized, F> KeyHasher<K> for F
where
    F: Fn(&K) -> u64,
{
    fn hash_key(&self, key: &K) -> u64 {
        self(key)
    }
}

/// The platform default hasher (`std`'s SipHash-based `DefaultHasher`).
///
/// Used when a table is created without an explicit hasher.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StdHash;

impl<K: Hash + ?Sized> KeyHasher<K> for StdHash {
    fn hash_key(&self, key: &K) -> u64 {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        hasher.finish()
    }
}
