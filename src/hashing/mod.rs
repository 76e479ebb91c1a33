// Copyright (c) 2025 Bucket Lab Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! String hash functions compared by the benchmark harness.
//!
//! Each function is a zero-sized [`KeyHasher`] over anything that exposes its
//! bytes. They range from deliberately poor (a plain byte sum) to the
//! platform default, so that their effect on collisions and on the bucket
//! table's rehash behaviour can be measured.
//!
//! All arithmetic is wrapping 64-bit arithmetic.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::data_structures::bucket_table::{KeyHasher, StdHash};

/// Sum of the key's bytes. Anagrams always collide.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ByteSumHash;

impl<K: AsRef<[u8]> + ?Sized> KeyHasher<K> for ByteSumHash {
    fn hash_key(&self, key: &K) -> u64 {
        key.as_ref()
            .iter()
            .fold(0u64, |hash, &byte| hash.wrapping_add(u64::from(byte)))
    }
}

/// Add-then-subtract-rotation mix with a 13/19 bit split.
///
/// The split matches a 32-bit rotation, so on 64-bit hashes the shifted-out
/// high bits are not folded back in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Rot13Hash;

impl<K: AsRef<[u8]> + ?Sized> KeyHasher<K> for Rot13Hash {
    fn hash_key(&self, key: &K) -> u64 {
        key.as_ref().iter().fold(0u64, |hash, &byte| {
            let hash = hash.wrapping_add(u64::from(byte));
            hash.wrapping_sub((hash << 13) | (hash >> 19))
        })
    }
}

/// The rot13 mix widened to a true 64-bit rotation by 19 bits.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Rot19Hash;

impl<K: AsRef<[u8]> + ?Sized> KeyHasher<K> for Rot19Hash {
    fn hash_key(&self, key: &K) -> u64 {
        key.as_ref().iter().fold(0u64, |hash, &byte| {
            let hash = hash.wrapping_add(u64::from(byte));
            hash.wrapping_sub(hash.rotate_left(19))
        })
    }
}

/// The classic ELF (PJW) string hash used by Unix object file symbol tables.
///
/// Bytes are sign-extended like a signed C `char`, so bytes above 0x7F set
/// bits beyond the low 32 and non-ASCII keys hash differently from an
/// unsigned-byte variant. ASCII keys are unaffected.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ElfHash;

impl<K: AsRef<[u8]> + ?Sized> KeyHasher<K> for ElfHash {
    fn hash_key(&self, key: &K) -> u64 {
        key.as_ref().iter().fold(0u64, |hash, &byte| {
            let mut hash = (hash << 4).wrapping_add(i64::from(byte as i8) as u64);
            let high = hash & 0xF000_0000;
            if high != 0 {
                hash ^= high >> 24;
            }
            hash & !high
        })
    }
}

/// FNV-1a, via the `fnv` crate.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FnvHash;

impl<K: Hash + ?Sized> KeyHasher<K> for FnvHash {
    fn hash_key(&self, key: &K) -> u64 {
        let mut hasher = fnv::FnvHasher::default();
        key.hash(&mut hasher);
        hasher.finish()
    }
}

/// Names every hash function the harness knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// Platform default hasher
    Std,
    /// Byte sum
    Dummy,
    /// 13/19 split rotation mix
    Rot13,
    /// 64-bit rotation mix
    Rot19,
    /// ELF / PJW
    Elf,
    /// FNV-1a
    Fnv,
}

impl HashAlgorithm {
    /// Every algorithm, in report order.
    pub const ALL: [HashAlgorithm; 6] = [
        HashAlgorithm::Std,
        HashAlgorithm::Dummy,
        HashAlgorithm::Rot13,
        HashAlgorithm::Rot19,
        HashAlgorithm::Elf,
        HashAlgorithm::Fnv,
    ];

    /// Name used in reports and configuration files.
    pub fn name(self) -> &'static str {
        match self {
            Self::Std => "std",
            Self::Dummy => "dummy",
            Self::Rot13 => "rot13",
            Self::Rot19 => "rot19",
            Self::Elf => "elf",
            Self::Fnv => "fnv",
        }
    }

    /// Hashes `key` with this algorithm.
    ///
    /// Convenient for one-off hashing; hot loops should use the concrete
    /// hasher types so the call is monomorphised.
    pub fn hash_str(self, key: &str) -> u64 {
        match self {
            Self::Std => StdHash.hash_key(key),
            Self::Dummy => ByteSumHash.hash_key(key),
            Self::Rot13 => Rot13Hash.hash_key(key),
            Self::Rot19 => Rot19Hash.hash_key(key),
            Self::Elf => ElfHash.hash_key(key),
            Self::Fnv => FnvHash.hash_key(key),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown hash algorithm: {s}"))
    }
}
