// Copyright (c) 2025 Bucket Lab Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Rehash policy for the bucket table.
//!
//! When an insertion hits a full bucket the table either has too many
//! occupied buckets for its size, or its hasher is clustering keys into a
//! few hot buckets. The first case is answered by doubling the bucket count
//! (and resetting the per-bucket ceiling), the second by raising the ceiling
//! of every bucket by one while keeping the bucket count.

use std::fmt;

use crate::data_structures::bucket_table::config::{BucketTableConfig, MIN_LOAD_FACTOR_MULTIPLIER};

/// Shape of a bucket store: how many buckets, and how many nodes each may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreShape {
    /// Number of buckets.
    pub bucket_count: usize,

    /// Per-bucket node ceiling.
    pub max_bucket_size: usize,
}

/// What a rehash did to the store shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RehashAction {
    /// Bucket count doubled, ceiling reset to its floor.
    Grow,

    /// Bucket count unchanged, ceiling raised by one.
    Widen,
}

impl fmt::Display for RehashAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grow => write!(f, "grow"),
            Self::Widen => write!(f, "widen"),
        }
    }
}

/// Decides the shape of the next bucket store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RehashPolicy {
    load_factor_multiplier: usize,
    min_max_bucket_size: usize,
}

impl RehashPolicy {
    /// Creates a policy from table construction parameters.
    pub fn from_config(config: &BucketTableConfig) -> Self {
        Self {
            load_factor_multiplier: config
                .load_factor_multiplier
                .max(MIN_LOAD_FACTOR_MULTIPLIER),
            min_max_bucket_size: config.initial_max_bucket_size.max(1),
        }
    }

    /// Picks the action for a store of shape `current` with `occupied`
    /// non-empty buckets.
    pub fn decide(&self, current: StoreShape, occupied: usize) -> RehashAction {
        if occupied.saturating_mul(self.load_factor_multiplier) > current.bucket_count {
            RehashAction::Grow
        } else {
            RehashAction::Widen
        }
    }

    /// Computes the shape the store takes after `action`.
    pub fn apply(&self, current: StoreShape, action: RehashAction) -> StoreShape {
        match action {
            RehashAction::Grow => StoreShape {
                bucket_count: current.bucket_count.saturating_mul(2),
                max_bucket_size: self.min_max_bucket_size,
            },
            RehashAction::Widen => StoreShape {
                bucket_count: current.bucket_count,
                max_bucket_size: current.max_bucket_size.saturating_add(1),
            },
        }
    }

    /// Decides and applies in one step.
    pub fn next_shape(&self, current: StoreShape, occupied: usize) -> (RehashAction, StoreShape) {
        let action = self.decide(current, occupied);
        (action, self.apply(current, action))
    }
}

impl Default for RehashPolicy {
    fn default() -> Self {
        Self::from_config(&BucketTableConfig::default())
    }
}
