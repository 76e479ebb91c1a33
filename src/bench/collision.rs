//! Collision counting.
//!
//! Two keys collide when their full 64-bit hashes are equal. The bucket index
//! is not involved, so the numbers describe the hash function alone.

use hashbrown::{HashMap, HashSet};
use rand::seq::SliceRandom;
use rand::Rng;

use super::{prepare_sizes, BenchReport};
use crate::data_structures::bucket_table::{KeyHasher, StdHash};
use crate::error::bench::BenchError;
use crate::hashing::{ByteSumHash, ElfHash, FnvHash, HashAlgorithm, Rot13Hash, Rot19Hash};
use crate::record::ClubEntry;

/// Metric name of the collision report.
pub const COLLISION_METRIC: &str = "collision_percent";

/// Percentage of `keys` whose hash is shared with at least one other key.
///
/// Returns `0.0` for an empty slice.
pub fn collision_percentage<H>(hasher: &H, keys: &[String]) -> f64
where
    H: KeyHasher<str>,
{
    if keys.is_empty() {
        return 0.0;
    }

    let mut counts: HashMap<u64, usize> = HashMap::with_capacity(keys.len());
    for key in keys {
        *counts.entry(hasher.hash_key(key.as_str())).or_insert(0) += 1;
    }

    let colliding: usize = counts.values().filter(|&&count| count > 1).sum();
    colliding as f64 * 100.0 / keys.len() as f64
}

fn percentage_for(algorithm: HashAlgorithm, keys: &[String]) -> f64 {
    match algorithm {
        HashAlgorithm::Std => collision_percentage(&StdHash, keys),
        HashAlgorithm::Dummy => collision_percentage(&ByteSumHash, keys),
        HashAlgorithm::Rot13 => collision_percentage(&Rot13Hash, keys),
        HashAlgorithm::Rot19 => collision_percentage(&Rot19Hash, keys),
        HashAlgorithm::Elf => collision_percentage(&ElfHash, keys),
        HashAlgorithm::Fnv => collision_percentage(&FnvHash, keys),
    }
}

/// Distinct collision keys of `entries` in first-seen order.
pub fn distinct_collision_keys(entries: &[ClubEntry]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(entries.len());
    entries
        .iter()
        .map(ClubEntry::collision_key)
        .filter(|key| seen.insert(key.clone()))
        .collect()
}

/// Measures the collision percentage of every algorithm at every size.
///
/// The distinct collision keys are shuffled once; size `s` hashes the first
/// `s` of them. Sizes are capped at the number of distinct keys.
pub fn measure_collisions<R>(
    entries: &[ClubEntry],
    sizes: &[usize],
    algorithms: &[HashAlgorithm],
    rng: &mut R,
) -> Result<BenchReport, BenchError>
where
    R: Rng + ?Sized,
{
    let mut keys = distinct_collision_keys(entries);
    if keys.is_empty() {
        return Err(BenchError::EmptyDataset);
    }
    keys.shuffle(rng);

    let sizes = prepare_sizes(sizes, keys.len())?;
    let mut report = BenchReport::new(COLLISION_METRIC, sizes.clone());

    for &algorithm in algorithms {
        let values: Vec<f64> = sizes
            .iter()
            .map(|&size| percentage_for(algorithm, &keys[..size]))
            .collect();
        tracing::info!(algorithm = %algorithm, percentages = ?values, "Collisions measured");
        report.push_row(algorithm, values);
    }

    Ok(report)
}
