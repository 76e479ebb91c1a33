//! Lookup timing.
//!
//! For every size `s`, a bucket table keyed by trainer is filled with the
//! first `s` entries and a fixed sample of trainers drawn from those entries
//! is looked up. Only the lookups are timed.

use std::hint::black_box;
use std::time::Instant;

use hashbrown::HashMap;
use rand::Rng;

use super::{prepare_sizes, BenchReport};
use crate::data_structures::bucket_table::{BucketTable, BucketTableConfig, KeyHasher, StdHash};
use crate::error::bench::BenchError;
use crate::hashing::{ByteSumHash, ElfHash, FnvHash, HashAlgorithm, Rot13Hash, Rot19Hash};
use crate::record::ClubEntry;

/// Metric name of the timing report.
pub const TIMING_METRIC: &str = "ns_per_lookup";

/// Per-size inputs shared by every algorithm.
struct LookupCase<'a> {
    size: usize,
    entries: &'a [ClubEntry],
    picks: Vec<String>,
    expected: HashMap<&'a str, usize>,
}

impl<'a> LookupCase<'a> {
    fn new<R: Rng + ?Sized>(
        all_entries: &'a [ClubEntry],
        size: usize,
        search_count: usize,
        rng: &mut R,
    ) -> Self {
        let entries = &all_entries[..size];

        let mut expected: HashMap<&str, usize> = HashMap::new();
        for entry in entries {
            *expected.entry(entry.trainer.as_str()).or_insert(0) += 1;
        }

        let picks = (0..search_count)
            .map(|_| entries[rng.gen_range(0..size)].trainer.clone())
            .collect();

        Self {
            size,
            entries,
            picks,
            expected,
        }
    }
}

/// Fills a table from `case`, times its lookups and checks every result.
///
/// Returns mean nanoseconds per lookup.
fn time_case<H>(
    algorithm: HashAlgorithm,
    hasher: H,
    config: BucketTableConfig,
    case: &LookupCase<'_>,
) -> Result<f64, BenchError>
where
    H: KeyHasher<String>,
{
    let mut table = BucketTable::with_config_and_hasher(config, hasher);
    for entry in case.entries {
        table.emplace(entry.trainer.clone(), entry.clone());
    }

    let mut lengths = Vec::with_capacity(case.picks.len());
    let start = Instant::now();
    for key in &case.picks {
        lengths.push(black_box(table.equal_range(key)).len());
    }
    let elapsed = start.elapsed();

    for (key, &found) in case.picks.iter().zip(&lengths) {
        let expected = case.expected.get(key.as_str()).copied().unwrap_or(0);
        if found != expected {
            return Err(BenchError::LookupMismatch {
                algorithm: algorithm.name().to_string(),
                size: case.size,
                key: key.clone(),
                found,
                expected,
            });
        }
    }

    let stats = table.rehash_stats();
    tracing::debug!(
        algorithm = %algorithm,
        size = case.size,
        buckets = table.bucket_count(),
        max_bucket_size = table.max_bucket_size(),
        rehashes = stats.rehashes,
        grows = stats.grows,
        widens = stats.widens,
        "Table built"
    );

    Ok(elapsed.as_nanos() as f64 / case.picks.len().max(1) as f64)
}

fn time_with(
    algorithm: HashAlgorithm,
    config: BucketTableConfig,
    case: &LookupCase<'_>,
) -> Result<f64, BenchError> {
    match algorithm {
        HashAlgorithm::Std => time_case(algorithm, StdHash, config, case),
        HashAlgorithm::Dummy => time_case(algorithm, ByteSumHash, config, case),
        HashAlgorithm::Rot13 => time_case(algorithm, Rot13Hash, config, case),
        HashAlgorithm::Rot19 => time_case(algorithm, Rot19Hash, config, case),
        HashAlgorithm::Elf => time_case(algorithm, ElfHash, config, case),
        HashAlgorithm::Fnv => time_case(algorithm, FnvHash, config, case),
    }
}

/// Measures mean lookup time of every algorithm at every size.
///
/// Sizes are capped at the number of entries. The same trainer sample is used
/// for every algorithm at a given size.
pub fn measure_lookup_timings<R>(
    entries: &[ClubEntry],
    sizes: &[usize],
    search_count: usize,
    algorithms: &[HashAlgorithm],
    config: BucketTableConfig,
    rng: &mut R,
) -> Result<BenchReport, BenchError>
where
    R: Rng + ?Sized,
{
    if entries.is_empty() {
        return Err(BenchError::EmptyDataset);
    }

    let sizes = prepare_sizes(sizes, entries.len())?;
    let cases: Vec<LookupCase<'_>> = sizes
        .iter()
        .map(|&size| LookupCase::new(entries, size, search_count, &mut *rng))
        .collect();

    let mut report = BenchReport::new(TIMING_METRIC, sizes);
    for &algorithm in algorithms {
        let values = cases
            .iter()
            .map(|case| time_with(algorithm, config, case))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::info!(algorithm = %algorithm, ns_per_lookup = ?values, "Lookups timed");
        report.push_row(algorithm, values);
    }

    Ok(report)
}
