//! Benchmark harness for the bucket table.
//!
//! Two measurements are taken for each hash algorithm at each dataset size:
//!
//! - [`timing`]: mean time of a random trainer lookup in a [`BucketTable`]
//!   built from the first `s` entries.
//! - [`collision`]: the share of distinct entry keys whose 64-bit hash is not
//!   unique.
//!
//! Results are collected in [`BenchReport`] tables, one row per algorithm and
//! one column per size.
//!
//! [`BucketTable`]: crate::data_structures::BucketTable

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::bench::BenchConfig;
use crate::data_structures::BucketTableConfig;
use crate::error::bench::BenchError;
use crate::record::{shrink_sizes, ClubEntry};

pub mod collision;
pub mod report;
pub mod timing;

pub use collision::{collision_percentage, measure_collisions};
pub use report::{BenchReport, BenchSummary, ReportRow};
pub use timing::measure_lookup_timings;

/// Caps `sizes` at `limit`, sorts them and drops duplicates and zeros.
pub(crate) fn prepare_sizes(sizes: &[usize], limit: usize) -> Result<Vec<usize>, BenchError> {
    let mut sizes = sizes.to_vec();
    shrink_sizes(&mut sizes, limit);
    sizes.retain(|&size| size > 0);

    if sizes.is_empty() {
        return Err(BenchError::NoSizes);
    }
    Ok(sizes)
}

/// Runs both measurements with the settings of `config`.
///
/// A seeded run is reproducible apart from the timings themselves.
pub fn run_benchmarks(
    entries: &[ClubEntry],
    sizes: &[usize],
    config: &BenchConfig,
    table_config: BucketTableConfig,
) -> Result<BenchSummary, BenchError> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    tracing::info!(
        entries = entries.len(),
        sizes = ?sizes,
        search_count = config.search_count,
        algorithms = config.algorithms.len(),
        "Starting benchmark run"
    );

    let timings = measure_lookup_timings(
        entries,
        sizes,
        config.search_count,
        &config.algorithms,
        table_config,
        &mut rng,
    )?;
    let collisions = measure_collisions(entries, sizes, &config.algorithms, &mut rng)?;

    Ok(BenchSummary {
        timings,
        collisions,
    })
}
