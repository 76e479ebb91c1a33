//! Bucket Lab Benchmarks
//!
//! Criterion benchmarks of the bucket table under each hash function. The
//! keys are trainer names from a seeded synthetic dataset, so heavy key
//! repetition and short strings match what the lab harness measures.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, SamplingMode,
    Throughput,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

use bucket_lab_lib::data_structures::bucket_table::{BucketTable, KeyHasher, StdHash};
use bucket_lab_lib::hashing::{ByteSumHash, ElfHash, FnvHash, HashAlgorithm, Rot13Hash, Rot19Hash};
use bucket_lab_lib::record::generate::generate_entries;

const SIZES: [usize; 3] = [100, 1_000, 10_000];

fn trainers(size: usize) -> Vec<String> {
    generate_entries(size, &mut StdRng::seed_from_u64(2024))
        .into_iter()
        .map(|entry| entry.trainer)
        .collect()
}

fn fill<H: KeyHasher<String>>(hasher: H, keys: &[String]) -> BucketTable<String, usize, H> {
    let mut table = BucketTable::with_hasher(hasher);
    for (index, key) in keys.iter().enumerate() {
        table.emplace(key.clone(), index);
    }
    table
}

fn bench_algorithm<H>(c: &mut Criterion, algorithm: HashAlgorithm, hasher: H)
where
    H: KeyHasher<String> + Clone,
{
    let mut group = c.benchmark_group(format!("bucket_table/{algorithm}"));
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for size in SIZES {
        let keys = trainers(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("emplace", size), &keys, |b, keys| {
            b.iter_batched(
                || hasher.clone(),
                |hasher| black_box(fill(hasher, keys)),
                BatchSize::SmallInput,
            );
        });

        let table = fill(hasher.clone(), &keys);
        group.bench_with_input(BenchmarkId::new("equal_range", size), &keys, |b, keys| {
            b.iter(|| {
                for key in keys {
                    black_box(table.equal_range(key));
                }
            });
        });
    }

    group.finish();
}

fn bench_bucket_table(c: &mut Criterion) {
    bench_algorithm(c, HashAlgorithm::Std, StdHash);
    bench_algorithm(c, HashAlgorithm::Dummy, ByteSumHash);
    bench_algorithm(c, HashAlgorithm::Rot13, Rot13Hash);
    bench_algorithm(c, HashAlgorithm::Rot19, Rot19Hash);
    bench_algorithm(c, HashAlgorithm::Elf, ElfHash);
    bench_algorithm(c, HashAlgorithm::Fnv, FnvHash);
}

criterion_group!(benches, bench_bucket_table);
criterion_main!(benches);
