//! Property-based tests for the bucket table.
//!
//! Random insertion sequences are checked against a reference multimap after
//! every operation, under a well-mixed hash and under a deliberately poor one
//! that forces the widening path.

use std::collections::HashMap;

use proptest::prelude::*;

use crate::data_structures::{BucketTable, BucketTableConfig, KeyHasher};
use crate::tests::key_value_strategy;

/// Maps keys onto three hash values only.
fn three_way_hash(key: &u32) -> u64 {
    u64::from(*key % 3)
}

fn assert_structure<H: KeyHasher<u32>>(
    table: &BucketTable<u32, u32, H>,
    reference: &HashMap<u32, Vec<u32>>,
    inserted: usize,
) -> Result<(), TestCaseError> {
    let lens: Vec<usize> = table.bucket_lens().collect();

    prop_assert_eq!(lens.len(), table.bucket_count());
    prop_assert!(lens.iter().all(|&len| len <= table.max_bucket_size()));
    prop_assert_eq!(
        table.occupied_bucket_count(),
        lens.iter().filter(|&&len| len > 0).count()
    );
    prop_assert_eq!(lens.iter().sum::<usize>(), reference.len());
    prop_assert_eq!(table.len(), reference.len());
    prop_assert_eq!(table.value_count(), inserted);
    Ok(())
}

fn assert_contents<H: KeyHasher<u32>>(
    table: &BucketTable<u32, u32, H>,
    reference: &HashMap<u32, Vec<u32>>,
    domain: u32,
) -> Result<(), TestCaseError> {
    for key in 0..domain {
        let mut found = table.equal_range(&key).to_vec();
        let mut expected = reference.get(&key).cloned().unwrap_or_default();
        found.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(found, expected, "key {}", key);
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_std_hash_matches_reference(ops in key_value_strategy(64)) {
        let mut table = BucketTable::new();
        let mut reference: HashMap<u32, Vec<u32>> = HashMap::new();

        for (index, &(key, value)) in ops.iter().enumerate() {
            table.emplace(key, value);
            reference.entry(key).or_default().push(value);
            assert_structure(&table, &reference, index + 1)?;
        }
        assert_contents(&table, &reference, 64)?;
    }

    #[test]
    fn prop_poor_hash_matches_reference(ops in key_value_strategy(40)) {
        let mut table = BucketTable::with_hasher(three_way_hash);
        let mut reference: HashMap<u32, Vec<u32>> = HashMap::new();

        for (index, &(key, value)) in ops.iter().enumerate() {
            table.emplace(key, value);
            reference.entry(key).or_default().push(value);
            assert_structure(&table, &reference, index + 1)?;
        }
        assert_contents(&table, &reference, 40)?;
    }

    #[test]
    fn prop_shape_only_moves_forward(ops in key_value_strategy(500)) {
        let mut table = BucketTable::new();
        let mut bucket_count = table.bucket_count();

        for (key, value) in ops {
            let before = table.rehash_stats();
            let ceiling = table.max_bucket_size();
            table.emplace(key, value);
            let after = table.rehash_stats();

            prop_assert!(table.bucket_count() >= bucket_count);
            prop_assert_eq!(after.rehashes, after.grows + after.widens);
            if after.grows == before.grows && after.widens > before.widens {
                prop_assert!(table.max_bucket_size() > ceiling);
            }
            prop_assert!(table.max_bucket_size() >= table.config().initial_max_bucket_size);
            bucket_count = table.bucket_count();
        }
    }

    #[test]
    fn prop_emplace_many_equals_repeated_emplace(
        key in 0u32..16,
        values in proptest::collection::vec(any::<u32>(), 0..20),
    ) {
        let config = BucketTableConfig::new().with_initial_bucket_count(3);
        let mut bulk = BucketTable::with_config(config);
        let mut single = BucketTable::with_config(config);

        bulk.emplace_many(key, values.clone());
        for value in values.iter().copied() {
            single.emplace(key, value);
        }

        prop_assert_eq!(bulk.equal_range(&key), single.equal_range(&key));
        prop_assert_eq!(bulk.value_count(), values.len());
        prop_assert_eq!(bulk.len(), usize::from(!values.is_empty()));
    }
}
