//! Test utilities and fixtures for Bucket Lab.
//!
//! Reusable proptest strategies and a fixture for tests that touch the file
//! system or the environment.

use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;
use tempfile::TempDir;

/// Maximum number of operations generated for one property test case.
const MAX_OPERATIONS: usize = 400;

/// Create a temporary directory for test files.
pub fn create_test_dir() -> std::io::Result<TempDir> {
    tempfile::tempdir()
}

/// Keys drawn from a small domain, so that generated operation sequences
/// repeat keys often and exercise the multimap merge path.
pub fn small_key_strategy(domain: u32) -> BoxedStrategy<u32> {
    (0..domain).boxed()
}

/// Sequences of `(key, value)` insertions over a small key domain.
pub fn key_value_strategy(domain: u32) -> BoxedStrategy<Vec<(u32, u32)>> {
    proptest::collection::vec((small_key_strategy(domain), any::<u32>()), 0..MAX_OPERATIONS)
        .boxed()
}

/// Test fixture for tests requiring files and environment variables.
pub struct TestFixture {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
    /// Environment variables to clean up after the test
    env_vars: Vec<String>,
}

impl TestFixture {
    /// Create a new test fixture.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            temp_dir: create_test_dir()?,
            env_vars: Vec::new(),
        })
    }

    /// Set an environment variable for this test.
    ///
    /// The variable is removed when the fixture is dropped.
    pub fn set_env<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key = key.into();
        std::env::set_var(&key, value.into());
        self.env_vars.push(key);
    }

    /// Write `contents` to `name` inside the fixture directory.
    pub fn create_file<C: AsRef<[u8]>>(
        &self,
        name: &str,
        contents: C,
    ) -> std::io::Result<std::path::PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}

impl Drop for TestFixture {
    fn drop(&mut self) {
        for key in &self.env_vars {
            std::env::remove_var(key);
        }
    }
}
