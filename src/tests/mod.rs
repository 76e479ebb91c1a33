//! Test modules for Bucket Lab.
//!
//! This module contains the crate-level test suites:
//! - Configuration loading and validation
//! - Error reporting
//! - Property-based tests of the bucket table
//! - Shared fixtures and strategies

pub mod bucket_table_tests;
pub mod test_utils;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{key_value_strategy, TestFixture};
