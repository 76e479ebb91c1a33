//! Bucket Lab Library
//!
//! A hash table with bounded buckets and adaptive rehashing, together with
//! the tooling used to study it: a family of string hash functions, club
//! entry records, and a benchmark harness comparing lookup time and collision
//! rates across hash functions and dataset sizes.
//!
//! # Architecture
//!
//! - [`data_structures::bucket_table`]: the multimap itself. It has no I/O and
//!   no failure modes, and does not depend on the rest of the crate.
//! - [`hashing`]: hash functions pluggable into the table.
//! - [`record`]: CSV records and dataset sizes.
//! - [`bench`]: measurements and report tables.
//! - [`config`] and [`error`]: layered configuration and error reporting for
//!   the `bucket-lab` binary.

pub mod bench;
pub mod config;
pub mod data_structures;
pub mod error;
pub mod hashing;
pub mod record;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Bucket Lab.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
