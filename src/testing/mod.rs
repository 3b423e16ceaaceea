//! Test fixtures
//!
//! A header hasher with the published mainnet genesis identity pinned,
//! and registries and contexts built with a fixed clock and rng.

pub mod test_utils;

pub use test_utils::*;
