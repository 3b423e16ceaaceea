//! Helpers shared by the integration tests

#![allow(dead_code)]

use bitwin_chainparams::chainparams::NetworkRegistry;
use bitwin_chainparams::core::{Hash256, PinnedHasher, Quark};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub const MAIN_GENESIS_HASH: &str =
    "000000772114d8a6c2b9a36be07cc74b05a67db48bdacb1cac16aa96b3f29308";
pub const MAIN_GENESIS_HEADER: &str = "0100000000000000000000000000000000000000000000000000000000000000000000009c3ba5c240e6056e78a4a14e4c8d89f6d9ae468b374f3f4e9ec6899f8232b059405cba5df0ff0f1efdd77d05";

/// Quark with mainnet's published genesis identifier pinned to its header
pub fn pinned_hasher() -> PinnedHasher<Quark> {
    PinnedHasher::new(Quark).pin(
        hex::decode(MAIN_GENESIS_HEADER).unwrap(),
        Hash256::from_hex(MAIN_GENESIS_HASH).unwrap(),
    )
}

pub fn registry(seed: u64, now: i64) -> NetworkRegistry {
    let mut rng = StdRng::seed_from_u64(seed);
    NetworkRegistry::build(&pinned_hasher(), now, &mut rng).unwrap()
}
