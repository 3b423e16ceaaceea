//! Shared fixtures for chain parameter tests

use crate::chainparams::{ChainContext, NetworkRegistry};
use crate::core::{Hash256, PinnedHasher, Quark};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Mainnet's published genesis identifier
pub const MAIN_GENESIS_HASH: &str =
    "000000772114d8a6c2b9a36be07cc74b05a67db48bdacb1cac16aa96b3f29308";

/// Serialized mainnet genesis header
pub const MAIN_GENESIS_HEADER: &str = "0100000000000000000000000000000000000000000000000000000000000000000000009c3ba5c240e6056e78a4a14e4c8d89f6d9ae468b374f3f4e9ec6899f8232b059405cba5df0ff0f1efdd77d05";

/// Quark digest of the mainnet genesis header, which is not the published id
pub const MAIN_GENESIS_QUARK: &str =
    "31813c0f74006771b673742cd353bb070e6d1e5e385e6d09ddd3c8d204907636";

/// Fixed timestamp so seed dates are reproducible
pub const TEST_NOW: i64 = 1_700_000_000;

/// Quark with the mainnet genesis header pinned to its published identifier.
///
/// Registries can only be built when mainnet's pinned genesis reproduces, so
/// every registry-level test goes through this seam.
pub fn fixture_hasher() -> PinnedHasher<Quark> {
    PinnedHasher::new(Quark).pin(
        hex::decode(MAIN_GENESIS_HEADER).unwrap(),
        Hash256::from_hex(MAIN_GENESIS_HASH).unwrap(),
    )
}

/// Registry built against the fixture hasher with a fixed clock and rng
pub fn create_test_registry() -> NetworkRegistry {
    let mut rng = StdRng::seed_from_u64(2024);
    NetworkRegistry::build(&fixture_hasher(), TEST_NOW, &mut rng).unwrap()
}

/// Context that is not installed globally, so tests can run in parallel
pub fn create_test_context() -> ChainContext {
    ChainContext::new(create_test_registry())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HeaderHasher;

    #[test]
    fn test_fixture_pins_only_the_main_header() {
        let hasher = fixture_hasher();
        let header = hex::decode(MAIN_GENESIS_HEADER).unwrap();
        assert!(hasher.is_pinned(&header));
        assert_eq!(hasher.hash_header(&header).to_string(), MAIN_GENESIS_HASH);
        assert_eq!(hasher.hash_header(b"other"), Quark.hash_header(b"other"));
    }

    #[test]
    fn test_quark_does_not_reproduce_published_main_id() {
        let header = hex::decode(MAIN_GENESIS_HEADER).unwrap();
        let digest = Quark.hash_header(&header);
        assert_eq!(digest.to_string(), MAIN_GENESIS_QUARK);
        assert_ne!(digest.to_string(), MAIN_GENESIS_HASH);
    }
}
