use crate::chainparams::constants::{baseline, derive_regtest, derive_testnet, derive_unittest};
use crate::chainparams::modifiable::{ModifiableParams, ModifiableSlot};
use crate::chainparams::{ChainParams, Network};
use crate::core::HeaderHasher;
use crate::error::Result;
use crate::utils::current_unix_time;
use log::info;
use rand::Rng;
use std::sync::Arc;

/// How a network's parameters are held. Only the unit test network is
/// stored as [`NetworkEntry::Modifiable`], so production networks have no
/// path to a mutator.
#[derive(Debug)]
pub enum NetworkEntry {
    Fixed(Arc<ChainParams>),
    Modifiable(ModifiableSlot),
}

impl NetworkEntry {
    pub fn params(&self) -> Arc<ChainParams> {
        match self {
            NetworkEntry::Fixed(params) => Arc::clone(params),
            NetworkEntry::Modifiable(slot) => slot.snapshot(),
        }
    }
}

/// Parameters for all four networks, built once at startup
#[derive(Debug)]
pub struct NetworkRegistry {
    entries: [NetworkEntry; 4],
}

impl NetworkRegistry {
    /// Build every network against the wall clock and thread-local randomness
    pub fn new(hasher: &dyn HeaderHasher) -> Result<NetworkRegistry> {
        let now = current_unix_time()?;
        Self::build(hasher, now, &mut rand::thread_rng())
    }

    /// Build every network: mainnet in full, then testnet and unit test from
    /// mainnet and regtest from testnet.
    pub fn build<R: Rng>(
        hasher: &dyn HeaderHasher,
        now: i64,
        rng: &mut R,
    ) -> Result<NetworkRegistry> {
        let main = baseline();
        let testnet = derive_testnet(&main);
        let regtest = derive_regtest(&testnet);
        let unittest = derive_unittest(&main);

        let entries = [
            NetworkEntry::Fixed(Arc::new(ChainParams::build(main, hasher, now, rng)?)),
            NetworkEntry::Fixed(Arc::new(ChainParams::build(testnet, hasher, now, rng)?)),
            NetworkEntry::Fixed(Arc::new(ChainParams::build(regtest, hasher, now, rng)?)),
            NetworkEntry::Modifiable(ModifiableSlot::new(ChainParams::build(
                unittest, hasher, now, rng,
            )?)),
        ];

        info!("Network registry ready (header hash: {})", hasher.name());
        Ok(NetworkRegistry { entries })
    }

    pub fn entry(&self, network: Network) -> &NetworkEntry {
        &self.entries[network.index()]
    }

    pub fn get(&self, network: Network) -> Arc<ChainParams> {
        self.entry(network).params()
    }

    /// Mutators for `network`, if it is stored as modifiable. Callers outside
    /// the crate go through `ChainContext::modifiable_params`, which checks
    /// the active network first.
    pub(crate) fn modifiable(&self, network: Network) -> Option<ModifiableParams<'_>> {
        match self.entry(network) {
            NetworkEntry::Modifiable(slot) => Some(ModifiableParams::new(slot)),
            NetworkEntry::Fixed(_) => None,
        }
    }
}
