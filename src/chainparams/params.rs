use crate::chainparams::checkpoints::CheckpointData;
use crate::chainparams::constants::{
    Base58Prefixes, Base58Type, ChainConstants, ConsensusParams, MasternodeParams, PolicyFlags,
    SporkParams, SwapParams, ZerocoinActivation, ZerocoinPolicy,
};
use crate::chainparams::Network;
use crate::core::{Block, Genesis, GenesisBuilder, Hash256, HeaderHasher};
use crate::error::{ChainParamsError, Result};
use crate::network::{convert_seed6, DnsSeed, PeerAddress};
use crate::utils::base58check_decode;
use crate::zerocoin::{zerocoin_params, ZerocoinParams};
use log::{error, info};
use rand::Rng;
use std::sync::Arc;

/// A network's constants together with everything computed from them at
/// startup: the genesis block, the resolved checkpoints and the dated fixed
/// seeds.
#[derive(Debug, Clone)]
pub struct ChainParams {
    constants: ChainConstants,
    genesis: Genesis,
    checkpoints: Arc<CheckpointData>,
    fixed_seeds: Vec<PeerAddress>,
    alert_pubkey: Vec<u8>,
}

impl ChainParams {
    /// Materialize `constants`.
    ///
    /// # Panics
    ///
    /// Panics when the network pins its genesis identity and the block built
    /// from the constants does not match it, or when a height 0 checkpoint
    /// names some other block.
    pub fn build<R: Rng>(
        constants: ChainConstants,
        hasher: &dyn HeaderHasher,
        now: i64,
        rng: &mut R,
    ) -> Result<ChainParams> {
        if !constants.zerocoin_activation.is_consistent() {
            return Err(ChainParamsError::InconsistentParams(format!(
                "{}: zerocoin activations mix disabled and enabled values",
                constants.network
            )));
        }

        let genesis = GenesisBuilder::new(hasher).build_checked(&constants.genesis)?;
        let checkpoints = CheckpointData::resolve(&constants.checkpoints, genesis.get_hash())?;

        if let Some(anchor) = checkpoints.get(0) {
            if *anchor != genesis.get_hash() {
                error!(
                    "{}: checkpoint at height 0 ({anchor}) disagrees with genesis {}",
                    constants.network,
                    genesis.get_hash()
                );
                panic!(
                    "{}: height 0 checkpoint {anchor} is not the genesis block {}",
                    constants.network,
                    genesis.get_hash()
                );
            }
        }

        let dummy = base58check_decode(&constants.masternode.obfuscation_pool_dummy_address)?;
        if !dummy.starts_with(&constants.base58_prefixes.pubkey_address) {
            return Err(ChainParamsError::InconsistentParams(format!(
                "{}: obfuscation pool address does not use the public key prefix",
                constants.network
            )));
        }

        let alert_pubkey = hex::decode(&constants.alert_pubkey)?;
        let fixed_seeds = convert_seed6(constants.fixed_seeds.table(), now, rng);

        info!(
            "Built {} parameters: genesis {}, {} checkpoints, {} fixed seeds",
            constants.network,
            genesis.get_hash(),
            checkpoints.len(),
            fixed_seeds.len()
        );

        Ok(ChainParams {
            constants,
            genesis,
            checkpoints: Arc::new(checkpoints),
            fixed_seeds,
            alert_pubkey,
        })
    }

    pub fn constants(&self) -> &ChainConstants {
        &self.constants
    }

    pub(crate) fn constants_mut(&mut self) -> &mut ChainConstants {
        &mut self.constants
    }

    pub fn network(&self) -> Network {
        self.constants.network
    }

    pub fn network_id(&self) -> &'static str {
        self.constants.network.id()
    }

    pub fn message_start(&self) -> [u8; 4] {
        self.constants.message_start
    }

    pub fn alert_pubkey(&self) -> &[u8] {
        &self.alert_pubkey
    }

    pub fn default_port(&self) -> u16 {
        self.constants.default_port
    }

    pub fn consensus(&self) -> &ConsensusParams {
        &self.constants.consensus
    }

    pub fn swap(&self) -> &SwapParams {
        &self.constants.swap
    }

    pub fn zerocoin_activation(&self) -> &ZerocoinActivation {
        &self.constants.zerocoin_activation
    }

    pub fn zerocoin_policy(&self) -> &ZerocoinPolicy {
        &self.constants.zerocoin
    }

    /// Shared privacy-coin group parameters, built on first use
    pub fn zerocoin_params(&self, use_modulus_v1: bool) -> Result<&'static ZerocoinParams> {
        zerocoin_params(use_modulus_v1)
    }

    pub fn spork(&self) -> &SporkParams {
        &self.constants.spork
    }

    pub fn masternode(&self) -> &MasternodeParams {
        &self.constants.masternode
    }

    pub fn base58_prefixes(&self) -> &Base58Prefixes {
        &self.constants.base58_prefixes
    }

    pub fn base58_prefix(&self, kind: Base58Type) -> &[u8] {
        self.constants.base58_prefixes.get(kind)
    }

    pub fn dns_seeds(&self) -> &[DnsSeed] {
        &self.constants.dns_seeds
    }

    pub fn fixed_seeds(&self) -> &[PeerAddress] {
        &self.fixed_seeds
    }

    pub fn policy(&self) -> &PolicyFlags {
        &self.constants.policy
    }

    pub fn mining_requires_peers(&self) -> bool {
        self.constants.policy.mining_requires_peers
    }

    pub fn allow_min_difficulty_blocks(&self) -> bool {
        self.constants.policy.allow_min_difficulty_blocks
    }

    pub fn default_consistency_checks(&self) -> bool {
        self.constants.policy.default_consistency_checks
    }

    pub fn require_standard(&self) -> bool {
        self.constants.policy.require_standard
    }

    pub fn mine_blocks_on_demand(&self) -> bool {
        self.constants.policy.mine_blocks_on_demand
    }

    pub fn skip_proof_of_work_check(&self) -> bool {
        self.constants.policy.skip_proof_of_work_check
    }

    pub fn genesis_block(&self) -> &Block {
        self.genesis.get_block()
    }

    pub fn hash_genesis_block(&self) -> Hash256 {
        self.genesis.get_hash()
    }

    pub fn checkpoints(&self) -> Arc<CheckpointData> {
        Arc::clone(&self.checkpoints)
    }
}
