//! Per-network chain parameters
//!
//! `constants` holds the compiled-in values and the override chain
//! (mainnet, then testnet and unit test derived from it, then regtest from
//! testnet). `ChainParams` materializes one network: genesis block,
//! checkpoints and fixed seeds. `NetworkRegistry` owns all four networks and
//! `ChainContext` tracks which one the process runs on.

pub mod checkpoints;
pub mod constants;
pub mod context;
pub mod modifiable;
pub mod network;
pub mod params;
pub mod registry;

pub use checkpoints::{CheckpointData, CheckpointHash, CheckpointSpec};
pub use constants::{
    baseline, constants_for, derive_regtest, derive_testnet, derive_unittest, Base58Prefixes,
    Base58Type, ChainConstants, ConsensusParams, FixedSeeds, MasternodeParams, PolicyFlags,
    SporkParams, SwapParams, ZerocoinActivation, ZerocoinPolicy, ACTIVATION_DISABLED,
};
pub use context::{
    chain_context, checkpoints, install, modifiable_params, params, params_for, select_params,
    select_params_from_command_line, ChainContext,
};
pub use modifiable::ModifiableParams;
pub use network::Network;
pub use params::ChainParams;
pub use registry::{NetworkEntry, NetworkRegistry};
