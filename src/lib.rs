//! # BitWin Chain Parameters
//!
//! Everything that makes one of the chain's networks that network: consensus
//! constants, address prefixes, the genesis block, checkpoints, bootstrap
//! peers and the group parameters of the privacy coin subsystem.
//!
//! ## How It Fits Together
//! - `core/`: hashes, scripts, transactions and headers with their consensus
//!   encoding, plus the genesis builder
//! - `chainparams/`: per-network constants and the override chain, the
//!   registry that materializes all four networks and the process context
//!   that selects one of them
//! - `network/`: DNS seeds and fixed seed tables
//! - `zerocoin/`: modulus-derived group parameters, built lazily and once
//! - `config/`: the `--testnet`/`--regtest` flags
//! - `utils/`: hashing, base58 and byte encoding helpers
//! - `cli/`: arguments for the inspection binary
//!
//! ## Startup
//! 1. Build a [`NetworkRegistry`] with the chain's header hasher
//! 2. [`install`] it wrapped in a [`ChainContext`]
//! 3. [`select_params`] (or [`select_params_from_command_line`])
//! 4. Read through [`params`] from then on
//!
//! Mainnet pins its genesis identity. Building the registry with a header
//! hasher that does not reproduce it aborts the process.

pub mod chainparams;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod network;
pub mod utils;
pub mod zerocoin;

#[cfg(test)]
pub mod testing;

// Re-export commonly used types for convenience
pub use chainparams::{
    checkpoints, install, modifiable_params, params, params_for, select_params,
    select_params_from_command_line, Base58Type, ChainContext, ChainParams, CheckpointData,
    ModifiableParams, Network, NetworkRegistry,
};
pub use cli::{Command, Opt};
pub use config::NetworkArgs;
pub use crate::core::{
    DoubleSha256, GenesisBuilder, Hash256, HeaderHasher, PinnedHasher, Quark,
};
pub use error::{ChainParamsError, Result};
pub use zerocoin::{zerocoin_params, ZerocoinParams};
