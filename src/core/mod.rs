//! Core block primitives
//!
//! Hashes, scripts, transactions and headers with their consensus encoding,
//! the merkle root, the pluggable header hash and genesis construction.

pub mod block;
pub mod genesis;
pub mod hash;
pub mod hasher;
pub mod merkle;
pub mod monetary;
pub mod quark;
pub mod script;
pub mod transaction;

pub use block::{Block, BlockHeader, HEADER_SIZE};
pub use genesis::{Genesis, GenesisBuilder, GenesisCheck, GenesisDescriptor, GenesisVerdict};
pub use hash::Hash256;
pub use hasher::{DoubleSha256, HeaderHasher, PinnedHasher};
pub use merkle::MerkleTree;
pub use monetary::{Amount, CENT, COIN};
pub use quark::Quark;
pub use script::Script;
pub use transaction::{OutPoint, Transaction, TxIn, TxOut};
