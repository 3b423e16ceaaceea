// Genesis block construction.
//
// Every network's height-0 block is rebuilt from a handful of compiled-in
// values at startup. The coinbase input embeds a human-readable message, the
// single output pays a fixed public key, and the header links to the all-zero
// hash. Networks that pin their genesis identity abort the process when the
// rebuilt block does not hash to the pinned values.

use crate::core::script::opcodes::OP_CHECKSIG;
use crate::core::{Block, Hash256, HeaderHasher, Script, Transaction};
use crate::error::Result;
use log::{debug, error};
use serde::{Deserialize, Serialize};

/// First coinbase push, the difficulty bits of Bitcoin's own genesis block
pub const GENESIS_SCRIPT_BITS: i64 = 486_604_799;
/// Second coinbase push, always encoded as a data push
pub const GENESIS_SCRIPT_EXTRA_NONCE: i64 = 4;

/// Compiled-in description of a genesis block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisDescriptor {
    pub message: String,
    pub output_value: i64,
    /// Uncompressed public key the output is locked to, as hex
    pub output_pubkey: String,
    pub version: i32,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
    /// Pinned identity; `None` leaves the network's genesis unchecked
    pub check: Option<GenesisCheck>,
}

/// Expected genesis identifier and merkle root in display hex
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisCheck {
    pub hash: String,
    pub merkle_root: String,
}

/// Outcome of comparing a built genesis block against a [`GenesisCheck`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenesisVerdict {
    pub hash_matches: bool,
    pub merkle_root_matches: bool,
}

impl GenesisVerdict {
    pub fn is_valid(&self) -> bool {
        self.hash_matches && self.merkle_root_matches
    }
}

/// A built genesis block together with its identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genesis {
    block: Block,
    hash: Hash256,
}

impl Genesis {
    pub fn get_block(&self) -> &Block {
        &self.block
    }

    pub fn get_hash(&self) -> Hash256 {
        self.hash
    }

    pub fn get_merkle_root(&self) -> Hash256 {
        self.block.get_merkle_root()
    }

    pub fn verify(&self, check: &GenesisCheck) -> Result<GenesisVerdict> {
        let expected_hash = Hash256::from_hex(&check.hash)?;
        let expected_root = Hash256::from_hex(&check.merkle_root)?;
        Ok(GenesisVerdict {
            hash_matches: self.hash == expected_hash,
            merkle_root_matches: self.get_merkle_root() == expected_root,
        })
    }
}

pub struct GenesisBuilder<'a> {
    hasher: &'a dyn HeaderHasher,
}

impl<'a> GenesisBuilder<'a> {
    pub fn new(hasher: &'a dyn HeaderHasher) -> Self {
        GenesisBuilder { hasher }
    }

    pub fn coinbase(descriptor: &GenesisDescriptor) -> Result<Transaction> {
        let script_sig = Script::new()
            .push_int(GENESIS_SCRIPT_BITS)
            .push_num(GENESIS_SCRIPT_EXTRA_NONCE)
            .push_slice(descriptor.message.as_bytes());

        let pubkey = hex::decode(&descriptor.output_pubkey)?;
        let script_pubkey = Script::new().push_slice(&pubkey).push_opcode(OP_CHECKSIG);

        Ok(Transaction::new_coinbase(
            script_sig,
            descriptor.output_value,
            script_pubkey,
        ))
    }

    /// Build the block without looking at `descriptor.check`
    pub fn build(&self, descriptor: &GenesisDescriptor) -> Result<Genesis> {
        let coinbase = Self::coinbase(descriptor)?;
        let block = Block::new_block(
            descriptor.version,
            Hash256::ZERO,
            vec![coinbase],
            descriptor.time,
            descriptor.bits,
            descriptor.nonce,
        )?;
        let hash = block.hash_with(self.hasher);

        debug!(
            "Built genesis block {hash} (merkle root {}, hasher {})",
            block.get_merkle_root(),
            self.hasher.name()
        );

        Ok(Genesis { block, hash })
    }

    /// Build the block and enforce its pinned identity.
    ///
    /// # Panics
    ///
    /// Panics when the descriptor carries a check and the built block does not
    /// match it. A genesis mismatch means the binary's constants are corrupt.
    pub fn build_checked(&self, descriptor: &GenesisDescriptor) -> Result<Genesis> {
        let genesis = self.build(descriptor)?;

        if let Some(check) = &descriptor.check {
            let verdict = genesis.verify(check)?;
            if !verdict.is_valid() {
                error!(
                    "Genesis mismatch: built {} / {}, expected {} / {}",
                    genesis.get_hash(),
                    genesis.get_merkle_root(),
                    check.hash,
                    check.merkle_root
                );
                panic!(
                    "genesis block mismatch: hash {} (expected {}), merkle root {} (expected {})",
                    genesis.get_hash(),
                    check.hash,
                    genesis.get_merkle_root(),
                    check.merkle_root
                );
            }
        }

        Ok(genesis)
    }
}
