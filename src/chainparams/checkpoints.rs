use crate::core::Hash256;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Where a checkpoint's expected hash comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckpointHash {
    /// The network's own genesis identifier, resolved once genesis is built
    Genesis,
    /// A display-hex literal
    Literal(String),
}

/// Compiled-in checkpoint table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckpointSpec {
    pub entries: Vec<(u32, CheckpointHash)>,
    pub last_checkpoint_time: i64,
    pub transactions_last_checkpoint: u64,
    pub transactions_per_day: f64,
}

/// Resolved checkpoints plus the figures used to estimate sync progress
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckpointData {
    checkpoints: BTreeMap<u32, Hash256>,
    /// UNIX timestamp of the last checkpoint block
    pub last_checkpoint_time: i64,
    /// Total transactions between genesis and the last checkpoint
    pub transactions_last_checkpoint: u64,
    /// Estimated transactions per day after the last checkpoint
    pub transactions_per_day: f64,
}

impl CheckpointData {
    pub fn resolve(spec: &CheckpointSpec, genesis_hash: Hash256) -> Result<CheckpointData> {
        let mut checkpoints = BTreeMap::new();
        for (height, hash) in &spec.entries {
            let resolved = match hash {
                CheckpointHash::Genesis => genesis_hash,
                CheckpointHash::Literal(hex) => Hash256::from_hex(hex)?,
            };
            checkpoints.insert(*height, resolved);
        }

        Ok(CheckpointData {
            checkpoints,
            last_checkpoint_time: spec.last_checkpoint_time,
            transactions_last_checkpoint: spec.transactions_last_checkpoint,
            transactions_per_day: spec.transactions_per_day,
        })
    }

    pub fn get(&self, height: u32) -> Option<&Hash256> {
        self.checkpoints.get(&height)
    }

    /// True when `hash` is acceptable at `height`: either no checkpoint
    /// covers that height or the checkpoint agrees.
    pub fn check_block(&self, height: u32, hash: &Hash256) -> bool {
        self.get(height).map_or(true, |expected| expected == hash)
    }

    pub fn last_height(&self) -> Option<u32> {
        self.checkpoints.keys().next_back().copied()
    }

    /// Checkpoints in ascending height order
    pub fn iter(&self) -> impl Iterator<Item = (u32, &Hash256)> + '_ {
        self.checkpoints.iter().map(|(height, hash)| (*height, hash))
    }

    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }
}
