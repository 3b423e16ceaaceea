use crate::core::{Hash256, HeaderHasher, MerkleTree, Transaction};
use crate::error::{ChainParamsError, Result};
use crate::utils::{serialize, Encodable};
use serde::{Deserialize, Serialize};

pub const HEADER_SIZE: usize = 80;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    pub version: i32,
    pub prev_block_hash: Hash256,
    pub merkle_root: Hash256,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
}

impl BlockHeader {
    pub fn to_bytes(&self) -> Vec<u8> {
        serialize(self)
    }

    pub fn hash_with(&self, hasher: &dyn HeaderHasher) -> Hash256 {
        hasher.hash_header(&self.to_bytes())
    }
}

impl Encodable for BlockHeader {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        self.version.consensus_encode(out);
        self.prev_block_hash.consensus_encode(out);
        self.merkle_root.consensus_encode(out);
        self.time.consensus_encode(out);
        self.bits.consensus_encode(out);
        self.nonce.consensus_encode(out);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    header: BlockHeader,
    transactions: Vec<Transaction>,
}

impl Block {
    /// Assemble a block on top of `prev_block_hash`, committing to `transactions`
    pub fn new_block(
        version: i32,
        prev_block_hash: Hash256,
        transactions: Vec<Transaction>,
        time: u32,
        bits: u32,
        nonce: u32,
    ) -> Result<Block> {
        if transactions.is_empty() {
            return Err(ChainParamsError::InvalidBlock(
                "Block must contain at least one transaction".to_string(),
            ));
        }

        let merkle_root = Self::calculate_merkle_root(&transactions)?;

        Ok(Block {
            header: BlockHeader {
                version,
                prev_block_hash,
                merkle_root,
                time,
                bits,
                nonce,
            },
            transactions,
        })
    }

    pub fn get_header(&self) -> &BlockHeader {
        &self.header
    }

    pub fn get_transactions(&self) -> &[Transaction] {
        self.transactions.as_slice()
    }

    pub fn get_merkle_root(&self) -> Hash256 {
        self.header.merkle_root
    }

    pub fn get_time(&self) -> u32 {
        self.header.time
    }

    pub fn hash_with(&self, hasher: &dyn HeaderHasher) -> Hash256 {
        self.header.hash_with(hasher)
    }

    fn calculate_merkle_root(transactions: &[Transaction]) -> Result<Hash256> {
        let txids: Vec<Hash256> = transactions.iter().map(Transaction::txid).collect();
        MerkleTree::calculate_merkle_root(&txids)
    }

    /// Verify that the header commits to the block's transactions
    pub fn verify_merkle_root(&self) -> Result<bool> {
        let calculated_root = Self::calculate_merkle_root(&self.transactions)?;
        Ok(calculated_root == self.header.merkle_root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DoubleSha256, Script};

    fn sample_block() -> Block {
        let coinbase = Transaction::new_coinbase(Script::new().push_int(1), 0, Script::new());
        Block::new_block(1, Hash256::ZERO, vec![coinbase], 1_600_000_000, 0x1e0ffff0, 7).unwrap()
    }

    #[test]
    fn test_header_is_eighty_bytes() {
        let block = sample_block();
        let bytes = block.get_header().to_bytes();
        assert_eq!(bytes.len(), HEADER_SIZE);
        assert_eq!(&bytes[..4], &[1, 0, 0, 0]);
        assert_eq!(&bytes[72..76], &0x1e0ffff0u32.to_le_bytes());
        assert_eq!(&bytes[76..], &7u32.to_le_bytes());
    }

    #[test]
    fn test_block_requires_transactions() {
        let result = Block::new_block(1, Hash256::ZERO, vec![], 0, 0, 0);
        assert!(result.is_err());
    }

    #[test]
    fn test_merkle_root_commits_to_transactions() {
        let block = sample_block();
        assert!(block.verify_merkle_root().unwrap());
        assert_eq!(block.get_merkle_root(), block.get_transactions()[0].txid());
    }

    #[test]
    fn test_hash_depends_on_nonce() {
        let block = sample_block();
        let mut header = block.get_header().clone();
        header.nonce += 1;
        assert_ne!(block.hash_with(&DoubleSha256), header.hash_with(&DoubleSha256));
    }
}
