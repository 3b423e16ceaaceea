use crate::core::Hash256;
use crate::error::{ChainParamsError, Result};
use crate::utils::double_sha256;

/// Bitcoin-compatible merkle root computation over transaction ids
pub struct MerkleTree;

impl MerkleTree {
    /// Calculate the merkle root of a list of transaction ids.
    ///
    /// A single id is its own root. On every level with an odd number of
    /// nodes the last one is paired with itself.
    pub fn calculate_merkle_root(transaction_hashes: &[Hash256]) -> Result<Hash256> {
        if transaction_hashes.is_empty() {
            return Err(ChainParamsError::InvalidBlock(
                "Cannot calculate Merkle root from empty transaction list".to_string(),
            ));
        }

        let mut current_level = transaction_hashes.to_vec();

        while current_level.len() > 1 {
            let mut next_level = Vec::with_capacity((current_level.len() + 1) / 2);

            for pair in current_level.chunks(2) {
                let left = &pair[0];
                // Odd number of nodes - duplicate the last one
                let right = pair.get(1).unwrap_or(left);
                next_level.push(Self::hash_pair(left, right));
            }

            current_level = next_level;
        }

        Ok(current_level[0])
    }

    /// Hash two nodes together (double SHA-256 over the concatenation)
    pub fn hash_pair(left: &Hash256, right: &Hash256) -> Hash256 {
        let mut combined = Vec::with_capacity(64);
        combined.extend_from_slice(left.as_bytes());
        combined.extend_from_slice(right.as_bytes());
        Hash256::from_bytes(double_sha256(&combined))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(byte: u8) -> Hash256 {
        Hash256::from_bytes([byte; 32])
    }

    #[test]
    fn test_single_transaction_is_its_own_root() {
        let root = MerkleTree::calculate_merkle_root(&[leaf(7)]).unwrap();
        assert_eq!(root, leaf(7));
    }

    #[test]
    fn test_two_leaves_hash_together() {
        let root = MerkleTree::calculate_merkle_root(&[leaf(1), leaf(2)]).unwrap();
        assert_eq!(root, MerkleTree::hash_pair(&leaf(1), &leaf(2)));
    }

    #[test]
    fn test_odd_level_duplicates_last_node() {
        let three = MerkleTree::calculate_merkle_root(&[leaf(1), leaf(2), leaf(3)]).unwrap();
        let four =
            MerkleTree::calculate_merkle_root(&[leaf(1), leaf(2), leaf(3), leaf(3)]).unwrap();
        assert_eq!(three, four);
    }

    #[test]
    fn test_empty_transaction_list() {
        assert!(MerkleTree::calculate_merkle_root(&[]).is_err());
    }
}
