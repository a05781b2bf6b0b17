//! Fixed-depth Merkle authentication paths.
//!
//! This is the witnessed-proof half of the Merkle story: given a leaf and a
//! path of siblings, fold up to a root (or verify one and swap in a new
//! leaf). There is no notion of a live, storage-backed tree here — that is
//! an external collaborator's job.

use alloc::vec::Vec;

#[cfg(feature = "std")]
use thiserror::Error;

use rollup_crypto::{field, poseidon2, Felt};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(Error))]
pub enum MerkleError {
    #[cfg_attr(feature = "std", error("index_bits and hash_path must have equal, non-zero length"))]
    LengthMismatch,
    #[cfg_attr(feature = "std", error("claimed root does not match the proof's leaf"))]
    RootMismatch,
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for MerkleError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MerkleError::LengthMismatch => {
                write!(f, "index_bits and hash_path must have equal, non-zero length")
            }
            MerkleError::RootMismatch => write!(f, "claimed root does not match the proof's leaf"),
        }
    }
}

/// A depth-`N` authentication path: `index_bits[0]` is the bit closest to
/// the leaf (least-significant), matching `hash_path[0]`'s sibling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MerkleProof {
    pub index_bits: Vec<bool>,
    pub hash_path: Vec<Felt>,
}

impl MerkleProof {
    pub fn new(index_bits: Vec<bool>, hash_path: Vec<Felt>) -> Result<Self, MerkleError> {
        if index_bits.is_empty() || index_bits.len() != hash_path.len() {
            return Err(MerkleError::LengthMismatch);
        }
        Ok(Self { index_bits, hash_path })
    }

    pub fn depth(&self) -> usize {
        self.index_bits.len()
    }

    /// The account/file-tree index this proof authenticates, as an integer.
    pub fn index(&self) -> Felt {
        field::from_le_bits(&self.index_bits)
    }

    /// Folds `leaf` up the path to a root.
    pub fn root(&self, leaf: Felt) -> Felt {
        let mut current = leaf;
        for (bit, sibling) in self.index_bits.iter().zip(self.hash_path.iter()) {
            current = if *bit {
                poseidon2::compress2(*sibling, current)
            } else {
                poseidon2::compress2(current, *sibling)
            };
        }
        current
    }

    /// Verifies `root(old_leaf) == old_root`, then returns `root(new_leaf)`
    /// over the same siblings and index bits.
    ///
    /// Sound only under the honest-witness discipline that no two updates
    /// in one block touch overlapping paths — enforcing that is the block
    /// producer's responsibility, not this function's.
    pub fn update(&self, old_leaf: Felt, new_leaf: Felt, old_root: Felt) -> Result<Felt, MerkleError> {
        if self.root(old_leaf) != old_root {
            return Err(MerkleError::RootMismatch);
        }
        Ok(self.root(new_leaf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_proof() -> MerkleProof {
        MerkleProof::new(
            vec![true, false, true],
            vec![Felt::from(11u64), Felt::from(22u64), Felt::from(33u64)],
        )
        .unwrap()
    }

    #[test]
    fn update_roundtrips_through_root() {
        let proof = sample_proof();
        let old_leaf = Felt::from(1u64);
        let new_leaf = Felt::from(2u64);
        let old_root = proof.root(old_leaf);
        let new_root = proof.update(old_leaf, new_leaf, old_root).unwrap();
        assert_eq!(new_root, proof.root(new_leaf));
    }

    #[test]
    fn update_rejects_wrong_claimed_root() {
        let proof = sample_proof();
        let wrong_root = Felt::from(999u64);
        assert!(proof.update(Felt::from(1u64), Felt::from(2u64), wrong_root).is_err());
    }

    #[test]
    fn index_matches_bit_decomposition() {
        let proof = MerkleProof::new(vec![true, false], vec![Felt::from(0u64); 2]).unwrap();
        assert_eq!(proof.index(), Felt::from(1u64));
    }

    #[test]
    fn mismatched_lengths_rejected() {
        assert!(MerkleProof::new(vec![true], vec![Felt::from(0u64); 2]).is_err());
    }
}
