//! Fixed protocol parameters. All of these are consensus-critical: changing
//! any one of them changes the public-input hash of every block.

use ark_ff::Field;
use lazy_static::lazy_static;
use rollup_crypto::Felt;

/// Depth of the account tree (`Account` leaves, keyed by account index).
pub const ACCOUNT_TREE_DEPTH: usize = 10;
/// Depth of the data (file) tree (`File` leaves, keyed by file index).
pub const FILE_TREE_DEPTH: usize = 10;
/// Depth of a single file's content tree. Only the root (`File::data`) is
/// ever touched here; the tree itself belongs to the storage collaborator.
pub const FILE_CONTENT_TREE_DEPTH: usize = 10;

/// Width of the random oracle window exposed to the mining rule.
pub const RANDOM_ORACLE_SIZE: usize = 16;

/// Transfer slots per block.
pub const MAX_TX_PER_BLOCK: usize = 8;
/// File slots per block.
pub const MAX_FILE_PER_BLOCK: usize = 8;
/// Mining slots per block.
pub const MAX_MINING_PER_BLOCK: usize = 1;

/// Per-unit-time file rental fee.
pub const PRICE: u64 = 1;
/// Fixed reward credited to the miner of an accepted slot.
pub const MINING_REWARD: u64 = 1024;
/// Bit width the mining nonce is range-checked against (`trim` width).
pub const MAX_MINING_NONCE_BITS: usize = 20;

lazy_static! {
    /// `2^244`, the proof-of-work difficulty target. A mining hash is
    /// accepted iff its canonical integer value is strictly below this.
    pub static ref REV_DIFFICULTY: Felt = Felt::from(2u64).pow([244u64]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollup_crypto::field;

    #[test]
    fn rev_difficulty_is_two_pow_244() {
        let mut expected = Felt::from(1u64);
        for _ in 0..244 {
            expected *= Felt::from(2u64);
        }
        assert_eq!(*REV_DIFFICULTY, expected);
        // sanity: strictly less than the field modulus, strictly more than 2^243.
        assert!(field::lt(expected, expected + expected));
    }
}
