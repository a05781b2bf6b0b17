//! Witnessed transaction and block types.
//!
//! Each transaction carries its own record (the fields that go into
//! `Tx.hash`) plus the "assets" — account/file records and Merkle proofs —
//! needed to check and apply it. Kept as plain value types so the rule
//! modules can take them by value/reference without reaching back into this
//! module.

use rollup_core::{constants, Account, File, MerkleProof, RandomOracle, Root, SignaturePacked};
use rollup_crypto::Felt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransferTx {
    pub sender_index: Felt,
    pub receiver_index: Felt,
    pub receiver_key: Felt,
    pub amount: Felt,
    pub nonce: Felt,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferAssets {
    pub proof_sender: MerkleProof,
    pub proof_receiver: MerkleProof,
    pub account_sender: Account,
    pub account_receiver: Account,
    pub signature: SignaturePacked,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferSlot {
    pub tx: TransferTx,
    pub assets: TransferAssets,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileTx {
    pub sender_index: Felt,
    pub data_index: Felt,
    pub time_interval: Felt,
    pub data: Felt,
    pub nonce: Felt,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileAssets {
    pub proof_sender: MerkleProof,
    pub proof_file: MerkleProof,
    pub account_sender: Account,
    pub file: File,
    pub signature: SignaturePacked,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileSlot {
    pub tx: FileTx,
    pub assets: FileAssets,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MiningTx {
    pub sender_index: Felt,
    pub nonce: Felt,
    pub random_oracle_nonce: Felt,
    pub mining_nonce: Felt,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MiningAssets {
    pub proof_sender: MerkleProof,
    pub account_sender: Account,
    pub random_oracle_value: Felt,
    pub proof_file: MerkleProof,
    pub file: File,
    pub proof_data_in_file: MerkleProof,
    pub data_in_file: Felt,
    pub signature: SignaturePacked,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MiningSlot {
    pub tx: MiningTx,
    pub assets: MiningAssets,
}

pub type TransferBlock = [TransferSlot; constants::MAX_TX_PER_BLOCK];
pub type FileBlock = [FileSlot; constants::MAX_FILE_PER_BLOCK];
pub type MiningBlock = [MiningSlot; constants::MAX_MINING_PER_BLOCK];

/// The publicly-committed part of a block: the two root digests, wall-clock
/// time, and the random oracle window visible to the mining rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublicValues {
    pub old_root: Felt,
    pub new_root: Felt,
    pub now: Felt,
    pub oracle: RandomOracle,
}

/// Everything `verify` needs besides the single public `pub_hash` field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RollupWitness {
    pub public: PublicValues,
    pub old_root_record: Root,
    pub new_root_record: Root,
    pub transfer_block: TransferBlock,
    pub file_block: FileBlock,
    pub mining_block: MiningBlock,
}
