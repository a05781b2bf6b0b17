//! Mining rule: verify a proof-of-work witness against the random oracle
//! window and reward the miner.
//!
//! *Root-threading policy.* A non-blank slot returns the updated account
//! root; a blank slot returns the root untouched (see the blank
//! early-return below, and the final `Ok(new_acc_root)`).

use ark_ff::Field;
use rollup_core::constants::{
    ACCOUNT_TREE_DEPTH, FILE_CONTENT_TREE_DEPTH, MAX_MINING_NONCE_BITS, MINING_REWARD, REV_DIFFICULTY,
};
use rollup_core::{Account, RandomOracle};
use rollup_crypto::{field, poseidon2, Felt};

use crate::error::RollupError;
use crate::witness::{MiningBlock, MiningSlot};

/// Applies every slot of a mining block, in index order. `data_root` is
/// read-only here — mining never mutates the data tree.
pub fn apply_block(acc_root: Felt, data_root: Felt, oracle: &RandomOracle, block: &MiningBlock) -> Result<Felt, RollupError> {
    let mut acc_root = acc_root;
    for slot in block.iter() {
        acc_root = apply_slot(acc_root, data_root, oracle, slot)?;
    }
    Ok(acc_root)
}

fn apply_slot(acc_root: Felt, data_root: Felt, oracle: &RandomOracle, slot: &MiningSlot) -> Result<Felt, RollupError> {
    let assets = &slot.assets;
    if assets.signature.is_blank() {
        return Ok(acc_root);
    }
    let tx = &slot.tx;

    let tx_hash = poseidon2::hash(&[tx.sender_index, tx.nonce, tx.random_oracle_nonce, tx.mining_nonce]);
    if !assets.signature.verify(tx_hash) {
        return Err(RollupError::SignatureInvalid);
    }
    if field::le_bits(tx.mining_nonce, MAX_MINING_NONCE_BITS).is_err() {
        return Err(RollupError::MiningNonceOutOfRange);
    }

    let new_balance = assets.account_sender.balance + Felt::from(MINING_REWARD);
    if field::lt(new_balance, assets.account_sender.balance) {
        return Err(RollupError::BalanceOverflow);
    }
    if assets.account_sender.key != assets.signature.a {
        return Err(RollupError::SenderKeyMismatch);
    }
    if tx.sender_index != assets.proof_sender.index() {
        return Err(RollupError::IndexMismatch);
    }
    if assets.account_sender.nonce != tx.nonce {
        return Err(RollupError::NonceMismatch);
    }
    if oracle.get_nonce(assets.random_oracle_value) != tx.random_oracle_nonce {
        return Err(RollupError::OracleNonceMismatch);
    }
    if !field::lt(assets.account_sender.random_oracle_nonce, tx.random_oracle_nonce) {
        return Err(RollupError::OracleNonceNotIncreasing);
    }
    if assets.proof_file.root(assets.file.hash()) != data_root {
        return Err(RollupError::Merkle(rollup_core::MerkleError::RootMismatch));
    }
    if assets.proof_data_in_file.root(assets.data_in_file) != assets.file.data {
        return Err(RollupError::Merkle(rollup_core::MerkleError::RootMismatch));
    }

    let bruteforce_hash = poseidon2::hash(&[assets.signature.a, assets.random_oracle_value, tx.mining_nonce]);
    let index_hash = poseidon2::hash(&[bruteforce_hash]);
    let two_pow_k = Felt::from(1u64 << FILE_CONTENT_TREE_DEPTH);
    let index = assets.proof_data_in_file.index() + two_pow_k * assets.proof_file.index();
    let expected_index = field::trim(index_hash, ACCOUNT_TREE_DEPTH + FILE_CONTENT_TREE_DEPTH);
    if index != expected_index {
        return Err(RollupError::PowIndexMismatch);
    }
    let pow_hash = poseidon2::hash(&[bruteforce_hash, assets.data_in_file]);
    if !field::lt(pow_hash, *REV_DIFFICULTY) {
        return Err(RollupError::PowDifficultyNotMet);
    }

    let new_sender = Account {
        key: assets.account_sender.key,
        balance: new_balance,
        nonce: tx.nonce + Felt::from(1u64),
        random_oracle_nonce: tx.random_oracle_nonce,
    };
    let new_acc_root = assets.proof_sender.update(assets.account_sender.hash(), new_sender.hash(), acc_root)?;
    Ok(new_acc_root)
}
