//! File rule: charge the sender a time-based rental fee, extend or claim a
//! file slot, and enforce the writeability predicate.

use ark_ff::Field;
use rollup_core::{constants::PRICE, Account, File};
use rollup_crypto::{field, poseidon2, Felt};

use crate::error::RollupError;
use crate::witness::{FileBlock, FileSlot};

/// Applies every slot of a file block, in index order, threading both the
/// account-tree and data-tree roots through.
pub fn apply_block(acc_root: Felt, data_root: Felt, now: Felt, block: &FileBlock) -> Result<(Felt, Felt), RollupError> {
    let mut acc_root = acc_root;
    let mut data_root = data_root;
    for slot in block.iter() {
        let (next_acc, next_data) = apply_slot(acc_root, data_root, now, slot)?;
        acc_root = next_acc;
        data_root = next_data;
    }
    Ok((acc_root, data_root))
}

fn apply_slot(acc_root: Felt, data_root: Felt, now: Felt, slot: &FileSlot) -> Result<(Felt, Felt), RollupError> {
    let assets = &slot.assets;
    if assets.signature.is_blank() {
        return Ok((acc_root, data_root));
    }
    let tx = &slot.tx;

    let tx_hash = poseidon2::hash(&[tx.sender_index, tx.data_index, tx.time_interval, tx.data, tx.nonce]);
    if !assets.signature.verify(tx_hash) {
        return Err(RollupError::SignatureInvalid);
    }

    let fee = Felt::from(PRICE) * tx.time_interval;
    if field::lt(assets.account_sender.balance, fee) {
        return Err(RollupError::InsufficientBalance);
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
    if !assets.file.is_writeable(now, assets.account_sender.key) {
        return Err(RollupError::FileNotWriteable);
    }
    if tx.data_index != assets.proof_file.index() {
        return Err(RollupError::IndexMismatch);
    }

    let new_sender_balance = assets.account_sender.balance - fee;
    let new_sender = if new_sender_balance == Felt::ZERO {
        Account::ZERO
    } else {
        Account {
            key: assets.account_sender.key,
            balance: new_sender_balance,
            nonce: tx.nonce + Felt::from(1u64),
            random_oracle_nonce: assets.account_sender.random_oracle_nonce,
        }
    };

    let base_expiration = if field::lt(assets.file.expiration_time, now) {
        now
    } else {
        assets.file.expiration_time
    };
    let new_data = if tx.data == Felt::ZERO { assets.file.data } else { tx.data };
    let new_file = File {
        expiration_time: base_expiration + tx.time_interval,
        owner: assets.account_sender.key,
        data: new_data,
    };

    let new_acc_root = assets.proof_sender.update(assets.account_sender.hash(), new_sender.hash(), acc_root)?;
    let new_data_root = assets.proof_file.update(assets.file.hash(), new_file.hash(), data_root)?;
    Ok((new_acc_root, new_data_root))
}
