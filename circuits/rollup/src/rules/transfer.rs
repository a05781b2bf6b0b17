//! Transfer rule: debit sender, credit receiver, bump nonce, possibly wipe
//! the sender slot entirely.

use ark_ff::Field;
use rollup_core::Account;
use rollup_crypto::{field, poseidon2, Felt};

use crate::error::RollupError;
use crate::witness::{TransferBlock, TransferSlot};

/// Applies every slot of a transfer block, in index order, threading the
/// account-tree root through.
pub fn apply_block(acc_root: Felt, block: &TransferBlock) -> Result<Felt, RollupError> {
    let mut acc_root = acc_root;
    for slot in block.iter() {
        acc_root = apply_slot(acc_root, slot)?;
    }
    Ok(acc_root)
}

fn apply_slot(acc_root: Felt, slot: &TransferSlot) -> Result<Felt, RollupError> {
    let assets = &slot.assets;
    if assets.signature.is_blank() {
        return Ok(acc_root);
    }
    let tx = &slot.tx;

    let tx_hash = poseidon2::hash(&[
        tx.sender_index,
        tx.receiver_index,
        tx.receiver_key,
        tx.amount,
        tx.nonce,
    ]);

    if !assets.signature.verify(tx_hash) {
        return Err(RollupError::SignatureInvalid);
    }
    if field::lt(assets.account_sender.balance, tx.amount) {
        return Err(RollupError::InsufficientBalance);
    }
    let new_receiver_balance = assets.account_receiver.balance + tx.amount;
    if field::lt(new_receiver_balance, assets.account_receiver.balance) {
        return Err(RollupError::BalanceOverflow);
    }
    if !(assets.account_receiver.key == tx.receiver_key || assets.account_receiver.key == Felt::ZERO) {
        return Err(RollupError::ReceiverKeyMismatch);
    }
    if assets.account_sender.key != assets.signature.a {
        return Err(RollupError::SenderKeyMismatch);
    }
    if tx.sender_index != assets.proof_sender.index() {
        return Err(RollupError::IndexMismatch);
    }
    if tx.receiver_index != assets.proof_receiver.index() {
        return Err(RollupError::IndexMismatch);
    }
    if tx.sender_index == tx.receiver_index {
        return Err(RollupError::SelfTransfer);
    }
    if assets.account_sender.nonce != tx.nonce {
        return Err(RollupError::NonceMismatch);
    }

    let new_sender_balance = assets.account_sender.balance - tx.amount;
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
    let new_receiver = Account {
        key: tx.receiver_key,
        balance: new_receiver_balance,
        nonce: assets.account_receiver.nonce,
        random_oracle_nonce: assets.account_receiver.random_oracle_nonce,
    };

    let root_after_sender =
        assets.proof_sender.update(assets.account_sender.hash(), new_sender.hash(), acc_root)?;
    let root_after_receiver = assets.proof_receiver.update(
        assets.account_receiver.hash(),
        new_receiver.hash(),
        root_after_sender,
    )?;
    Ok(root_after_receiver)
}
