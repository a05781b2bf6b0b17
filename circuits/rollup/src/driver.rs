//! Sequences the three rule blocks over a single root pair: transfer, then
//! file, then mining, in that fixed order.

use rollup_core::Root;

use crate::error::RollupError;
use crate::rules::{file, mining, transfer};
use crate::witness::{FileBlock, MiningBlock, PublicValues, TransferBlock};

/// Applies `transfer_block`, then `file_block`, then `mining_block` to
/// `old_root`, returning the resulting root pair.
pub fn apply(
    public: &PublicValues,
    old_root: Root,
    transfer_block: &TransferBlock,
    file_block: &FileBlock,
    mining_block: &MiningBlock,
) -> Result<Root, RollupError> {
    let acc_root = transfer::apply_block(old_root.acc, transfer_block)?;
    let (acc_root, data_root) = file::apply_block(acc_root, old_root.data, public.now, file_block)?;
    let acc_root = mining::apply_block(acc_root, data_root, &public.oracle, mining_block)?;
    Ok(Root { acc: acc_root, data: data_root })
}
