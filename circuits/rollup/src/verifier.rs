//! Top-level entry point: `verify(pub_hash, witness)`.

use rollup_crypto::Felt;

use crate::driver;
use crate::error::RollupError;
use crate::public_inputs;
use crate::witness::RollupWitness;

/// Recomputes the public-input hash, checks it against the two witnessed
/// root records, applies the block in transfer -> file -> mining order, and
/// checks the result against the witnessed new root. Any failure is a
/// reject; `Ok(())` is the only accept outcome.
pub fn verify(pub_hash: Felt, witness: &RollupWitness) -> Result<(), RollupError> {
    let computed = public_inputs::hash(
        witness.public.old_root,
        witness.public.new_root,
        witness.public.now,
        &witness.public.oracle,
    );
    if computed != pub_hash {
        return Err(RollupError::PublicInputMismatch);
    }
    if witness.old_root_record.hash() != witness.public.old_root {
        return Err(RollupError::PublicInputMismatch);
    }
    if witness.new_root_record.hash() != witness.public.new_root {
        return Err(RollupError::PublicInputMismatch);
    }

    let result_root = driver::apply(
        &witness.public,
        witness.old_root_record,
        &witness.transfer_block,
        &witness.file_block,
        &witness.mining_block,
    )?;

    if result_root != witness.new_root_record {
        return Err(RollupError::PublicInputMismatch);
    }
    Ok(())
}

/// Convenience boolean form of [`verify`] for callers that only care about
/// accept/reject, not which predicate failed.
pub fn accepts(pub_hash: Felt, witness: &RollupWitness) -> bool {
    verify(pub_hash, witness).is_ok()
}
