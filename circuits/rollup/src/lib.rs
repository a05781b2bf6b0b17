//! State-transition rules, block driver, public-input hash and top-level
//! verifier for the rollup zk predicate.
//!
//! The core is a pure function: [`verifier::verify`] takes the public
//! `pub_hash` and a fully-witnessed [`witness::RollupWitness`] and decides
//! accept/reject. Nothing here is stateful or long-lived — there is no live
//! tree, no mempool, no networking; that belongs to the node that builds
//! blocks and maintains storage (out of scope).

pub mod driver;
pub mod error;
pub mod public_inputs;
pub mod rules;
pub mod verifier;
pub mod witness;

#[cfg(test)]
mod test_support;

pub use error::RollupError;
pub use verifier::{accepts, verify};
pub use witness::{
    FileAssets, FileSlot, FileTx, MiningAssets, MiningSlot, MiningTx, PublicValues, RollupWitness,
    TransferAssets, TransferSlot, TransferTx,
};
