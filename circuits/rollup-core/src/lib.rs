//! Shared record types, Merkle proofs and fixed protocol constants for the
//! rollup state-transition verifier.
//!
//! This crate is `no_std` compatible. It has no notion of a live, storage-
//! backed tree — witnessed proofs only. A node maintaining the actual
//! account/file trees on disk and appending leaves to them is an external
//! collaborator, out of scope here.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod constants;
pub mod merkle;
pub mod oracle;
pub mod records;

pub use merkle::{MerkleError, MerkleProof};
pub use oracle::RandomOracle;
pub use records::{Account, File, Root};
pub use rollup_crypto::eddsa::SignaturePacked;
pub use rollup_crypto::Felt;
