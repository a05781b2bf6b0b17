#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod field;
pub mod poseidon;
pub mod poseidon2;
pub mod jubjub;
pub mod eddsa;

pub use error::CryptoError;
pub use field::Felt;
