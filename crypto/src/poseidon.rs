//! The original (non-split) Poseidon sponge, used exclusively to derive the
//! EdDSA challenge. Every other hash call-site in the rollup uses
//! [`crate::poseidon2`] instead — keeping the two constructions apart is
//! load-bearing, see `eddsa.rs`.

use ark_crypto_primitives::sponge::poseidon::{find_poseidon_ark_and_mds, PoseidonConfig, PoseidonSponge};
use ark_crypto_primitives::sponge::{CryptographicSponge, FieldBasedCryptographicSponge};
use ark_ff::PrimeField;
use lazy_static::lazy_static;

use crate::field::Felt;

const FULL_ROUNDS: usize = 8;
const PARTIAL_ROUNDS: usize = 57;
const ALPHA: u64 = 5;

fn config(rate: usize) -> PoseidonConfig<Felt> {
    let (ark, mds) = find_poseidon_ark_and_mds::<Felt>(
        Felt::MODULUS_BIT_SIZE as u64,
        rate,
        FULL_ROUNDS as u64,
        PARTIAL_ROUNDS as u64,
        0,
    );
    PoseidonConfig::new(FULL_ROUNDS, PARTIAL_ROUNDS, ALPHA, mds, ark, rate, 1)
}

lazy_static! {
    static ref CONFIG_6: PoseidonConfig<Felt> = config(6);
}

/// `Poseidon(r8.x, r8.y, a.x, a.y, msg)`, the EdDSA challenge digest.
///
/// Fixed at arity 6 (rate 5, capacity 1) because that is the only shape the
/// EdDSA construction needs; a generic sponge over arbitrary input lengths
/// is not exposed here on purpose.
pub fn eddsa_challenge(inputs: [Felt; 5]) -> Felt {
    let mut sponge = PoseidonSponge::new(&CONFIG_6);
    for input in inputs {
        sponge.absorb(&input);
    }
    sponge.squeeze_native_field_elements(1)[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_and_domain_sensitive() {
        let a = eddsa_challenge([Felt::from(1u64); 5]);
        let b = eddsa_challenge([Felt::from(1u64); 5]);
        assert_eq!(a, b);

        let mut other = [Felt::from(1u64); 5];
        other[4] = Felt::from(2u64);
        assert_ne!(a, eddsa_challenge(other));
    }
}
