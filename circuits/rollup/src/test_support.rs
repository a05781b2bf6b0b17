//! Signing helpers shared by the rule unit tests. Not exposed outside
//! `#[cfg(test)]` — each integration test under `tests/` builds its own
//! fixtures instead of depending on this module.

use rollup_crypto::jubjub::{self, Point};
use rollup_crypto::poseidon::eddsa_challenge;
use rollup_crypto::{field, Felt};
use rollup_crypto::eddsa::SignaturePacked;
use ark_ec::{CurveGroup, PrimeGroup};

/// The x-coordinate of `[sk] * B`, usable as `Account::key` / `signature.a`.
pub(crate) fn pubkey(sk: Felt) -> Felt {
    let base: Point = Point::generator();
    let sk_bits = field::le_bits(sk, 256).unwrap();
    jubjub::scalar_mul_bits(base, &sk_bits).into_affine().x
}

/// Builds a valid packed EdDSA-Poseidon signature over `msg` for secret `sk`.
pub(crate) fn sign(sk: Felt, msg: Felt) -> SignaturePacked {
    let base: Point = Point::generator();
    let sk_bits = field::le_bits(sk, 256).unwrap();
    let a_point = jubjub::scalar_mul_bits(base, &sk_bits).into_affine();

    let nonce_seed = eddsa_challenge([msg, sk, msg, sk, msg]);
    let r_bits = field::le_bits(nonce_seed, 256).unwrap();
    let r_point = jubjub::scalar_mul_bits(base, &r_bits).into_affine();

    let h = eddsa_challenge([r_point.x, r_point.y, a_point.x, a_point.y, msg]);
    let h_bits = field::le_bits(h, 256).unwrap();

    let r_scalar = field::from_le_bits(&r_bits);
    let sk_scalar = field::from_le_bits(&sk_bits);
    let h_scalar = field::from_le_bits(&h_bits);
    let s = r_scalar + h_scalar * sk_scalar;

    SignaturePacked { a: a_point.x, s, r8: r_point.x }
}
