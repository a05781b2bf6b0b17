//! Baby Jubjub: the twisted Edwards curve `a x^2 + y^2 = 1 + d x^2 y^2` over
//! `F_r`, cofactor 8, used for EdDSA public keys and nonce points.
//!
//! Point addition and doubling are delegated to `ark_ec` (generic curve
//! formulas, nothing protocol-specific); the two operations implemented by
//! hand here — subgroup decompression from a bare x-coordinate, and the
//! unreduced-scalar multiplication EdDSA needs — are written out explicitly
//! rather than reached for through a higher-level API, since arkworks'
//! typed `ScalarField` multiplication assumes the point is already known to
//! be in the prime-order subgroup (exactly the thing decompression is
//! trying to establish).

use ark_ec::twisted_edwards::{Affine, Projective, TECurveConfig};
use ark_ec::{AdditiveGroup, CurveConfig, CurveGroup};
use ark_ed_on_bn254::EdwardsConfig;
use ark_ff::{BigInteger, Field, PrimeField};

use crate::field::Felt;
use crate::CryptoError;

pub type Point = Projective<EdwardsConfig>;
pub type PointAffine = Affine<EdwardsConfig>;

/// Multiplies `point` by a little-endian bit sequence via double-and-add.
///
/// Operates on the full curve group (order `8 * l`), not just the
/// prime-order subgroup, so it can be used before subgroup membership has
/// been established.
pub fn scalar_mul_bits(point: Point, bits_le: &[bool]) -> Point {
    let mut acc = Point::zero();
    for bit in bits_le.iter().rev() {
        acc = acc.double();
        if *bit {
            acc += point;
        }
    }
    acc
}

fn scalar_mul_u64(point: Point, scalar: u64) -> Point {
    let bits: alloc::vec::Vec<bool> = (0..64).map(|i| (scalar >> i) & 1 == 1).collect();
    scalar_mul_bits(point, &bits)
}

/// Multiplies by the prime subgroup order `l` (the curve's order is `8l`).
fn mul_by_suborder(point: Point) -> Point {
    let modulus = <EdwardsConfig as CurveConfig>::ScalarField::MODULUS;
    let bits = modulus.to_bits_le();
    scalar_mul_bits(point, &bits)
}

/// Multiplies by the cofactor (8).
pub fn mul8(point: Point) -> Point {
    scalar_mul_u64(point, 8)
}

/// Recovers a full Baby Jubjub point from its x-coordinate alone.
///
/// Solves the curve equation for `y`, then picks whichever of the two roots
/// multiplies to the identity under the suborder scalar — i.e. actually
/// lies in the prime-order subgroup rather than one of the seven nontrivial
/// cofactor cosets. Unlike a naive "pick the positive root" decompression,
/// this rejects x-coordinates whose only curve points sit outside the
/// subgroup the rest of the protocol assumes.
pub fn decompress_x(x: Felt) -> Result<PointAffine, CryptoError> {
    let a = <EdwardsConfig as TECurveConfig>::COEFF_A;
    let d = <EdwardsConfig as TECurveConfig>::COEFF_D;
    let x2 = x * x;
    let numerator = Felt::from(1u64) - a * x2;
    let denominator = Felt::from(1u64) - d * x2;
    let denom_inv = crate::field::inv(denominator).map_err(|_| CryptoError::NotOnCurve)?;
    let y2 = numerator * denom_inv;
    let y = y2.sqrt().ok_or(CryptoError::NotOnCurve)?;

    for candidate_y in [y, -y] {
        let candidate = PointAffine::new_unchecked(x, candidate_y);
        if !candidate.is_on_curve() {
            continue;
        }
        let candidate_proj: Point = candidate.into();
        if mul_by_suborder(candidate_proj).is_zero() {
            return Ok(candidate);
        }
    }
    Err(CryptoError::NotInSubgroup)
}
