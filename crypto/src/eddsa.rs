//! EdDSA-Poseidon over Baby Jubjub, packed signature verification.
//!
//! The challenge digest uses the original Poseidon sponge (`crate::poseidon`)
//! rather than Poseidon2 — this asymmetry is deliberate and must not be
//! "fixed" by unifying the two hashes.

use ark_ec::{CurveGroup, PrimeGroup};

use crate::field::{self, Felt};
use crate::jubjub::{self, Point};
use crate::poseidon::eddsa_challenge;
use crate::CryptoError;

/// A packed EdDSA signature: only x-coordinates are carried for the public
/// key and the nonce point, matching the on-chain/circuit encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SignaturePacked {
    /// x-coordinate of the signer's public key. `a == 0` marks a blank slot.
    pub a: Felt,
    /// Scalar response, canonical in `[0, r)`.
    pub s: Felt,
    /// x-coordinate of the nonce point `R8`.
    pub r8: Felt,
}

impl SignaturePacked {
    /// A blank (no-op) slot, per the `signature.a = 0` sentinel.
    pub fn is_blank(&self) -> bool {
        self.a == Felt::from(0u64)
    }

    /// Verifies `[8s]B = [8]R + [8h]A` after decompressing `a` and `r8`.
    ///
    /// Any decompression failure is treated as an invalid signature rather
    /// than propagated, since both collapse to `reject` at the rule layer.
    pub fn verify(&self, msg: Felt) -> bool {
        self.try_verify(msg).unwrap_or(false)
    }

    fn try_verify(&self, msg: Felt) -> Result<bool, CryptoError> {
        let a_point = jubjub::decompress_x(self.a)?;
        let r8_point = jubjub::decompress_x(self.r8)?;

        let h = eddsa_challenge([r8_point.x, r8_point.y, a_point.x, a_point.y, msg]);

        // BN254's Fr has 254 bits; 256 is always enough for a canonical value.
        let s_bits = field::le_bits(self.s, 256).expect("canonical field element fits in 256 bits");
        let h_bits = field::le_bits(h, 256).expect("canonical field element fits in 256 bits");

        let base: Point = Point::generator();
        let lhs = jubjub::mul8(jubjub::scalar_mul_bits(base, &s_bits));

        let r8_proj: Point = r8_point.into();
        let a_proj: Point = a_point.into();
        let rhs = jubjub::mul8(r8_proj) + jubjub::mul8(jubjub::scalar_mul_bits(a_proj, &h_bits));

        Ok(lhs.into_affine() == rhs.into_affine())
    }
}
