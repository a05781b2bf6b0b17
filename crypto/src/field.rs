//! Prime-field arithmetic over `F_r`, the BN254 scalar field.
//!
//! Baby Jubjub is defined over this same field, so every witness value in the
//! rollup (balances, nonces, Merkle siblings, curve coordinates) is a `Felt`.

use ark_ff::{BigInteger, Field, PrimeField};

use crate::CryptoError;

/// The field all rollup witnesses live in: BN254's scalar field `F_r`.
pub type Felt = ark_ed_on_bn254::Fq;

/// Little-endian bit decomposition, fixed to exactly `n` bits.
///
/// Fails if `f` does not fit in `n` bits — the range check every witness
/// field with a fixed bit width needs.
pub fn le_bits(f: Felt, n: usize) -> Result<alloc::vec::Vec<bool>, CryptoError> {
    let bits = f.into_bigint().to_bits_le();
    if bits[n..].iter().any(|b| *b) {
        return Err(CryptoError::BitWidthExceeded { bits: n });
    }
    let mut out = bits;
    out.truncate(n);
    out.resize(n, false);
    Ok(out)
}

/// Reconstructs a field element from a little-endian bit sequence:
/// `sum(b_i * 2^i)`.
pub fn from_le_bits(bits: &[bool]) -> Felt {
    let mut acc = Felt::from(0u64);
    let mut pow = Felt::from(1u64);
    let two = Felt::from(2u64);
    for bit in bits {
        if *bit {
            acc += pow;
        }
        pow *= two;
    }
    acc
}

/// Takes the low `n` bits of `f`, discarding the rest.
///
/// Unlike [`le_bits`] this never fails: it is used where the source is
/// trusted to be wider than `n` bits by construction (e.g. hash outputs).
pub fn trim(f: Felt, n: usize) -> Felt {
    let mut bits = f.into_bigint().to_bits_le();
    bits.truncate(n);
    bits.resize(n, false);
    from_le_bits(&bits)
}

/// Big-endian, fixed-width 32-byte serialization — the canonical encoding
/// used for the public-input hash and for storage interchange.
pub fn to_be_bytes32(f: Felt) -> [u8; 32] {
    let mut be = f.into_bigint().to_bytes_be();
    let mut out = [0u8; 32];
    // `to_bytes_be` already returns 32 bytes for this field, but pad
    // defensively on the left in case a narrower representation is used.
    let offset = 32 - be.len();
    out[offset..].copy_from_slice(&be);
    be.clear();
    out
}

/// Parses a big-endian 32-byte value as a field element, reducing modulo `r`.
pub fn from_be_bytes_mod_order(bytes: &[u8; 32]) -> Felt {
    Felt::from_be_bytes_mod_order(bytes)
}

/// `lt` on the canonical integer representative in `[0, r)`.
pub fn lt(a: Felt, b: Felt) -> bool {
    a.into_bigint() < b.into_bigint()
}

/// Multiplicative inversion, failing on zero.
pub fn inv(f: Felt) -> Result<Felt, CryptoError> {
    f.inverse().ok_or(CryptoError::ZeroInverse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_roundtrip() {
        let f = Felt::from(0x1234_5678u64);
        let bits = le_bits(f, 64).unwrap();
        assert_eq!(from_le_bits(&bits), f);
    }

    #[test]
    fn overwide_value_rejected() {
        let f = Felt::from(256u64);
        assert!(le_bits(f, 8).is_err());
        assert!(le_bits(f, 9).is_ok());
    }

    #[test]
    fn trim_takes_low_bits() {
        let f = Felt::from(0b1011u64);
        assert_eq!(trim(f, 2), Felt::from(0b11u64));
    }

    #[test]
    fn lt_matches_integer_order() {
        assert!(lt(Felt::from(3u64), Felt::from(4u64)));
        assert!(!lt(Felt::from(4u64), Felt::from(4u64)));
        assert!(!lt(Felt::from(5u64), Felt::from(4u64)));
    }

    #[test]
    fn byte_roundtrip_is_canonical() {
        let f = Felt::from(0xdead_beefu64);
        let bytes = to_be_bytes32(f);
        assert_eq!(from_be_bytes_mod_order(&bytes), f);
    }

    #[test]
    fn inv_roundtrips_and_rejects_zero() {
        let f = Felt::from(12345u64);
        assert_eq!(inv(f).unwrap() * f, Felt::from(1u64));
        assert_eq!(inv(Felt::from(0u64)), Err(CryptoError::ZeroInverse));
    }
}
