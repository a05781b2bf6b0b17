//! Canonicalizes `(old_root, new_root, now, oracle)` into the single
//! Keccak-256 digest committed on-chain as `pub_hash`.

use rollup_core::constants::RANDOM_ORACLE_SIZE;
use rollup_core::RandomOracle;
use rollup_crypto::{field, Felt};
use sha3::{Digest, Keccak256};

/// `4 + RANDOM_ORACLE_SIZE` field elements, each serialized to 32
/// big-endian bytes: `old_root, new_root, now, oracle.offset, oracle.data[..]`.
pub fn hash(old_root: Felt, new_root: Felt, now: Felt, oracle: &RandomOracle) -> Felt {
    let mut bytes = Vec::with_capacity(32 * (4 + RANDOM_ORACLE_SIZE));
    for f in [old_root, new_root, now, oracle.offset] {
        bytes.extend_from_slice(&field::to_be_bytes32(f));
    }
    for f in oracle.data.iter() {
        bytes.extend_from_slice(&field::to_be_bytes32(*f));
    }
    let digest = Keccak256::digest(&bytes);
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    field::from_be_bytes_mod_order(&out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_oracle() -> RandomOracle {
        let mut data = [Felt::from(0u64); RANDOM_ORACLE_SIZE];
        for (i, slot) in data.iter_mut().enumerate() {
            *slot = Felt::from(i as u64 + 1);
        }
        RandomOracle { offset: Felt::from(7u64), data }
    }

    #[test]
    fn deterministic_and_sensitive_to_every_field() {
        let oracle = sample_oracle();
        let a = hash(Felt::from(1u64), Felt::from(2u64), Felt::from(3u64), &oracle);
        let b = hash(Felt::from(1u64), Felt::from(2u64), Felt::from(3u64), &oracle);
        assert_eq!(a, b);

        let c = hash(Felt::from(1u64), Felt::from(2u64), Felt::from(4u64), &oracle);
        assert_ne!(a, c);

        let mut other_oracle = oracle;
        other_oracle.offset = Felt::from(8u64);
        let d = hash(Felt::from(1u64), Felt::from(2u64), Felt::from(3u64), &other_oracle);
        assert_ne!(a, d);
    }

    /// Known-answer test pinning the on-chain byte layout: 32-byte
    /// big-endian serialization of `old_root, new_root, now, oracle.offset,
    /// oracle.data[..]` concatenated in that order and run through
    /// Keccak-256, the digest then reduced mod `r`.
    ///
    /// The distilled source test vector gives these five fields only in
    /// truncated decimal form (`old_root = 8918…9637`, etc.), so the exact
    /// literal inputs it used aren't reproducible here. This vector instead
    /// fixes its own small, fully-specified witness and pins the digest
    /// independently computed against that witness, so a change to the byte
    /// layout, field count, or serialization width still breaks a
    /// known-answer check rather than only a self-consistency one.
    #[test]
    fn known_answer_vector_pins_byte_layout() {
        let old_root = Felt::from(1u64);
        let new_root = Felt::from(2u64);
        let now = Felt::from(1_700_000_000u64);
        let mut data = [Felt::from(0u64); RANDOM_ORACLE_SIZE];
        for (i, slot) in data.iter_mut().enumerate() {
            *slot = Felt::from(100u64 + i as u64);
        }
        let oracle = RandomOracle { offset: Felt::from(42u64), data };

        let digest = hash(old_root, new_root, now, &oracle);

        let expected: Felt =
            "12607590075268733140942775252339692636762034079613307300795703737069977932586"
                .parse()
                .unwrap();
        assert_eq!(digest, expected);
    }
}
