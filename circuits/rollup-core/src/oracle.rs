//! The public-entropy random oracle window the mining rule consumes.

use rollup_crypto::Felt;

use crate::constants::RANDOM_ORACLE_SIZE;

/// A contiguous window of `RANDOM_ORACLE_SIZE` oracle values, with nonces
/// `offset, offset + 1, ..., offset + RANDOM_ORACLE_SIZE - 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RandomOracle {
    pub offset: Felt,
    pub data: [Felt; RANDOM_ORACLE_SIZE],
}

impl RandomOracle {
    /// Returns the nonce of `value` within this window, or `-1` (`r - 1`)
    /// if no entry matches.
    ///
    /// Scans the whole window and keeps the last match, mirroring the
    /// source's behavior on a malformed (duplicate-valued) witness; callers
    /// that want to reject duplicate entries outright should check for
    /// uniqueness themselves before calling this.
    pub fn get_nonce(&self, value: Felt) -> Felt {
        let mut found: Option<Felt> = None;
        for (i, entry) in self.data.iter().enumerate() {
            if *entry == value {
                found = Some(self.offset + Felt::from(i as u64));
            }
        }
        found.unwrap_or(-Felt::from(1u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(offset: u64, values: [u64; RANDOM_ORACLE_SIZE]) -> RandomOracle {
        let mut data = [Felt::from(0u64); RANDOM_ORACLE_SIZE];
        for (slot, v) in data.iter_mut().zip(values.iter()) {
            *slot = Felt::from(*v);
        }
        RandomOracle { offset: Felt::from(offset), data }
    }

    #[test]
    fn finds_nonce_of_matching_entry() {
        let mut values = [0u64; RANDOM_ORACLE_SIZE];
        values[3] = 77;
        let oracle = window(100, values);
        assert_eq!(oracle.get_nonce(Felt::from(77u64)), Felt::from(103u64));
    }

    #[test]
    fn no_match_returns_minus_one() {
        let oracle = window(100, [0u64; RANDOM_ORACLE_SIZE]);
        assert_eq!(oracle.get_nonce(Felt::from(999u64)), -Felt::from(1u64));
    }

    #[test]
    fn duplicate_entries_keep_the_last_match() {
        let mut values = [0u64; RANDOM_ORACLE_SIZE];
        values[2] = 55;
        values[9] = 55;
        let oracle = window(0, values);
        assert_eq!(oracle.get_nonce(Felt::from(55u64)), Felt::from(9u64));
    }
}
