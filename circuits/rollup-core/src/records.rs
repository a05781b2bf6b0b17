//! The three Poseidon2-hashed record types the protocol's two trees are
//! built from, plus the root pair that ties them together.
//!
//! Kept in one module (rather than alongside the rules that mutate them) so
//! `Account` and `File` don't have to cross-reference the transfer/file/
//! mining rule modules that consume them.

use ark_ff::Field;
use rollup_crypto::{poseidon2, Felt};

/// An account-tree leaf. `key == 0` marks an uninitialized slot, in which
/// case the whole record (and its hash) is zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Account {
    /// x-coordinate of the owning EdDSA public key, or `0` if uninitialized.
    pub key: Felt,
    pub balance: Felt,
    pub nonce: Felt,
    pub random_oracle_nonce: Felt,
}

impl Account {
    pub const ZERO: Account = Account {
        key: Felt::ZERO,
        balance: Felt::ZERO,
        nonce: Felt::ZERO,
        random_oracle_nonce: Felt::ZERO,
    };

    pub fn hash(&self) -> Felt {
        poseidon2::hash(&[self.key, self.balance, self.nonce, self.random_oracle_nonce])
    }

    pub fn is_uninitialized(&self) -> bool {
        self.key == Felt::ZERO
    }
}

/// A data-tree leaf. `owner == 0` marks an erased/empty slot. `data` is the
/// root of the file's own content tree (depth `K`, not materialized here).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct File {
    pub expiration_time: Felt,
    pub owner: Felt,
    pub data: Felt,
}

impl File {
    pub const ZERO: File = File {
        expiration_time: Felt::ZERO,
        owner: Felt::ZERO,
        data: Felt::ZERO,
    };

    pub fn hash(&self) -> Felt {
        poseidon2::hash(&[self.expiration_time, self.owner, self.data])
    }

    /// A file is writeable by `writer` if it has expired, is unowned, or is
    /// already owned by `writer`.
    pub fn is_writeable(&self, now: Felt, writer: Felt) -> bool {
        rollup_crypto::field::lt(self.expiration_time, now)
            || self.owner == Felt::ZERO
            || self.owner == writer
    }
}

/// The pair of tree roots threaded through block application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Root {
    pub acc: Felt,
    pub data: Felt,
}

impl Root {
    pub fn hash(&self) -> Felt {
        poseidon2::hash(&[self.acc, self.data])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_account_hashes_to_record_hash_of_zeros() {
        let acc = Account::ZERO;
        assert_eq!(acc.hash(), poseidon2::hash(&[Felt::ZERO; 4]));
        assert!(acc.is_uninitialized());
    }

    #[test]
    fn file_writeable_rules() {
        let now = Felt::from(100u64);
        let unowned = File { expiration_time: Felt::from(0u64), owner: Felt::ZERO, data: Felt::ZERO };
        assert!(unowned.is_writeable(now, Felt::from(7u64)));

        let owned_by_writer = File { expiration_time: Felt::from(200u64), owner: Felt::from(7u64), data: Felt::ZERO };
        assert!(owned_by_writer.is_writeable(now, Felt::from(7u64)));
        assert!(!owned_by_writer.is_writeable(now, Felt::from(8u64)));

        let expired = File { expiration_time: Felt::from(50u64), owner: Felt::from(7u64), data: Felt::ZERO };
        assert!(expired.is_writeable(now, Felt::from(8u64)));
    }

    #[test]
    fn root_hash_matches_poseidon2_pair() {
        let root = Root { acc: Felt::from(1u64), data: Felt::from(2u64) };
        assert_eq!(root.hash(), poseidon2::hash(&[Felt::from(1u64), Felt::from(2u64)]));
    }
}
