use thiserror::Error;

/// Every in-core check collapses to accept/reject; this enum exists purely
/// to make `reject` debuggable — callers must not branch on its variants to
/// decide acceptance (use [`crate::verifier::accepts`] for that).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RollupError {
    #[error("EdDSA signature verification failed")]
    SignatureInvalid,
    #[error("sender balance is insufficient")]
    InsufficientBalance,
    #[error("balance addition would wrap the field")]
    BalanceOverflow,
    #[error("witnessed receiver account key does not match the transaction")]
    ReceiverKeyMismatch,
    #[error("witnessed sender account key does not match the signature")]
    SenderKeyMismatch,
    #[error("merkle proof index does not match the witnessed transaction index")]
    IndexMismatch,
    #[error("sender and receiver index must differ")]
    SelfTransfer,
    #[error("witnessed account nonce does not match the transaction nonce")]
    NonceMismatch,
    #[error("file is not writeable by this sender")]
    FileNotWriteable,
    #[error("random oracle lookup does not resolve to the witnessed nonce")]
    OracleNonceMismatch,
    #[error("oracle nonce did not strictly increase since the last mining slot")]
    OracleNonceNotIncreasing,
    #[error("proof-of-work index commitment does not match the opened leaves")]
    PowIndexMismatch,
    #[error("proof-of-work hash does not clear the difficulty target")]
    PowDifficultyNotMet,
    #[error("mining nonce does not fit in the allotted bit width")]
    MiningNonceOutOfRange,
    #[error(transparent)]
    Merkle(#[from] rollup_core::MerkleError),
    #[error("public-input hash does not match the recomputed digest")]
    PublicInputMismatch,
}
