#[cfg(feature = "std")]
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(Error))]
pub enum CryptoError {
    #[cfg_attr(feature = "std", error("field element does not fit in {bits} bits"))]
    BitWidthExceeded { bits: usize },

    #[cfg_attr(feature = "std", error("inversion of zero is undefined"))]
    ZeroInverse,

    #[cfg_attr(feature = "std", error("x-coordinate is not on the curve"))]
    NotOnCurve,

    #[cfg_attr(
        feature = "std",
        error("candidate point is not in the prime-order subgroup")
    )]
    NotInSubgroup,

    #[cfg_attr(feature = "std", error("EdDSA signature verification failed"))]
    SignatureInvalid,
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for CryptoError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CryptoError::BitWidthExceeded { bits } => {
                write!(f, "field element does not fit in {} bits", bits)
            }
            CryptoError::ZeroInverse => write!(f, "inversion of zero is undefined"),
            CryptoError::NotOnCurve => write!(f, "x-coordinate is not on the curve"),
            CryptoError::NotInSubgroup => {
                write!(f, "candidate point is not in the prime-order subgroup")
            }
            CryptoError::SignatureInvalid => write!(f, "EdDSA signature verification failed"),
        }
    }
}
