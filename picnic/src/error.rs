//! Error types for Picnic operations.

use core::fmt;

/// Errors that can occur during Picnic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The parameter set is valid but not compiled into the linked libpicnic.
    UnsupportedParameters,

    /// The value does not name a Picnic parameter set.
    InvalidParameters,

    /// The provided bytes do not represent a valid Picnic key.
    InvalidKey,

    /// Key generation failed.
    ///
    /// libpicnic draws its own randomness, so this usually means the
    /// system RNG was unavailable.
    KeyGeneration,

    /// Signature generation failed.
    Signing,

    /// Signature verification failed.
    BadSignature,

    /// Malformed NIST signed message or KAT input.
    InvalidFormat,

    /// A private key and a public key belong to different parameter sets.
    ParameterMismatch,

    /// A known-answer test vector did not reproduce. Holds the vector's `count`.
    KatMismatch(usize),

    /// Internal error (should not happen).
    Internal,
}

impl Error {
    /// Convert a libpicnic return code to a Rust error.
    ///
    /// libpicnic only reports `0` or `-1`; the caller supplies the error that
    /// `-1` means for the operation at hand. Returns `None` on success.
    #[inline]
    pub(crate) fn from_code(code: i32, on_failure: Error) -> Option<Self> {
        match code {
            0 => None,
            -1 => Some(on_failure),
            _ => Some(Error::Internal),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedParameters => write!(f, "parameter set not supported by libpicnic"),
            Error::InvalidParameters => write!(f, "invalid parameter set"),
            Error::InvalidKey => write!(f, "invalid key"),
            Error::KeyGeneration => write!(f, "key generation failed"),
            Error::Signing => write!(f, "signing failed"),
            Error::BadSignature => write!(f, "invalid signature"),
            Error::InvalidFormat => write!(f, "invalid format"),
            Error::ParameterMismatch => write!(f, "keys use different parameter sets"),
            Error::KatMismatch(count) => write!(f, "known answer test {} failed", count),
            Error::Internal => write!(f, "internal error"),
        }
    }
}

impl std::error::Error for Error {}

/// A specialized `Result` type for Picnic operations.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Error::from_code(0, Error::Signing), None);
        assert_eq!(Error::from_code(-1, Error::Signing), Some(Error::Signing));
        assert_eq!(Error::from_code(-7, Error::Signing), Some(Error::Internal));
    }

    #[test]
    fn test_display() {
        assert_eq!(Error::KatMismatch(3).to_string(), "known answer test 3 failed");
        assert_eq!(Error::InvalidKey.to_string(), "invalid key");
    }
}
