//! Signature type.

use crate::{Error, Result};

/// A Picnic signature.
///
/// Picnic signatures have variable length, bounded by
/// [`Parameters::max_signature_size`](crate::Parameters::max_signature_size).
/// A signature carries no parameter set of its own; it is checked against the
/// public key it is verified with.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    pub(crate) data: Vec<u8>,
}

impl Signature {
    /// Create a signature from raw bytes.
    ///
    /// Any byte string is accepted. Malformed signatures are rejected by
    /// verification, not here, matching libpicnic's own behaviour.
    #[inline]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            data: bytes.to_vec(),
        }
    }

    /// Produce a signature over `message` with a raw private key.
    pub(crate) fn create(
        sk: &picnic_sys::picnic_privatekey_t,
        max_len: usize,
        message: &[u8],
    ) -> Result<Self> {
        let mut sig = vec![0u8; max_len];
        let mut sig_len = max_len;

        let result = unsafe {
            picnic_sys::picnic_sign(
                sk,
                message.as_ptr(),
                message.len(),
                sig.as_mut_ptr(),
                &mut sig_len,
            )
        };

        if let Some(err) = Error::from_code(result, Error::Signing) {
            return Err(err);
        }
        if sig_len > max_len {
            return Err(Error::Internal);
        }

        sig.truncate(sig_len);
        Ok(Self { data: sig })
    }

    /// Get the raw bytes of this signature.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Convert the signature into raw bytes.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Get the length of this signature in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if signature is empty (never true for signatures produced by libpicnic).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl core::fmt::Debug for Signature {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Signature")
            .field("len", &self.data.len())
            .finish()
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl From<Vec<u8>> for Signature {
    fn from(data: Vec<u8>) -> Self {
        Self { data }
    }
}

impl From<&[u8]> for Signature {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}
