//! Signed-message encoding of the NIST PQC competition.
//!
//! NIST's test harness stores a signature together with its message as
//!
//! ```text
//! +----------------+-----------+-----------+
//! | siglen: u32 LE |  message  | signature |
//! +----------------+-----------+-----------+
//! ```
//!
//! The message length is implied by the total length.

use crate::{Error, PrivateKey, PublicKey, Result, Signature};

/// Size of the signature length prefix.
pub const LENGTH_SIZE: usize = core::mem::size_of::<u32>();

/// Pack a message and a signature into a NIST signed message.
///
/// # Panics
///
/// Panics if the signature is longer than `u32::MAX` bytes, which no Picnic
/// parameter set can produce.
pub fn pack_signature(message: &[u8], signature: &[u8]) -> Vec<u8> {
    let sig_len = u32::try_from(signature.len()).expect("signature length exceeds u32");

    let mut data = Vec::with_capacity(LENGTH_SIZE + message.len() + signature.len());
    data.extend_from_slice(&sig_len.to_le_bytes());
    data.extend_from_slice(message);
    data.extend_from_slice(signature);
    data
}

/// Split a NIST signed message into `(message, signature)`.
///
/// # Errors
///
/// [`Error::InvalidFormat`] if the input is shorter than the length prefix or
/// the prefix claims more signature bytes than are present.
pub fn unpack_signature(data: &[u8]) -> Result<(&[u8], &[u8])> {
    let (prefix, rest) = data
        .split_first_chunk::<LENGTH_SIZE>()
        .ok_or(Error::InvalidFormat)?;

    let sig_len = usize::try_from(u32::from_le_bytes(*prefix)).map_err(|_| Error::InvalidFormat)?;
    let msg_len = rest.len().checked_sub(sig_len).ok_or(Error::InvalidFormat)?;

    Ok(rest.split_at(msg_len))
}

/// Sign `message` and encode the result as a NIST signed message.
pub fn sign_nist(sk: &PrivateKey, message: &[u8]) -> Result<Vec<u8>> {
    let signature = sk.sign(message)?;
    Ok(pack_signature(message, signature.as_bytes()))
}

/// Verify a NIST signed message and return the signed message.
///
/// Returns `Ok(None)` if the signature does not verify.
pub fn verify_nist<'a>(pk: &PublicKey, signed_message: &'a [u8]) -> Result<Option<&'a [u8]>> {
    let (message, signature) = unpack_signature(signed_message)?;
    let signature = Signature::from_bytes(signature);

    Ok(pk.verify(message, &signature)?.then_some(message))
}

/// An owned NIST signed message.
#[derive(Clone, PartialEq, Eq)]
pub struct SignedMessage {
    data: Vec<u8>,
    msg_len: usize,
}

impl SignedMessage {
    /// Pack `message` and `signature`.
    pub fn new(message: &[u8], signature: &Signature) -> Self {
        Self {
            data: pack_signature(message, signature.as_bytes()),
            msg_len: message.len(),
        }
    }

    /// Parse an encoded signed message.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let (message, _) = unpack_signature(bytes)?;
        Ok(Self {
            data: bytes.to_vec(),
            msg_len: message.len(),
        })
    }

    /// Sign `message` with `sk`.
    pub fn sign(sk: &PrivateKey, message: &[u8]) -> Result<Self> {
        let signature = sk.sign(message)?;
        Ok(Self::new(message, &signature))
    }

    /// Verify with `pk`, returning the message on success.
    pub fn open(&self, pk: &PublicKey) -> Result<&[u8]> {
        let signature = Signature::from_bytes(self.signature());
        pk.verify_strict(self.message(), &signature)?;
        Ok(self.message())
    }

    /// The signed message.
    #[inline]
    pub fn message(&self) -> &[u8] {
        &self.data[LENGTH_SIZE..LENGTH_SIZE + self.msg_len]
    }

    /// The detached signature.
    #[inline]
    pub fn signature(&self) -> &[u8] {
        &self.data[LENGTH_SIZE + self.msg_len..]
    }

    /// The full encoding.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Convert into the full encoding.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

impl core::fmt::Debug for SignedMessage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SignedMessage")
            .field("message_len", &self.msg_len)
            .field("signature_len", &self.signature().len())
            .finish()
    }
}

impl AsRef<[u8]> for SignedMessage {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_layout() {
        let packed = pack_signature(b"msg", &[0xAA, 0xBB]);
        assert_eq!(packed, [2, 0, 0, 0, b'm', b's', b'g', 0xAA, 0xBB]);
    }

    #[test]
    fn test_unpack() {
        let data = [2, 0, 0, 0, b'h', b'i', 0x01, 0x02];
        let (msg, sig) = unpack_signature(&data).unwrap();
        assert_eq!(msg, b"hi");
        assert_eq!(sig, &[0x01, 0x02]);
    }

    #[test]
    fn test_unpack_empty_message() {
        let data = [3, 0, 0, 0, 7, 8, 9];
        let (msg, sig) = unpack_signature(&data).unwrap();
        assert!(msg.is_empty());
        assert_eq!(sig, &[7, 8, 9]);
    }

    #[test]
    fn test_unpack_empty_signature() {
        let data = [0, 0, 0, 0, b'x'];
        let (msg, sig) = unpack_signature(&data).unwrap();
        assert_eq!(msg, b"x");
        assert!(sig.is_empty());
    }

    #[test]
    fn test_unpack_rejects_short_input() {
        assert_eq!(unpack_signature(&[]), Err(Error::InvalidFormat));
        assert_eq!(unpack_signature(&[1, 0, 0]), Err(Error::InvalidFormat));
    }

    #[test]
    fn test_unpack_rejects_oversized_length() {
        assert_eq!(unpack_signature(&[5, 0, 0, 0, 1, 2]), Err(Error::InvalidFormat));
        assert_eq!(
            unpack_signature(&[0xFF, 0xFF, 0xFF, 0xFF]),
            Err(Error::InvalidFormat)
        );
    }

    #[test]
    fn test_length_prefix_is_little_endian() {
        let sig = vec![0u8; 0x0102];
        let packed = pack_signature(b"", &sig);
        assert_eq!(&packed[..4], &[0x02, 0x01, 0, 0]);
    }

    #[test]
    fn test_signed_message_accessors() {
        let sm = SignedMessage::from_bytes(&[1, 0, 0, 0, b'a', b'b', 0x42]).unwrap();
        assert_eq!(sm.message(), b"ab");
        assert_eq!(sm.signature(), &[0x42]);
        assert_eq!(sm.as_bytes().len(), 7);
        assert!(SignedMessage::from_bytes(&[9, 0, 0, 0]).is_err());
    }
}
