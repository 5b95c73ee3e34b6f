//! Key pair types: private key, public key, and the module-level helpers
//! `keygen`/`sign`/`verify`/`validate_keypair`.

use core::ffi::c_int;
use core::ops::{Deref, DerefMut};

use picnic_sys as ffi;
use subtle::ConstantTimeEq;
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::{Error, Parameters, Result, Signature};

/// A Picnic key pair containing both private and public keys.
///
/// # Example
///
/// ```no_run
/// use picnic::{KeyPair, Parameters};
///
/// let keypair = KeyPair::generate(Parameters::PicnicL1FS).unwrap();
///
/// let message = b"Hello, Picnic!";
/// let signature = keypair.sign(message).unwrap();
///
/// assert!(keypair.public_key().verify(message, &signature).unwrap());
/// ```
#[derive(Clone, Debug)]
pub struct KeyPair {
    private_key: PrivateKey,
    public_key: PublicKey,
}

impl KeyPair {
    /// Generate a new key pair.
    ///
    /// libpicnic seeds key generation from the operating system's RNG.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedParameters`] if the linked library was built without
    /// `params`, [`Error::KeyGeneration`] if the library fails otherwise.
    pub fn generate(params: Parameters) -> Result<Self> {
        params.ensure_supported()?;

        let mut sk = RawPrivateKey::default();
        let mut pk = Box::<ffi::picnic_publickey_t>::default();

        let result = unsafe { ffi::picnic_keygen(params.to_raw(), &mut *pk, &mut *sk) };

        if let Some(err) = Error::from_code(result, Error::KeyGeneration) {
            warn!(parameters = params.name(), "key generation failed");
            return Err(err);
        }
        debug!(parameters = params.name(), "generated key pair");

        Ok(Self {
            private_key: PrivateKey { inner: sk, params },
            public_key: PublicKey { inner: pk, params },
        })
    }

    /// Build a key pair from existing keys, checking that they belong together.
    ///
    /// # Errors
    ///
    /// [`Error::ParameterMismatch`] if the keys use different parameter sets,
    /// [`Error::InvalidKey`] if the public key does not match the private key.
    pub fn from_keys(private_key: PrivateKey, public_key: PublicKey) -> Result<Self> {
        if private_key.params != public_key.params {
            return Err(Error::ParameterMismatch);
        }
        if !validate_keypair(&private_key, &public_key) {
            return Err(Error::InvalidKey);
        }
        Ok(Self {
            private_key,
            public_key,
        })
    }

    /// The parameter set of both keys.
    #[inline]
    pub fn parameters(&self) -> Parameters {
        self.public_key.params
    }

    /// Get a reference to the private key.
    #[inline]
    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    /// Get a reference to the public key.
    #[inline]
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Consume the key pair and return the private key.
    #[inline]
    pub fn into_private_key(self) -> PrivateKey {
        self.private_key
    }

    /// Consume the key pair and return both keys.
    #[inline]
    pub fn into_keys(self) -> (PrivateKey, PublicKey) {
        (self.private_key, self.public_key)
    }

    /// Sign a message using the private key.
    #[inline]
    pub fn sign(&self, message: &[u8]) -> Result<Signature> {
        self.private_key.sign(message)
    }

    /// Check the key pair with libpicnic.
    #[inline]
    pub fn validate(&self) -> bool {
        validate_keypair(&self.private_key, &self.public_key)
    }
}

/// Heap-allocated `picnic_privatekey_t`, cleared by libpicnic on drop.
///
/// Every private key buffer handed to libpicnic lives in one of these, so
/// failed reads and key generations are cleared too.
#[derive(Clone, Default)]
struct RawPrivateKey(Box<ffi::picnic_privatekey_t>);

impl RawPrivateKey {
    fn clear(&mut self) {
        unsafe { ffi::picnic_clear_private_key(&mut *self.0) };
    }
}

impl Deref for RawPrivateKey {
    type Target = ffi::picnic_privatekey_t;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for RawPrivateKey {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Drop for RawPrivateKey {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Length written by `picnic_write_*_key`, which must be the full key size.
fn written_len(written: c_int, expected: usize) -> Result<usize> {
    match usize::try_from(written) {
        Ok(len) if len == expected => Ok(len),
        _ => Err(Error::Internal),
    }
}

/// A Picnic private key.
///
/// Private keys should be kept secret. When dropped, the key material
/// is cleared by libpicnic.
#[derive(Clone)]
pub struct PrivateKey {
    inner: RawPrivateKey,
    params: Parameters,
}

impl PrivateKey {
    /// Create from the serialized form.
    ///
    /// The parameter set is taken from the encoding.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKey`] if libpicnic rejects the bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut inner = RawPrivateKey::default();

        let result =
            unsafe { ffi::picnic_read_private_key(&mut *inner, bytes.as_ptr(), bytes.len()) };
        if let Some(err) = Error::from_code(result, Error::InvalidKey) {
            return Err(err);
        }

        let raw = unsafe { ffi::picnic_get_private_key_param(&*inner) };
        let params = Parameters::from_raw(raw).map_err(|_| Error::InvalidKey)?;

        Ok(Self { inner, params })
    }

    /// Serialize this private key.
    ///
    /// The returned buffer is zeroized when dropped.
    ///
    /// # Errors
    ///
    /// [`Error::Internal`] if libpicnic does not write a full key.
    pub fn to_bytes(&self) -> Result<Zeroizing<Vec<u8>>> {
        let mut buf = Zeroizing::new(vec![0u8; self.params.private_key_size()]);

        let written =
            unsafe { ffi::picnic_write_private_key(&*self.inner, buf.as_mut_ptr(), buf.len()) };
        if let Err(err) = written_len(written, buf.len()) {
            warn!(parameters = self.params.name(), written, "writing private key failed");
            return Err(err);
        }

        Ok(buf)
    }

    /// The parameter set of this key.
    #[inline]
    pub fn parameters(&self) -> Parameters {
        self.params
    }

    /// Derive the public key from this private key.
    pub fn public_key(&self) -> Result<PublicKey> {
        let mut pk = Box::<ffi::picnic_publickey_t>::default();

        let result = unsafe { ffi::picnic_sk_to_pk(&*self.inner, &mut *pk) };
        if let Some(err) = Error::from_code(result, Error::InvalidKey) {
            return Err(err);
        }

        Ok(PublicKey {
            inner: pk,
            params: self.params,
        })
    }

    /// Sign a message.
    ///
    /// Picnic signing is deterministic: the same key and message always give
    /// the same signature.
    pub fn sign(&self, message: &[u8]) -> Result<Signature> {
        match Signature::create(&self.inner, self.params.max_signature_size(), message) {
            Ok(sig) => {
                debug!(
                    parameters = self.params.name(),
                    message_len = message.len(),
                    signature_len = sig.len(),
                    "signed message"
                );
                Ok(sig)
            }
            Err(err) => {
                warn!(parameters = self.params.name(), error = %err, "signing failed");
                Err(err)
            }
        }
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        if self.params != other.params {
            return false;
        }
        match (self.to_bytes(), other.to_bytes()) {
            (Ok(a), Ok(b)) => bool::from(a.ct_eq(&b)),
            _ => false,
        }
    }
}

impl Eq for PrivateKey {}

impl core::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PrivateKey")
            .field("parameters", &self.params)
            .finish_non_exhaustive()
    }
}

impl TryFrom<&[u8]> for PrivateKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}

/// A Picnic public key.
///
/// Public keys can be freely shared and are used to verify signatures.
#[derive(Clone)]
pub struct PublicKey {
    inner: Box<ffi::picnic_publickey_t>,
    params: Parameters,
}

impl PublicKey {
    /// Create from the serialized form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKey`] if libpicnic rejects the bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut inner = Box::<ffi::picnic_publickey_t>::default();

        let result =
            unsafe { ffi::picnic_read_public_key(&mut *inner, bytes.as_ptr(), bytes.len()) };
        if let Some(err) = Error::from_code(result, Error::InvalidKey) {
            return Err(err);
        }

        let raw = unsafe { ffi::picnic_get_public_key_param(&*inner) };
        let params = Parameters::from_raw(raw).map_err(|_| Error::InvalidKey)?;

        Ok(Self { inner, params })
    }

    /// Serialize this public key.
    ///
    /// # Errors
    ///
    /// [`Error::Internal`] if libpicnic does not write a full key.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; self.params.public_key_size()];

        let written =
            unsafe { ffi::picnic_write_public_key(&*self.inner, buf.as_mut_ptr(), buf.len()) };
        if let Err(err) = written_len(written, buf.len()) {
            warn!(parameters = self.params.name(), written, "writing public key failed");
            return Err(err);
        }

        Ok(buf)
    }

    /// The parameter set of this key.
    #[inline]
    pub fn parameters(&self) -> Parameters {
        self.params
    }

    /// Verify a signature over a message.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the signature is valid
    /// - `Ok(false)` if the signature is invalid
    /// - `Err(_)` if libpicnic reported something other than success or rejection
    pub fn verify(&self, message: &[u8], signature: &Signature) -> Result<bool> {
        if signature.is_empty() {
            return Ok(false);
        }

        let result = unsafe {
            ffi::picnic_verify(
                &*self.inner,
                message.as_ptr(),
                message.len(),
                signature.data.as_ptr(),
                signature.data.len(),
            )
        };

        let valid = match result {
            0 => true,
            -1 => false,
            _ => return Err(Error::Internal),
        };
        debug!(
            parameters = self.params.name(),
            message_len = message.len(),
            signature_len = signature.len(),
            valid,
            "verified signature"
        );
        Ok(valid)
    }

    /// Verify a signature, returning an error if invalid.
    ///
    /// This is a convenience method that converts `Ok(false)` to
    /// `Err(Error::BadSignature)`.
    pub fn verify_strict(&self, message: &[u8], signature: &Signature) -> Result<()> {
        if self.verify(message, signature)? {
            Ok(())
        } else {
            Err(Error::BadSignature)
        }
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        if self.params != other.params {
            return false;
        }
        match (self.to_bytes(), other.to_bytes()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for PublicKey {}

impl core::fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut s = f.debug_struct("PublicKey");
        s.field("parameters", &self.params);
        if let Ok(bytes) = self.to_bytes() {
            s.field("key", &hex::encode(bytes));
        }
        s.finish()
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}

/// Generate a new key pair for `params`, returned as `(private, public)`.
pub fn keygen(params: Parameters) -> Result<(PrivateKey, PublicKey)> {
    KeyPair::generate(params).map(KeyPair::into_keys)
}

/// Sign `message` with `sk`.
#[inline]
pub fn sign(sk: &PrivateKey, message: &[u8]) -> Result<Signature> {
    sk.sign(message)
}

/// Verify `signature` over `message` under `pk`.
///
/// The signature may be given as any byte string.
pub fn verify(pk: &PublicKey, message: &[u8], signature: impl AsRef<[u8]>) -> Result<bool> {
    let signature = Signature::from_bytes(signature.as_ref());
    pk.verify(message, &signature)
}

/// Check that `sk` and `pk` form a key pair.
///
/// Keys of different parameter sets never match.
pub fn validate_keypair(sk: &PrivateKey, pk: &PublicKey) -> bool {
    if sk.params != pk.params {
        return false;
    }
    unsafe { ffi::picnic_validate_keypair(&*sk.inner, &*pk.inner) == 0 }
}
